//! Parallel animation batches
//!
//! A batch animates several render properties of one node over a shared
//! clock. Tracks never stagger: all of them start at progress 0 and land on
//! their end values at progress 1, which is what the tooltip enter/exit
//! animations need (translate + scale + fade together).

use smallvec::SmallVec;

use supertips_core::{ElementTree, NodeId, RenderProps};

use crate::easing::Easing;

/// Default batch duration when none is set
pub const DEFAULT_DURATION_MS: u32 = 300;

/// Render properties a track can animate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatedProperty {
    TranslateX,
    TranslateY,
    ScaleX,
    ScaleY,
    Opacity,
}

impl AnimatedProperty {
    /// Write a sampled value into a node's render properties
    pub fn write(&self, props: &mut RenderProps, value: f32) {
        match self {
            AnimatedProperty::TranslateX => props.translate_x = value,
            AnimatedProperty::TranslateY => props.translate_y = value,
            AnimatedProperty::ScaleX => props.scale_x = value,
            AnimatedProperty::ScaleY => props.scale_y = value,
            AnimatedProperty::Opacity => props.opacity = value,
        }
    }
}

/// A single animated property with start and end values
#[derive(Clone, Copy, Debug)]
pub struct Track {
    pub property: AnimatedProperty,
    pub from: f32,
    pub to: f32,
}

impl Track {
    fn value_at(&self, eased: f32) -> f32 {
        self.from + (self.to - self.from) * eased
    }
}

/// Callback run with the tree once a batch finishes
pub type CompletionFn = Box<dyn FnOnce(&mut ElementTree)>;

/// A parallel multi-property animation on one node
pub struct AnimationBatch {
    target: NodeId,
    tracks: SmallVec<[Track; 5]>,
    duration_ms: u32,
    easing: Easing,
    on_complete: Option<CompletionFn>,
}

impl AnimationBatch {
    pub fn new(target: NodeId) -> Self {
        Self {
            target,
            tracks: SmallVec::new(),
            duration_ms: DEFAULT_DURATION_MS,
            easing: Easing::default(),
            on_complete: None,
        }
    }

    /// Add a track to the batch (builder pattern)
    pub fn track(mut self, property: AnimatedProperty, from: f32, to: f32) -> Self {
        self.tracks.push(Track { property, from, to });
        self
    }

    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms.max(1);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the callback run (with the tree) when the batch completes.
    ///
    /// Batches whose target vanished mid-flight end silently and never run
    /// their callback.
    pub fn on_complete(mut self, callback: impl FnOnce(&mut ElementTree) + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn duration(&self) -> u32 {
        self.duration_ms
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub(crate) fn take_completion(&mut self) -> Option<CompletionFn> {
        self.on_complete.take()
    }

    /// Sample every track at the given progress (clamped to 0..=1)
    pub fn sample(&self, progress: f32) -> impl Iterator<Item = (AnimatedProperty, f32)> + '_ {
        let eased = self.easing.apply(progress.clamp(0.0, 1.0));
        self.tracks.iter().map(move |t| (t.property, t.value_at(eased)))
    }
}

impl std::fmt::Debug for AnimationBatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationBatch")
            .field("target", &self.target)
            .field("tracks", &self.tracks)
            .field("duration_ms", &self.duration_ms)
            .field("easing", &self.easing)
            .field("has_completion", &self.on_complete.is_some())
            .finish()
    }
}
