//! UI context and frame loop
//!
//! Single-threaded, cooperative: all tooltip work happens either directly in
//! a call from the host or inside [`UiContext::run_frame`]. Positioning is a
//! one-shot pre-paint callback per attach (the host schedules layout, then
//! runs a frame); animations advance on the same frame tick.

use tracing::trace;

use supertips_animation::AnimationDriver;
use supertips_core::{ClickRouter, ElementTree, NodeId, Rect};

use crate::view::ToolTipView;

type PrePaintFn = Box<dyn FnOnce(&mut UiContext)>;

/// Owns the element tree, the animation driver, and per-frame bookkeeping
pub struct UiContext {
    pub tree: ElementTree,
    pub animations: AnimationDriver,
    viewport: Rect,
    router: ClickRouter<ToolTipView>,
    pre_paint: Vec<PrePaintFn>,
}

impl UiContext {
    pub fn new(viewport: Rect) -> Self {
        Self {
            tree: ElementTree::new(),
            animations: AnimationDriver::new(),
            viewport,
            router: ClickRouter::new(),
            pre_paint: Vec::new(),
        }
    }

    /// Visible bounds of the window, as reported by the host
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Queue a callback to run once, before the next frame's animation tick
    pub fn schedule_pre_paint(&mut self, callback: impl FnOnce(&mut UiContext) + 'static) {
        self.pre_paint.push(Box::new(callback));
    }

    /// Run one frame: drain pre-paint callbacks (FIFO), then tick animations
    pub fn run_frame(&mut self, dt_ms: f32) {
        if !self.pre_paint.is_empty() {
            let queued = std::mem::take(&mut self.pre_paint);
            trace!(count = queued.len(), "running pre-paint callbacks");
            for callback in queued {
                callback(self);
            }
        }
        let Self {
            tree, animations, ..
        } = self;
        animations.tick(tree, dt_ms);
    }

    /// Route a pointer activation at `hit` to the owning tooltip surface
    pub fn dispatch_click(&mut self, hit: NodeId) {
        let view = self.router.route(&self.tree, hit);
        if let Some(view) = view {
            view.click(self);
        }
    }

    pub(crate) fn register_click(&mut self, node: NodeId, view: ToolTipView) {
        self.router.register(node, view);
    }

    pub(crate) fn unregister_click(&mut self, node: NodeId) {
        self.router.unregister(node);
    }
}
