//! Animation driver
//!
//! Owns every in-flight batch and advances them once per frame. Property
//! writes for a frame all land before any completion callback runs, so a
//! callback that detaches its target observes the final animated state.

use slotmap::{new_key_type, SlotMap};
use tracing::{debug, trace};

use supertips_core::ElementTree;

use crate::batch::AnimationBatch;

new_key_type! {
    pub struct BatchId;
}

struct Running {
    batch: AnimationBatch,
    elapsed_ms: f32,
}

/// Ticks all running animation batches
#[derive(Default)]
pub struct AnimationDriver {
    running: SlotMap<BatchId, Running>,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a batch, immediately applying its start values to the target.
    ///
    /// Fire-and-forget: there is no cancellation handle. The batch runs to
    /// completion on subsequent ticks.
    pub fn start(&mut self, tree: &mut ElementTree, batch: AnimationBatch) -> BatchId {
        if let Some(props) = tree.props_mut(batch.target()) {
            for (property, value) in batch.sample(0.0) {
                property.write(props, value);
            }
        }
        trace!(node = ?batch.target(), duration_ms = batch.duration(), "batch started");
        self.running.insert(Running {
            batch,
            elapsed_ms: 0.0,
        })
    }

    /// Advance all batches by `dt_ms`, writing sampled values into the tree.
    ///
    /// Finished batches are removed and their completion callbacks run with
    /// the tree, after all property writes. A batch whose target vanished
    /// ends silently without its callback.
    pub fn tick(&mut self, tree: &mut ElementTree, dt_ms: f32) {
        if self.running.is_empty() {
            return;
        }

        let mut finished = Vec::new();
        for (id, run) in self.running.iter_mut() {
            run.elapsed_ms += dt_ms;
            let progress = (run.elapsed_ms / run.batch.duration() as f32).min(1.0);

            let Some(props) = tree.props_mut(run.batch.target()) else {
                debug!(node = ?run.batch.target(), "batch target gone, dropping batch");
                finished.push((id, false));
                continue;
            };
            for (property, value) in run.batch.sample(progress) {
                property.write(props, value);
            }

            if progress >= 1.0 {
                finished.push((id, true));
            }
        }

        for (id, completed) in finished {
            let Some(mut run) = self.running.remove(id) else {
                continue;
            };
            if !completed {
                continue;
            }
            trace!(node = ?run.batch.target(), "batch completed");
            if let Some(callback) = run.batch.take_completion() {
                callback(tree);
            }
        }
    }

    pub fn is_idle(&self) -> bool {
        self.running.is_empty()
    }

    pub fn len(&self) -> usize {
        self.running.len()
    }

    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }
}
