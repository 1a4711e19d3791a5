//! supertips animation system
//!
//! Parallel multi-property batches driven by a single per-frame tick:
//!
//! - **Batches**: translation, scale, and opacity tracks sharing one clock,
//!   so every property in a batch starts and completes together
//! - **Driver**: advances running batches, writes sampled values into the
//!   element tree, and fires a completion callback when a batch finishes
//!
//! Fire-and-forget by design: starting a batch returns immediately and
//! deferred work (like detaching a tooltip after its exit animation) lives
//! in the completion callback.

pub mod batch;
pub mod driver;
pub mod easing;

pub use batch::{AnimatedProperty, AnimationBatch, CompletionFn, Track, DEFAULT_DURATION_MS};
pub use driver::{AnimationDriver, BatchId};
pub use easing::Easing;
