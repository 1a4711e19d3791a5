//! supertips widgets
//!
//! Anchored tooltip overlays:
//!
//! - [`ToolTip`] — plain descriptor of what a tooltip shows and how it
//!   animates
//! - [`ToolTipView`] — the overlay surface; positions itself against an
//!   anchor node once its own size is known, animates in and out
//! - [`ToolTipContainer`] — hosts surfaces and exposes the factory that
//!   creates and attaches one for a given anchor
//! - [`UiContext`] — the single-threaded frame loop the above run on
//!
//! # Example
//!
//! ```
//! use supertips_core::{Rect, Size};
//! use supertips_widgets::{AnimationKind, ToolTip, ToolTipContainer, UiContext};
//!
//! let mut ctx = UiContext::new(Rect::new(0.0, 0.0, 360.0, 640.0));
//!
//! // Host-owned nodes: the layer tooltips live on and the anchor element.
//! let container = ToolTipContainer::new(&mut ctx);
//! ctx.tree.set_screen_rect(container.node(), Rect::new(0.0, 0.0, 360.0, 640.0));
//! let anchor = ctx.tree.create_node("button");
//! ctx.tree.set_screen_rect(anchor, Rect::new(100.0, 50.0, 40.0, 20.0));
//!
//! let tip = ToolTip::new()
//!     .text("Tap to learn more")
//!     .animation(AnimationKind::FromAnchor);
//! let view = container.show_tooltip(&mut ctx, &tip, anchor).unwrap();
//!
//! // The host layout pass reports the surface's natural size, then the
//! // pre-paint callback positions it on the next frame.
//! ctx.tree.set_measured_size(view.node(), Size::new(120.0, 60.0));
//! ctx.run_frame(16.0);
//! ```

pub mod container;
pub mod context;
pub mod theme;
pub mod tooltip;
pub mod view;

pub use container::ToolTipContainer;
pub use context::UiContext;
pub use tooltip::{AnimationKind, ToolTip};
pub use view::ToolTipView;
