//! supertips core
//!
//! The minimal retained element tree the tooltip crates build on:
//!
//! - **Element tree**: slotmap-backed nodes with screen rects, measured
//!   sizes, and render properties
//! - **Weak handles**: `NodeId` is a generational key, so a handle held past
//!   a node's destruction fails lookup instead of dangling
//! - **Click routing**: hit node to nearest registered ancestor handler

pub mod color;
pub mod events;
pub mod geometry;
pub mod tree;

pub use color::Color;
pub use events::ClickRouter;
pub use geometry::{Point, Rect, Size};
pub use tree::{ElementTree, FontId, NodeId, RenderProps, TreeError};
