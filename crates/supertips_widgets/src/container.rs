//! Tooltip container
//!
//! A layer node that hosts tooltip surfaces. The container keeps its own
//! intrinsic size regardless of its children, and children report their
//! natural (unconstrained) measured sizes — the tree never clamps a child
//! to its parent — so a surface's size is decoupled from the container's.
//! That decoupling is what lets positioning work from real anchor screen
//! geometry instead of container-relative layout flow.

use tracing::trace;

use supertips_core::{NodeId, TreeError};

use crate::context::UiContext;
use crate::tooltip::ToolTip;
use crate::view::ToolTipView;

/// Hosts zero or more tooltip surfaces
pub struct ToolTipContainer {
    node: NodeId,
}

impl ToolTipContainer {
    pub fn new(ctx: &mut UiContext) -> Self {
        let node = ctx.tree.create_node("tooltip_container");
        Self { node }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Create a surface showing `tooltip` positioned relative to `anchor`,
    /// attach it under this container, and return it.
    ///
    /// The container does not track the surface afterwards and does not
    /// deduplicate: showing twice for the same anchor yields two surfaces.
    /// Removal is owned by the caller and the surface itself.
    pub fn show_tooltip(
        &self,
        ctx: &mut UiContext,
        tooltip: &ToolTip,
        anchor: NodeId,
    ) -> Result<ToolTipView, TreeError> {
        if !ctx.tree.contains(self.node) {
            return Err(TreeError::NodeMissing);
        }
        let view = ToolTipView::new(ctx);
        ctx.tree.attach_child(self.node, view.node())?;
        view.attach(ctx, tooltip, anchor);
        trace!(container = ?self.node, anchor = ?anchor, "tooltip surface created");
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use supertips_core::Rect;

    #[test]
    fn factory_attaches_surface_under_container() {
        let mut ctx = UiContext::new(Rect::new(0.0, 0.0, 360.0, 640.0));
        let container = ToolTipContainer::new(&mut ctx);
        let anchor = ctx.tree.create_node("anchor");

        let view = container
            .show_tooltip(&mut ctx, &ToolTip::new(), anchor)
            .unwrap();
        assert_eq!(ctx.tree.parent(view.node()), Some(container.node()));
    }

    #[test]
    fn duplicate_surfaces_for_one_anchor_are_allowed() {
        let mut ctx = UiContext::new(Rect::new(0.0, 0.0, 360.0, 640.0));
        let container = ToolTipContainer::new(&mut ctx);
        let anchor = ctx.tree.create_node("anchor");

        let a = container
            .show_tooltip(&mut ctx, &ToolTip::new(), anchor)
            .unwrap();
        let b = container
            .show_tooltip(&mut ctx, &ToolTip::new(), anchor)
            .unwrap();
        assert_ne!(a.node(), b.node());
        assert_eq!(ctx.tree.children(container.node()).len(), 2);
    }

    #[test]
    fn destroyed_container_reports_missing() {
        let mut ctx = UiContext::new(Rect::new(0.0, 0.0, 360.0, 640.0));
        let container = ToolTipContainer::new(&mut ctx);
        let anchor = ctx.tree.create_node("anchor");
        ctx.tree.detach(container.node());

        let result = container.show_tooltip(&mut ctx, &ToolTip::new(), anchor);
        assert_eq!(result.err(), Some(TreeError::NodeMissing));
    }
}
