//! The tooltip surface
//!
//! A `ToolTipView` is a column of sub-elements (pointer-up, top frame,
//! content holder, bottom frame, pointer-down, shadow) positioned relative
//! to an anchor node. The anchor reference is weak: the surface holds the
//! anchor's `NodeId` and if the anchor is destroyed before the positioning
//! pass runs, positioning is silently skipped.
//!
//! Positioning runs once per attach, from a pre-paint callback, because it
//! needs the surface's own measured size. The chosen resting point follows
//! the anchor's current screen rect, clamped to the viewport's right edge
//! (one-sided: the right clamp is applied after the left one, with no
//! re-check against the left edge).

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use supertips_animation::{AnimatedProperty, AnimationBatch};
use supertips_core::{NodeId, Point};

use crate::context::UiContext;
use crate::theme;
use crate::tooltip::{AnimationKind, ToolTip};

type ClickListener = Rc<dyn Fn(&ToolTipView, &mut UiContext)>;

struct ViewState {
    root: NodeId,
    pointer_up: NodeId,
    top_frame: NodeId,
    content_holder: NodeId,
    text_node: NodeId,
    bottom_frame: NodeId,
    pointer_down: NodeId,
    shadow: NodeId,
    /// Weak reference; a stale id means the anchor was destroyed
    anchor: Option<NodeId>,
    animation: AnimationKind,
    /// Last computed resting translation
    rest: Point,
    /// Start point of the entry animation, kept for the mirrored exit
    enter_start: Point,
    listener: Option<ClickListener>,
}

/// Shared handle to a tooltip surface
#[derive(Clone)]
pub struct ToolTipView {
    inner: Rc<RefCell<ViewState>>,
}

impl ToolTipView {
    /// Build the surface's sub-element column in the tree.
    ///
    /// Both pointers and the shadow start hidden; positioning reveals the
    /// pointer matching the chosen side and `attach` applies the shadow flag.
    pub fn new(ctx: &mut UiContext) -> Self {
        let tree = &mut ctx.tree;
        let root = tree.create_node("tooltip");
        let pointer_up = tree.create_child(root, "tooltip_pointer_up");
        let top_frame = tree.create_child(root, "tooltip_top_frame");
        let content_holder = tree.create_child(root, "tooltip_content_holder");
        let bottom_frame = tree.create_child(root, "tooltip_bottom_frame");
        let pointer_down = tree.create_child(root, "tooltip_pointer_down");
        let shadow = tree.create_child(root, "tooltip_shadow");
        let text_node = tree.create_child(content_holder, "tooltip_text");

        tree.set_visible(pointer_up, false);
        tree.set_visible(pointer_down, false);
        tree.set_visible(shadow, false);

        let view = Self {
            inner: Rc::new(RefCell::new(ViewState {
                root,
                pointer_up,
                top_frame,
                content_holder,
                text_node,
                bottom_frame,
                pointer_down,
                shadow,
                anchor: None,
                animation: AnimationKind::default(),
                rest: Point::ZERO,
                enter_start: Point::ZERO,
                listener: None,
            })),
        };
        ctx.register_click(root, view.clone());
        view
    }

    /// Root node of the surface
    pub fn node(&self) -> NodeId {
        self.inner.borrow().root
    }

    /// Last computed resting translation (anchor-relative placement result)
    pub fn offset(&self) -> Point {
        self.inner.borrow().rest
    }

    pub fn pointer_up_node(&self) -> NodeId {
        self.inner.borrow().pointer_up
    }

    pub fn pointer_down_node(&self) -> NodeId {
        self.inner.borrow().pointer_down
    }

    /// Bind descriptor values to the sub-elements and schedule positioning.
    ///
    /// Positioning runs as a one-shot pre-paint callback on the next frame,
    /// after the host layout pass has reported the surface's measured size.
    pub fn attach(&self, ctx: &mut UiContext, tooltip: &ToolTip, anchor: NodeId) {
        {
            let mut st = self.inner.borrow_mut();
            st.anchor = Some(anchor);
            st.animation = tooltip.animation;

            ctx.tree.set_text(st.text_node, tooltip.text.clone());
            ctx.tree
                .set_text_color(st.text_node, tooltip.text_color.unwrap_or(theme::TOOLTIP_TEXT));
            if let Some(font) = tooltip.font {
                ctx.tree.set_font(st.text_node, font);
            }

            let fill = tooltip.color.unwrap_or(theme::TOOLTIP_BACKGROUND);
            for node in [
                st.pointer_up,
                st.top_frame,
                st.content_holder,
                st.bottom_frame,
                st.pointer_down,
            ] {
                ctx.tree.set_fill(node, fill);
            }

            if let Some(content) = tooltip.content {
                match ctx.tree.attach_child(st.content_holder, content) {
                    Ok(()) => ctx.tree.detach(st.text_node),
                    Err(_) => debug!("content node gone, keeping text content"),
                }
            }

            ctx.tree.set_visible(st.shadow, tooltip.show_shadow);
            if tooltip.show_shadow {
                ctx.tree.set_fill(st.shadow, theme::TOOLTIP_SHADOW);
            }
        }

        let view = self.clone();
        ctx.schedule_pre_paint(move |ctx| view.apply_position(ctx));
    }

    /// Register the click observer, replacing any previous one
    pub fn set_on_click(&self, listener: impl Fn(&ToolTipView, &mut UiContext) + 'static) {
        self.inner.borrow_mut().listener = Some(Rc::new(listener));
    }

    /// Compute and apply the resting position from the anchor's current
    /// screen rect. Skipped silently if the anchor is gone or the surface
    /// has no measured size yet.
    pub fn apply_position(&self, ctx: &mut UiContext) {
        let (root, anchor, animation) = {
            let st = self.inner.borrow();
            (st.root, st.anchor, st.animation)
        };

        let Some(anchor_rect) = anchor.and_then(|a| ctx.tree.screen_rect(a)) else {
            debug!("anchor gone, skipping tooltip positioning");
            return;
        };
        let Some(size) = ctx.tree.measured_size(root) else {
            debug!("surface has no measured size, skipping tooltip positioning");
            return;
        };
        let parent_origin = ctx
            .tree
            .parent(root)
            .and_then(|p| ctx.tree.screen_rect(p))
            .map(|r| r.origin)
            .unwrap_or(Point::ZERO);
        let viewport = ctx.viewport();

        let rel = Point::new(
            anchor_rect.origin.x - parent_origin.x,
            anchor_rect.origin.y - parent_origin.y,
        );
        let center_x = rel.x + anchor_rect.size.width / 2.0;

        let above_y = rel.y - size.height;
        let below_y = (rel.y + anchor_rect.size.height).max(0.0);

        let mut x = (center_x - size.width / 2.0).max(0.0);
        // One-sided: the right-edge clamp is allowed to push x back past 0.
        if x + size.width > viewport.right() {
            x = viewport.right() - size.width;
        }

        let show_below = above_y < 0.0;
        let y = if show_below { below_y } else { above_y };

        {
            let st = self.inner.borrow();
            ctx.tree.set_visible(st.pointer_up, show_below);
            ctx.tree.set_visible(st.pointer_down, !show_below);
        }
        self.align_pointers(ctx, center_x, x);

        let enter_start = match animation {
            AnimationKind::FromAnchor => Point::new(
                rel.x + anchor_rect.size.width / 2.0 - size.width / 2.0,
                rel.y + anchor_rect.size.height / 2.0 - size.height / 2.0,
            ),
            AnimationKind::FromTop => Point::new(x, 0.0),
            AnimationKind::None => Point::new(x, y),
        };
        {
            let mut st = self.inner.borrow_mut();
            st.rest = Point::new(x, y);
            st.enter_start = enter_start;
        }

        match animation {
            AnimationKind::None => {
                if let Some(props) = ctx.tree.props_mut(root) {
                    props.translate_x = x;
                    props.translate_y = y;
                }
            }
            AnimationKind::FromAnchor => {
                let batch = AnimationBatch::new(root)
                    .track(AnimatedProperty::TranslateX, enter_start.x, x)
                    .track(AnimatedProperty::TranslateY, enter_start.y, y)
                    .track(AnimatedProperty::ScaleX, 0.0, 1.0)
                    .track(AnimatedProperty::ScaleY, 0.0, 1.0)
                    .track(AnimatedProperty::Opacity, 0.0, 1.0);
                ctx.animations.start(&mut ctx.tree, batch);
            }
            AnimationKind::FromTop => {
                if let Some(props) = ctx.tree.props_mut(root) {
                    props.translate_x = x;
                }
                let batch = AnimationBatch::new(root)
                    .track(AnimatedProperty::TranslateY, 0.0, y)
                    .track(AnimatedProperty::ScaleX, 0.0, 1.0)
                    .track(AnimatedProperty::ScaleY, 0.0, 1.0)
                    .track(AnimatedProperty::Opacity, 0.0, 1.0);
                ctx.animations.start(&mut ctx.tree, batch);
            }
        }
    }

    /// Center both pointer indicators under the anchor, in surface-local x
    fn align_pointers(&self, ctx: &mut UiContext, pointer_center_x: f32, surface_x: f32) {
        let (pointer_up, pointer_down) = {
            let st = self.inner.borrow();
            (st.pointer_up, st.pointer_down)
        };
        let up_w = ctx
            .tree
            .measured_size(pointer_up)
            .map(|s| s.width)
            .unwrap_or(0.0);
        let down_w = ctx
            .tree
            .measured_size(pointer_down)
            .map(|s| s.width)
            .unwrap_or(0.0);
        let pointer_w = up_w.max(down_w);
        let local_x = pointer_center_x - pointer_w / 2.0 - surface_x;
        for node in [pointer_up, pointer_down] {
            if let Some(props) = ctx.tree.props_mut(node) {
                props.translate_x = local_x;
            }
        }
    }

    /// Activate the surface, as a tap on it would.
    ///
    /// The listener (if any) is notified *before* removal starts, so it
    /// observes a still-attached, not-yet-animating surface. Removal is
    /// triggered exactly once per activation.
    pub fn click(&self, ctx: &mut UiContext) {
        let listener = self.inner.borrow().listener.clone();
        if let Some(listener) = listener {
            listener(self, ctx);
        }
        self.remove(ctx);
    }

    /// Remove the surface from its container.
    ///
    /// With [`AnimationKind::None`] the detach is synchronous. Otherwise an
    /// exit batch mirroring the entry animation runs and the detach happens
    /// in its completion callback. Calling this on an already-removed
    /// surface is a no-op; calling it again while an exit animation is in
    /// flight is unspecified (a second batch starts, last writer wins).
    pub fn remove(&self, ctx: &mut UiContext) {
        let (root, animation, rest, enter_start) = {
            let st = self.inner.borrow();
            (st.root, st.animation, st.rest, st.enter_start)
        };
        if !ctx.tree.contains(root) {
            return;
        }
        ctx.unregister_click(root);

        match animation {
            AnimationKind::None => {
                ctx.tree.detach(root);
            }
            AnimationKind::FromAnchor => {
                let batch = AnimationBatch::new(root)
                    .track(AnimatedProperty::TranslateX, rest.x, enter_start.x)
                    .track(AnimatedProperty::TranslateY, rest.y, enter_start.y)
                    .track(AnimatedProperty::ScaleX, 1.0, 0.0)
                    .track(AnimatedProperty::ScaleY, 1.0, 0.0)
                    .track(AnimatedProperty::Opacity, 1.0, 0.0)
                    .on_complete(move |tree| tree.detach(root));
                ctx.animations.start(&mut ctx.tree, batch);
            }
            AnimationKind::FromTop => {
                let batch = AnimationBatch::new(root)
                    .track(AnimatedProperty::TranslateY, rest.y, 0.0)
                    .track(AnimatedProperty::ScaleX, 1.0, 0.0)
                    .track(AnimatedProperty::ScaleY, 1.0, 0.0)
                    .track(AnimatedProperty::Opacity, 1.0, 0.0)
                    .on_complete(move |tree| tree.detach(root));
                ctx.animations.start(&mut ctx.tree, batch);
            }
        }
    }
}
