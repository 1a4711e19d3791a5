//! End-to-end tooltip flow: attach, layout, position, click, removal.

use std::cell::Cell;
use std::rc::Rc;

use supertips_core::{Rect, Size};
use supertips_widgets::{AnimationKind, ToolTip, ToolTipContainer, ToolTipView, UiContext};

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 360.0, 640.0);
const ANCHOR: Rect = Rect::new(100.0, 50.0, 40.0, 20.0);
const SURFACE: Size = Size::new(120.0, 60.0);

fn show(ctx: &mut UiContext, tip: &ToolTip) -> (ToolTipContainer, ToolTipView) {
    let container = ToolTipContainer::new(ctx);
    ctx.tree.set_screen_rect(container.node(), VIEWPORT);
    let anchor = ctx.tree.create_node("anchor");
    ctx.tree.set_screen_rect(anchor, ANCHOR);

    let view = container.show_tooltip(ctx, tip, anchor).unwrap();
    ctx.tree.set_measured_size(view.node(), SURFACE);
    (container, view)
}

#[test]
fn remove_without_animation_detaches_synchronously() {
    let mut ctx = UiContext::new(VIEWPORT);
    let (_container, view) = show(&mut ctx, &ToolTip::new());
    ctx.run_frame(0.0);
    assert!(ctx.tree.is_attached(view.node()));

    view.remove(&mut ctx);
    assert!(!ctx.tree.contains(view.node()));
    assert!(ctx.animations.is_idle());
}

#[test]
fn animated_remove_detaches_only_after_completion() {
    let mut ctx = UiContext::new(VIEWPORT);
    let tip = ToolTip::new().animation(AnimationKind::FromTop);
    let (_container, view) = show(&mut ctx, &tip);
    ctx.run_frame(300.0); // position + play the entry batch to completion
    ctx.run_frame(16.0);

    view.remove(&mut ctx);
    assert!(ctx.tree.contains(view.node()), "detach must not be synchronous");
    assert!(!ctx.animations.is_idle());

    ctx.run_frame(150.0);
    assert!(ctx.tree.contains(view.node()));

    ctx.run_frame(150.0);
    assert!(!ctx.tree.contains(view.node()));
    assert!(ctx.animations.is_idle());
}

#[test]
fn from_anchor_entry_starts_collapsed_over_anchor_and_lands_at_rest() {
    let mut ctx = UiContext::new(VIEWPORT);
    let tip = ToolTip::new().animation(AnimationKind::FromAnchor);
    let (_container, view) = show(&mut ctx, &tip);

    // Pre-paint positioning starts the batch at its collapsed start point.
    ctx.run_frame(0.0);
    let props = *ctx.tree.props(view.node()).unwrap();
    assert_eq!(props.opacity, 0.0);
    assert_eq!(props.scale_x, 0.0);
    // anchor center (120, 60) minus half the surface size
    assert_eq!(props.translate_x, 60.0);
    assert_eq!(props.translate_y, 30.0);

    ctx.run_frame(150.0);
    ctx.run_frame(150.0);
    let props = *ctx.tree.props(view.node()).unwrap();
    assert_eq!(props.opacity, 1.0);
    assert_eq!(props.scale_x, 1.0);
    assert_eq!(props.scale_y, 1.0);
    assert_eq!(props.translate_x, 60.0);
    assert_eq!(props.translate_y, 70.0);
}

#[test]
fn from_top_entry_slides_down_to_rest() {
    let mut ctx = UiContext::new(VIEWPORT);
    let tip = ToolTip::new().animation(AnimationKind::FromTop);
    let (_container, view) = show(&mut ctx, &tip);

    ctx.run_frame(0.0);
    let props = *ctx.tree.props(view.node()).unwrap();
    // x applies directly, only y animates from the top
    assert_eq!(props.translate_x, 60.0);
    assert_eq!(props.translate_y, 0.0);
    assert_eq!(props.opacity, 0.0);

    ctx.run_frame(300.0);
    let props = *ctx.tree.props(view.node()).unwrap();
    assert_eq!(props.translate_y, 70.0);
    assert_eq!(props.opacity, 1.0);
}

#[test]
fn click_notifies_listener_before_removal() {
    let mut ctx = UiContext::new(VIEWPORT);
    let (_container, view) = show(&mut ctx, &ToolTip::new());
    ctx.run_frame(0.0);

    let notified = Rc::new(Cell::new(0u32));
    let notified_in_listener = notified.clone();
    view.set_on_click(move |view, ctx| {
        // The surface must still be attached when the listener runs.
        assert!(ctx.tree.is_attached(view.node()));
        notified_in_listener.set(notified_in_listener.get() + 1);
    });

    ctx.dispatch_click(view.node());
    assert_eq!(notified.get(), 1);
    assert!(!ctx.tree.contains(view.node()));
}

#[test]
fn click_on_sub_element_routes_to_the_surface() {
    let mut ctx = UiContext::new(VIEWPORT);
    let (_container, view) = show(&mut ctx, &ToolTip::new());
    ctx.run_frame(0.0);

    let hit = ctx.tree.children(view.node())[0];
    ctx.dispatch_click(hit);
    assert!(!ctx.tree.contains(view.node()));
}

#[test]
fn click_without_listener_still_removes() {
    let mut ctx = UiContext::new(VIEWPORT);
    let (_container, view) = show(&mut ctx, &ToolTip::new());
    ctx.run_frame(0.0);

    ctx.dispatch_click(view.node());
    assert!(!ctx.tree.contains(view.node()));
}

#[test]
fn click_during_exit_animation_no_longer_routes() {
    let mut ctx = UiContext::new(VIEWPORT);
    let tip = ToolTip::new().animation(AnimationKind::FromTop);
    let (_container, view) = show(&mut ctx, &tip);
    ctx.run_frame(300.0);
    ctx.run_frame(16.0);

    let notified = Rc::new(Cell::new(0u32));
    let notified_in_listener = notified.clone();
    view.set_on_click(move |_, _| notified_in_listener.set(notified_in_listener.get() + 1));

    view.remove(&mut ctx);
    ctx.dispatch_click(view.node());
    assert_eq!(notified.get(), 0);
}

#[test]
fn removing_twice_without_animation_is_a_noop() {
    let mut ctx = UiContext::new(VIEWPORT);
    let (_container, view) = show(&mut ctx, &ToolTip::new());
    ctx.run_frame(0.0);

    view.remove(&mut ctx);
    view.remove(&mut ctx);
    assert!(!ctx.tree.contains(view.node()));
}
