//! The retained element tree
//!
//! Nodes live in a slotmap; a `NodeId` is a generational key, so any id held
//! after its node is destroyed fails lookup. Tooltip surfaces exploit this
//! for their anchor reference: a destroyed anchor never dangles, lookups
//! just return `None` and positioning is skipped.
//!
//! Measurement is unconstrained: `measured_size` records a node's natural
//! size as reported by the host, never clamped to the parent. Containers
//! that want to ignore child sizes simply do.

use slotmap::{new_key_type, SlotMap};
use thiserror::Error;
use tracing::trace;

use crate::color::Color;
use crate::geometry::{Rect, Size};

new_key_type! {
    /// Weak handle to a tree node
    pub struct NodeId;
}

/// Opaque handle to a host-registered typeface
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontId(pub u32);

/// Tree mutation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("node is no longer in the tree")]
    NodeMissing,
}

/// Animatable render properties of a node
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderProps {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub opacity: f32,
    pub visible: bool,
}

impl Default for RenderProps {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            opacity: 1.0,
            visible: true,
        }
    }
}

struct Node {
    label: &'static str,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    screen_rect: Option<Rect>,
    measured: Option<Size>,
    props: RenderProps,
    text: Option<String>,
    fill: Option<Color>,
    text_color: Option<Color>,
    font: Option<FontId>,
}

impl Node {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            parent: None,
            children: Vec::new(),
            screen_rect: None,
            measured: None,
            props: RenderProps::default(),
            text: None,
            fill: None,
            text_color: None,
            font: None,
        }
    }
}

/// The element tree
///
/// Single-threaded; all mutation happens on the UI thread between frames.
#[derive(Default)]
pub struct ElementTree {
    nodes: SlotMap<NodeId, Node>,
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_node(&mut self, label: &'static str) -> NodeId {
        let id = self.nodes.insert(Node::new(label));
        trace!(?id, label, "node created");
        id
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(node)
    }

    pub fn label(&self, node: NodeId) -> Option<&'static str> {
        self.nodes.get(node).map(|n| n.label)
    }

    /// Create a node and attach it under `parent` in one step
    pub fn create_child(&mut self, parent: NodeId, label: &'static str) -> NodeId {
        let id = self.create_node(label);
        if self.attach_child(parent, id).is_err() {
            trace!(?id, label, "parent gone, created node is a root");
        }
        id
    }

    /// Attach `child` under `parent`, detaching it from any previous parent
    pub fn attach_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            return Err(TreeError::NodeMissing);
        }
        if let Some(old_parent) = self.nodes[child].parent {
            if let Some(node) = self.nodes.get_mut(old_parent) {
                node.children.retain(|&c| c != child);
            }
        }
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
        Ok(())
    }

    /// Remove `node` and its subtree from the tree, destroying the nodes.
    ///
    /// Detaching a node that is already gone is a no-op.
    pub fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.nodes.get(node).map(|n| n.parent) else {
            return;
        };
        if let Some(parent) = parent.and_then(|p| self.nodes.get_mut(p)) {
            parent.children.retain(|&c| c != node);
        }
        let mut pending = vec![node];
        while let Some(id) = pending.pop() {
            if let Some(removed) = self.nodes.remove(id) {
                trace!(?id, label = removed.label, "node destroyed");
                pending.extend(removed.children);
            }
        }
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|n| n.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes.get(node).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn is_attached(&self, node: NodeId) -> bool {
        self.nodes.get(node).is_some_and(|n| n.parent.is_some())
    }

    /// On-screen rectangle as last reported by the host layout pass
    pub fn screen_rect(&self, node: NodeId) -> Option<Rect> {
        self.nodes.get(node).and_then(|n| n.screen_rect)
    }

    pub fn set_screen_rect(&mut self, node: NodeId, rect: Rect) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.screen_rect = Some(rect);
        }
    }

    /// Natural (unconstrained) measured size
    pub fn measured_size(&self, node: NodeId) -> Option<Size> {
        self.nodes.get(node).and_then(|n| n.measured)
    }

    pub fn set_measured_size(&mut self, node: NodeId, size: Size) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.measured = Some(size);
        }
    }

    pub fn props(&self, node: NodeId) -> Option<&RenderProps> {
        self.nodes.get(node).map(|n| &n.props)
    }

    pub fn props_mut(&mut self, node: NodeId) -> Option<&mut RenderProps> {
        self.nodes.get_mut(node).map(|n| &mut n.props)
    }

    pub fn set_visible(&mut self, node: NodeId, visible: bool) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.props.visible = visible;
        }
    }

    pub fn is_visible(&self, node: NodeId) -> bool {
        self.nodes.get(node).is_some_and(|n| n.props.visible)
    }

    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node).and_then(|n| n.text.as_deref())
    }

    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.text = Some(text.into());
        }
    }

    pub fn fill(&self, node: NodeId) -> Option<Color> {
        self.nodes.get(node).and_then(|n| n.fill)
    }

    pub fn set_fill(&mut self, node: NodeId, color: Color) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.fill = Some(color);
        }
    }

    pub fn text_color(&self, node: NodeId) -> Option<Color> {
        self.nodes.get(node).and_then(|n| n.text_color)
    }

    pub fn set_text_color(&mut self, node: NodeId, color: Color) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.text_color = Some(color);
        }
    }

    pub fn font(&self, node: NodeId) -> Option<FontId> {
        self.nodes.get(node).and_then(|n| n.font)
    }

    pub fn set_font(&mut self, node: NodeId, font: FontId) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.font = Some(font);
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
