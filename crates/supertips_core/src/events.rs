//! Click routing
//!
//! Maps nodes to click handlers and resolves a hit node to the nearest
//! registered ancestor. The handler type is generic so callers can store
//! whatever cloneable handle dispatches the click on their side.

use rustc_hash::FxHashMap;

use crate::tree::{ElementTree, NodeId};

/// Routes hit nodes to registered handlers
pub struct ClickRouter<H> {
    handlers: FxHashMap<NodeId, H>,
}

impl<H> Default for ClickRouter<H> {
    fn default() -> Self {
        Self {
            handlers: FxHashMap::default(),
        }
    }
}

impl<H: Clone> ClickRouter<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a node, replacing any previous one
    pub fn register(&mut self, node: NodeId, handler: H) {
        self.handlers.insert(node, handler);
    }

    pub fn unregister(&mut self, node: NodeId) {
        self.handlers.remove(&node);
    }

    /// Walk up from `hit` and return the nearest registered handler
    pub fn route(&self, tree: &ElementTree, hit: NodeId) -> Option<H> {
        let mut current = Some(hit);
        while let Some(node) = current {
            if let Some(handler) = self.handlers.get(&node) {
                return Some(handler.clone());
            }
            current = tree.parent(node);
        }
        None
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_to_nearest_ancestor() {
        let mut tree = ElementTree::new();
        let root = tree.create_node("root");
        let mid = tree.create_node("mid");
        let leaf = tree.create_node("leaf");
        tree.attach_child(root, mid).unwrap();
        tree.attach_child(mid, leaf).unwrap();

        let mut router: ClickRouter<u32> = ClickRouter::new();
        router.register(root, 1);
        router.register(mid, 2);

        assert_eq!(router.route(&tree, leaf), Some(2));
        assert_eq!(router.route(&tree, mid), Some(2));
        assert_eq!(router.route(&tree, root), Some(1));
    }

    #[test]
    fn unrouted_hit_returns_none() {
        let mut tree = ElementTree::new();
        let node = tree.create_node("node");
        let router: ClickRouter<u32> = ClickRouter::new();
        assert_eq!(router.route(&tree, node), None);
    }

    #[test]
    fn unregister_removes_handler() {
        let mut tree = ElementTree::new();
        let node = tree.create_node("node");
        let mut router: ClickRouter<u32> = ClickRouter::new();
        router.register(node, 7);
        router.unregister(node);
        assert_eq!(router.route(&tree, node), None);
    }
}
