use ordered_float::{FloatCore, OrderedFloat};

use crate::node::{NIL, NodeId, NodeView};
use crate::tree::RbTree;

/// Read-only structural export.
///
/// Everything here is derived from the arena without touching balancing
/// state; a rendering collaborator can rebuild the tree as a directed
/// graph from [`RbTree::nodes`] and [`RbTree::edges`] alone.
impl<T: FloatCore + Copy> RbTree<T> {
    /// Identity of the root slot. The root is a sentinel iff the tree is
    /// empty.
    pub fn root(&self) -> NodeId {
        NodeId(self.root)
    }

    /// Snapshot of the node behind `id`, or `None` if that slot has been
    /// freed by a deletion.
    pub fn get(&self, id: NodeId) -> Option<NodeView<T>> {
        self.slots
            .get(id.0)
            .and_then(|slot| slot.as_ref())
            .map(|_| self.view(id.0))
    }

    /// Enumerates every live node, populated and sentinel, in slot order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeView<T>> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(idx, _)| self.view(idx))
    }

    /// Enumerates the owning parent-to-child links of the tree.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes().flat_map(|view| {
            [view.left, view.right]
                .into_iter()
                .flatten()
                .map(move |child| (view.id, child))
        })
    }

    /// Visits every stored key in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = T> + '_ {
        let first = self.leftmost(self.root);
        core::iter::successors(first, |&idx| self.next_in_order(idx))
            .filter_map(|idx| self.node(idx).key.map(OrderedFloat::into_inner))
    }

    fn view(&self, idx: usize) -> NodeView<T> {
        let node = self.node(idx);
        let link = |to: usize| (to != NIL).then_some(NodeId(to));
        NodeView {
            id: NodeId(idx),
            color: node.color,
            key: node.key.map(OrderedFloat::into_inner),
            parent: link(node.parent),
            left: link(node.left),
            right: link(node.right),
        }
    }

    /// Leftmost populated node of `idx`'s subtree, or `None` if the
    /// subtree is a lone sentinel.
    fn leftmost(&self, idx: usize) -> Option<usize> {
        if self.node(idx).is_sentinel() {
            return None;
        }
        let mut current = idx;
        while !self.node(self.node(current).left).is_sentinel() {
            current = self.node(current).left;
        }
        Some(current)
    }

    /// In-order successor of the populated node at `idx`, walking parent
    /// back-references once the right subtree is exhausted.
    fn next_in_order(&self, idx: usize) -> Option<usize> {
        let right = self.node(idx).right;
        if !self.node(right).is_sentinel() {
            return self.leftmost(right);
        }

        let mut current = idx;
        let mut parent = self.node(current).parent;
        while parent != NIL && self.node(parent).right == current {
            current = parent;
            parent = self.node(current).parent;
        }
        (parent != NIL).then_some(parent)
    }
}
