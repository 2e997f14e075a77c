use alloc::vec::Vec;
use core::cmp::Ordering;
use ordered_float::{FloatCore, OrderedFloat};

use crate::error::TreeError;
use crate::node::{Color, NIL, Node, NodeId};

/// A self-balancing ordered-key engine: a red-black tree with O(log n)
/// insertion, deletion, and search.
///
/// Nodes live in a contiguous arena and reference each other by plain
/// index, so parent back-references never dangle and the structure needs
/// no unsafe code. Every missing child is materialized as a Black sentinel
/// leaf with its own slot, which keeps the fixup case analysis uniform and
/// lets the structural export enumerate the complete tree.
///
/// The engine is single-threaded: each call runs to completion and the
/// balance invariants hold before and after every call, never mid-call.
#[derive(Debug, Clone)]
pub struct RbTree<T> {
    /// Arena of node slots; `None` marks a freed slot awaiting reuse.
    pub(crate) slots: Vec<Option<Node<T>>>,
    /// Freed slot indices, reused LIFO by later insertions.
    free: Vec<usize>,
    /// Index of the root node; a sentinel iff the tree is empty.
    pub(crate) root: usize,
    /// Number of populated (key-bearing) nodes.
    len: usize,
}

impl<T: FloatCore + Copy> Default for RbTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatCore + Copy> RbTree<T> {
    /// Creates an empty tree: a single Black sentinel root and no keys.
    pub fn new() -> Self {
        Self {
            slots: vec![Some(Node::sentinel(NIL))],
            free: Vec::new(),
            root: 0,
            len: 0,
        }
    }

    /// Number of populated (key-bearing) nodes.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True iff the tree holds no keys.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of live nodes in the arena, populated and sentinel.
    pub fn node_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Discards every node and returns the tree to its initial empty state.
    pub fn reset(&mut self) {
        self.slots.clear();
        self.slots.push(Some(Node::sentinel(NIL)));
        self.free.clear();
        self.root = 0;
        self.len = 0;
    }

    /// Looks up `key`, returning the identity of its node if present.
    ///
    /// Never mutates; O(height).
    pub fn search(&self, key: T) -> Option<NodeId> {
        let idx = self.locate(OrderedFloat(key));
        (!self.node(idx).is_sentinel()).then_some(NodeId(idx))
    }

    /// Inserts `key`, returning the identity of the slot it now occupies.
    ///
    /// Fails with [`TreeError::InvalidKey`] for NaN and with
    /// [`TreeError::DuplicateKey`] if the key is already present; in both
    /// cases the tree is left untouched.
    pub fn insert(&mut self, key: T) -> Result<NodeId, TreeError> {
        if key.is_nan() {
            return Err(TreeError::InvalidKey);
        }
        let key = OrderedFloat(key);

        let target = self.locate(key);
        if !self.node(target).is_sentinel() {
            return Err(TreeError::DuplicateKey);
        }

        self.populate(target, key);
        self.len += 1;
        self.fix_insert(target);

        #[cfg(debug_assertions)]
        debug_assert!(
            self.verify_invariants(),
            "balance invariants violated after insert"
        );

        Ok(NodeId(target))
    }

    /// Removes `key` from the tree.
    ///
    /// Fails with [`TreeError::NotFound`] if the key is absent, leaving
    /// the tree untouched.
    pub fn delete(&mut self, key: T) -> Result<(), TreeError> {
        let target = self.locate(OrderedFloat(key));
        if self.node(target).is_sentinel() {
            return Err(TreeError::NotFound);
        }

        self.remove_at(target);
        self.len -= 1;

        #[cfg(debug_assertions)]
        debug_assert!(
            self.verify_invariants(),
            "balance invariants violated after delete"
        );

        Ok(())
    }

    /// Inserts keys in the given order, stopping at the first failure.
    ///
    /// Keys applied before the failing one stay in the tree; the batch is
    /// not transactional.
    pub fn insert_all<I>(&mut self, keys: I) -> Result<(), TreeError>
    where
        I: IntoIterator<Item = T>,
    {
        for key in keys {
            self.insert(key)?;
        }
        Ok(())
    }

    /// Deletes keys in the given order, stopping at the first failure.
    ///
    /// Keys deleted before the failing one stay deleted; the batch is not
    /// transactional.
    pub fn delete_all<I>(&mut self, keys: I) -> Result<(), TreeError>
    where
        I: IntoIterator<Item = T>,
    {
        for key in keys {
            self.delete(key)?;
        }
        Ok(())
    }

    /// Descends by comparison from the root and returns the index where
    /// the walk stops: the matching populated node, or the sentinel
    /// marking the key's absence.
    fn locate(&self, key: OrderedFloat<T>) -> usize {
        let mut current = self.root;
        while let Some(current_key) = self.node(current).key {
            current = match key.cmp(&current_key) {
                Ordering::Equal => return current,
                Ordering::Less => self.node(current).left,
                Ordering::Greater => self.node(current).right,
            };
        }
        current
    }

    #[inline]
    pub(crate) fn node(&self, idx: usize) -> &Node<T> {
        debug_assert!(idx < self.slots.len());
        match self.slots[idx] {
            Some(ref node) => node,
            None => unreachable!("index names a freed slot"),
        }
    }

    #[inline]
    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        debug_assert!(idx < self.slots.len());
        match self.slots[idx] {
            Some(ref mut node) => node,
            None => unreachable!("index names a freed slot"),
        }
    }

    fn allocate(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) {
        self.slots[idx] = None;
        self.free.push(idx);
    }

    /// Converts the sentinel at `idx` into a populated Red node with two
    /// fresh Black sentinel children.
    fn populate(&mut self, idx: usize, key: OrderedFloat<T>) {
        debug_assert!(self.node(idx).is_sentinel());
        let left = self.allocate(Node::sentinel(idx));
        let right = self.allocate(Node::sentinel(idx));
        let node = self.node_mut(idx);
        node.key = Some(key);
        node.color = Color::Red;
        node.left = left;
        node.right = right;
    }

    /// Resets the populated node at `idx` back to a Black sentinel,
    /// releasing its two sentinel children. Only legal when both children
    /// are sentinels.
    fn clear(&mut self, idx: usize) {
        let left = self.node(idx).left;
        let right = self.node(idx).right;
        debug_assert!(self.node(left).is_sentinel() && self.node(right).is_sentinel());

        self.release(left);
        self.release(right);

        let node = self.node_mut(idx);
        node.key = None;
        node.color = Color::Black;
        node.left = NIL;
        node.right = NIL;
    }

    #[inline]
    fn parent_of(&self, idx: usize) -> usize {
        if idx == NIL { NIL } else { self.node(idx).parent }
    }

    #[inline]
    fn left_of(&self, idx: usize) -> usize {
        if idx == NIL { NIL } else { self.node(idx).left }
    }

    #[inline]
    fn right_of(&self, idx: usize) -> usize {
        if idx == NIL { NIL } else { self.node(idx).right }
    }

    /// The other child of `idx`'s parent, or `NIL` at the root.
    fn sibling(&self, idx: usize) -> usize {
        let parent = self.parent_of(idx);
        if parent == NIL {
            NIL
        } else if self.node(parent).left == idx {
            self.node(parent).right
        } else {
            self.node(parent).left
        }
    }

    fn grandparent(&self, idx: usize) -> usize {
        self.parent_of(self.parent_of(idx))
    }

    /// The parent's sibling, or `NIL` when there is no grandparent.
    fn uncle(&self, idx: usize) -> usize {
        self.sibling(self.parent_of(idx))
    }

    fn is_left_child(&self, idx: usize) -> bool {
        let parent = self.parent_of(idx);
        parent != NIL && self.node(parent).left == idx
    }

    #[inline]
    fn color_of(&self, idx: usize) -> Color {
        if idx == NIL {
            Color::Black
        } else {
            self.node(idx).color
        }
    }

    #[inline]
    fn set_color(&mut self, idx: usize, color: Color) {
        if idx != NIL {
            self.node_mut(idx).color = color;
        }
    }

    #[inline]
    fn is_red(&self, idx: usize) -> bool {
        self.color_of(idx) == Color::Red
    }

    #[inline]
    fn is_black(&self, idx: usize) -> bool {
        self.color_of(idx) == Color::Black
    }

    /// Rewrites the edges around `x` so its right child takes its place.
    ///
    /// Owning links and parent back-references are updated together;
    /// ordering is preserved, colors are untouched.
    fn rotate_left(&mut self, x: usize) {
        let y = self.node(x).right;
        debug_assert!(!self.node(y).is_sentinel(), "rotation pivot must be populated");

        let y_left = self.node(y).left;
        self.node_mut(x).right = y_left;
        self.node_mut(y_left).parent = x;

        let x_parent = self.node(x).parent;
        self.node_mut(y).parent = x_parent;
        if x_parent == NIL {
            self.root = y;
        } else if self.node(x_parent).left == x {
            self.node_mut(x_parent).left = y;
        } else {
            self.node_mut(x_parent).right = y;
        }

        self.node_mut(y).left = x;
        self.node_mut(x).parent = y;
    }

    /// Mirror image of [`Self::rotate_left`].
    fn rotate_right(&mut self, y: usize) {
        let x = self.node(y).left;
        debug_assert!(!self.node(x).is_sentinel(), "rotation pivot must be populated");

        let x_right = self.node(x).right;
        self.node_mut(y).left = x_right;
        self.node_mut(x_right).parent = y;

        let y_parent = self.node(y).parent;
        self.node_mut(x).parent = y_parent;
        if y_parent == NIL {
            self.root = x;
        } else if self.node(y_parent).left == y {
            self.node_mut(y_parent).left = x;
        } else {
            self.node_mut(y_parent).right = x;
        }

        self.node_mut(x).right = y;
        self.node_mut(y).parent = x;
    }

    /// Ancestor-walk fixup after installing the Red node at `node`.
    ///
    /// Red uncle: recolor and ascend to the grandparent. Black uncle:
    /// an inner grandchild is first rotated around its parent, then the
    /// outer case recolors and rotates the grandparent, which ends the
    /// walk. The root is reasserted Black afterwards.
    fn fix_insert(&mut self, mut node: usize) {
        while node != self.root && self.is_red(self.parent_of(node)) {
            let parent = self.parent_of(node);
            // Parent is Red, so it is not the root and a grandparent exists.
            let grandparent = self.grandparent(node);
            let uncle = self.uncle(node);

            if self.is_red(uncle) {
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
            } else if parent == self.left_of(grandparent) {
                if node == self.right_of(parent) {
                    node = parent;
                    self.rotate_left(node);
                }
                let parent = self.parent_of(node);
                let grandparent = self.grandparent(node);
                self.set_color(parent, Color::Black);
                self.set_color(grandparent, Color::Red);
                self.rotate_right(grandparent);
            } else {
                if node == self.left_of(parent) {
                    node = parent;
                    self.rotate_right(node);
                }
                let parent = self.parent_of(node);
                let grandparent = self.grandparent(node);
                self.set_color(parent, Color::Black);
                self.set_color(grandparent, Color::Red);
                self.rotate_left(grandparent);
            }
        }
        self.set_color(self.root, Color::Black);
    }

    /// Removes the key at `node`, reducing the 1- and 2-child cases to a
    /// 0-child removal by copying a replacement key down the chain.
    fn remove_at(&mut self, node: usize) {
        let left = self.node(node).left;
        let right = self.node(node).right;
        let left_is_sentinel = self.node(left).is_sentinel();
        let right_is_sentinel = self.node(right).is_sentinel();

        match (left_is_sentinel, right_is_sentinel) {
            (true, true) => {
                // Removing a Black leaf shortens its side's black-height;
                // resolve the deficiency while the node still holds its
                // position in the tree.
                if self.is_black(node) {
                    self.fix_delete(node);
                }
                self.clear(node);
            }
            (false, false) => {
                // In-order predecessor: rightmost node of the left subtree.
                let mut pred = left;
                while !self.node(self.node(pred).right).is_sentinel() {
                    pred = self.node(pred).right;
                }
                let pred_key = self.node(pred).key;
                self.node_mut(node).key = pred_key;
                self.remove_at(pred);
            }
            _ => {
                // By the black-height invariant the lone child is Red with
                // two sentinel children.
                let child = if left_is_sentinel { right } else { left };
                let child_key = self.node(child).key;
                self.node_mut(node).key = child_key;
                self.remove_at(child);
            }
        }
    }

    /// Resolves the double-black deficiency at `node`, a Black leaf about
    /// to be removed. Loop invariant: `node`'s subtree is one Black node
    /// short relative to its sibling's.
    fn fix_delete(&mut self, mut node: usize) {
        while node != self.root {
            let parent = self.parent_of(node);
            let mut sibling = self.sibling(node);

            if self.is_red(sibling) {
                // Red sibling: rotate it over the parent so the deficiency
                // faces a Black sibling, then re-resolve below.
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate_toward(parent, node);
                sibling = self.sibling(node);
            }

            let (near, far) = if self.is_left_child(node) {
                (self.left_of(sibling), self.right_of(sibling))
            } else {
                (self.right_of(sibling), self.left_of(sibling))
            };

            if self.is_black(near) && self.is_black(far) {
                // Borrow one Black level from both sides; either the Red
                // parent absorbs it or the deficiency moves up.
                self.set_color(sibling, Color::Red);
                if self.is_red(parent) {
                    self.set_color(parent, Color::Black);
                    return;
                }
                node = parent;
                continue;
            }

            if self.is_black(far) {
                // Near child Red, far child Black: rotate the near child
                // outward to become the new sibling, converting to the
                // far-Red case.
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate_outward(sibling, node);
                sibling = self.sibling(node);
            }

            let far = if self.is_left_child(node) {
                self.right_of(sibling)
            } else {
                self.left_of(sibling)
            };
            let parent_color = self.color_of(parent);
            self.set_color(sibling, parent_color);
            self.set_color(parent, Color::Black);
            self.set_color(far, Color::Black);
            self.rotate_toward(parent, node);
            return;
        }
    }

    /// Rotates `upper` so that the subtree on `node`'s side gains height.
    fn rotate_toward(&mut self, upper: usize, node: usize) {
        if self.is_left_child(node) {
            self.rotate_left(upper);
        } else {
            self.rotate_right(upper);
        }
    }

    /// Rotates `sibling` away from `node`'s side, promoting its near child.
    fn rotate_outward(&mut self, sibling: usize, node: usize) {
        if self.is_left_child(node) {
            self.rotate_right(sibling);
        } else {
            self.rotate_left(sibling);
        }
    }

    #[cfg(any(test, debug_assertions))]
    pub(crate) fn verify_invariants(&self) -> bool {
        if self.node(self.root).parent != NIL || !self.is_black(self.root) {
            return false;
        }
        self.verify_subtree(self.root, None, None).is_some()
    }

    /// Returns the subtree's black-height, or `None` on any violation of
    /// ordering, coloring, black-height, or parent back-references.
    #[cfg(any(test, debug_assertions))]
    fn verify_subtree(
        &self,
        idx: usize,
        lower: Option<OrderedFloat<T>>,
        upper: Option<OrderedFloat<T>>,
    ) -> Option<usize> {
        let node = self.node(idx);
        let Some(key) = node.key else {
            return (node.color == Color::Black).then_some(1);
        };

        if lower.is_some_and(|bound| key <= bound) || upper.is_some_and(|bound| key >= bound) {
            return None;
        }
        if node.color == Color::Red && (self.is_red(node.left) || self.is_red(node.right)) {
            return None;
        }
        if self.node(node.left).parent != idx || self.node(node.right).parent != idx {
            return None;
        }

        let left_height = self.verify_subtree(node.left, lower, Some(key))?;
        let right_height = self.verify_subtree(node.right, Some(key), upper)?;
        if left_height != right_height {
            return None;
        }

        Some(left_height + usize::from(node.color == Color::Black))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::node::NodeView;
    use alloc::vec::Vec;

    fn assert_valid(tree: &RbTree<f64>) {
        assert!(tree.verify_invariants(), "balance invariants violated");
    }

    fn snapshot(tree: &RbTree<f64>) -> Vec<NodeView<f64>> {
        tree.nodes().collect()
    }

    #[test]
    fn test_empty_tree() {
        let tree = RbTree::<f64>::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 1);

        let root = tree.get(tree.root()).map(|view| (view.color, view.key));
        assert_eq!(root, Some((Color::Black, None)));
        assert_valid(&tree);
    }

    #[test]
    fn test_insert_rotates_root() {
        let mut tree = RbTree::new();
        tree.insert(10.0).unwrap();
        tree.insert(20.0).unwrap();
        tree.insert(30.0).unwrap();

        let root = tree.get(tree.root()).unwrap();
        assert_eq!(root.key, Some(20.0));
        assert_eq!(root.color, Color::Black);

        for child_id in [root.left.unwrap(), root.right.unwrap()] {
            let child = tree.get(child_id).unwrap();
            assert_eq!(child.color, Color::Red);
            assert!(child.key == Some(10.0) || child.key == Some(30.0));

            for leaf_id in [child.left.unwrap(), child.right.unwrap()] {
                let leaf = tree.get(leaf_id).unwrap();
                assert_eq!(leaf.color, Color::Black);
                assert_eq!(leaf.key, None);
            }
        }
        assert_valid(&tree);
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut tree = RbTree::new();
        tree.insert(7.0).unwrap();
        tree.insert(3.0).unwrap();

        let before = snapshot(&tree);
        assert_eq!(tree.insert(7.0), Err(TreeError::DuplicateKey));
        assert_eq!(snapshot(&tree), before);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_nan_insert_rejected() {
        let mut tree = RbTree::new();
        tree.insert(1.0).unwrap();

        let before = snapshot(&tree);
        assert_eq!(tree.insert(f64::NAN), Err(TreeError::InvalidKey));
        assert_eq!(snapshot(&tree), before);
    }

    #[test]
    fn test_delete_missing_rejected() {
        let mut tree = RbTree::new();
        tree.insert(5.0).unwrap();

        let before = snapshot(&tree);
        assert_eq!(tree.delete(9.0), Err(TreeError::NotFound));
        assert_eq!(snapshot(&tree), before);

        assert_eq!(RbTree::<f64>::new().delete(1.0), Err(TreeError::NotFound));
    }

    #[test]
    fn test_search_reflects_membership() {
        let mut tree = RbTree::new();
        for key in [8.0, 4.0, 12.0, 2.0, 6.0] {
            tree.insert(key).unwrap();
        }

        assert!(tree.search(6.0).is_some());
        assert!(tree.search(5.0).is_none());

        tree.delete(6.0).unwrap();
        assert!(tree.search(6.0).is_none());
        assert!(tree.search(4.0).is_some());
    }

    #[test]
    fn test_delete_internal_node() {
        let mut tree = RbTree::new();
        tree.insert_all([10.0, 20.0, 30.0, 40.0, 50.0, 25.0]).unwrap();
        assert_eq!(tree.len(), 6);

        tree.delete(20.0).unwrap();

        assert_eq!(tree.len(), 5);
        assert!(tree.search(20.0).is_none());
        for key in [10.0, 25.0, 30.0, 40.0, 50.0] {
            assert!(tree.search(key).is_some());
        }
        assert_valid(&tree);
    }

    #[test]
    fn test_node_count_tracks_sentinels() {
        let mut tree = RbTree::new();
        for i in 0..9 {
            tree.insert(f64::from(i)).unwrap();
        }
        assert_eq!(tree.len(), 9);
        assert_eq!(tree.node_count(), 19);
    }

    #[test]
    fn test_round_trip_to_empty() {
        let inserts = [31.0, 11.0, 41.0, 5.0, 9.0, 2.0, 6.0, 53.0, 58.0, 97.0];
        let deletes = [9.0, 97.0, 31.0, 2.0, 58.0, 11.0, 6.0, 41.0, 53.0, 5.0];

        let mut tree = RbTree::new();
        tree.insert_all(inserts).unwrap();
        tree.delete_all(deletes).unwrap();

        assert_eq!(tree.len(), 0);
        assert_eq!(tree.node_count(), 1);
        let root = tree.get(tree.root()).map(|view| (view.color, view.key));
        assert_eq!(root, Some((Color::Black, None)));
    }

    #[test]
    fn test_insert_all_keeps_applied_prefix() {
        let mut tree = RbTree::new();
        assert_eq!(
            tree.insert_all([1.0, 2.0, 2.0, 3.0]),
            Err(TreeError::DuplicateKey)
        );

        assert_eq!(tree.len(), 2);
        assert!(tree.search(1.0).is_some());
        assert!(tree.search(2.0).is_some());
        assert!(tree.search(3.0).is_none());
        assert_valid(&tree);
    }

    #[test]
    fn test_delete_all_keeps_applied_prefix() {
        let mut tree = RbTree::new();
        tree.insert_all([1.0, 2.0, 3.0]).unwrap();

        assert_eq!(tree.delete_all([1.0, 9.0, 3.0]), Err(TreeError::NotFound));
        assert!(tree.search(1.0).is_none());
        assert!(tree.search(3.0).is_some());
        assert_valid(&tree);
    }

    #[test]
    fn test_slot_reuse() {
        let mut tree = RbTree::new();
        tree.insert_all([1.0, 2.0, 3.0]).unwrap();
        let high_water = tree.slots.len();

        tree.delete_all([1.0, 2.0, 3.0]).unwrap();
        tree.insert_all([4.0, 5.0, 6.0]).unwrap();

        assert_eq!(tree.slots.len(), high_water);
        assert_eq!(tree.node_count(), 7);
        assert_valid(&tree);
    }

    #[test]
    fn test_reset() {
        let mut tree = RbTree::new();
        tree.insert_all([3.0, 1.0, 2.0]).unwrap();

        tree.reset();
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 1);

        tree.insert(5.0).unwrap();
        assert_eq!(tree.len(), 1);
        assert_valid(&tree);
    }

    #[test]
    fn test_ascending_and_descending_runs() {
        let mut tree = RbTree::new();
        for i in 0..64 {
            tree.insert(f64::from(i)).unwrap();
            assert_valid(&tree);
        }
        for i in (0..64).rev() {
            tree.delete(f64::from(i)).unwrap();
            assert_valid(&tree);
        }
        assert!(tree.is_empty());

        for i in (0..64).rev() {
            tree.insert(f64::from(i)).unwrap();
            assert_valid(&tree);
        }
        assert_eq!(tree.len(), 64);
    }

    #[test]
    fn test_interleaved_stress() {
        // Deterministic xorshift stream over a small key pool so inserts
        // and deletes collide often and exercise every fixup case.
        let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
        let mut step = || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        };

        let mut tree = RbTree::new();
        let mut live = alloc::collections::BTreeSet::new();
        for _ in 0..2000 {
            let raw = step();
            let key = (raw >> 32) % 97;
            if raw % 2 == 0 {
                let expect = live.insert(key);
                assert_eq!(tree.insert(key as f64).is_ok(), expect);
            } else {
                let expect = live.remove(&key);
                assert_eq!(tree.delete(key as f64).is_ok(), expect);
            }
            assert_valid(&tree);
            assert_eq!(tree.len(), live.len());
        }

        let keys: Vec<f64> = tree.keys().collect();
        let expected: Vec<f64> = live.iter().map(|&key| key as f64).collect();
        assert_eq!(keys, expected);
    }
}

#[cfg(test)]
mod properties {
    use super::*;
    use alloc::vec::Vec;
    use quickcheck::quickcheck;
    use std::collections::BTreeSet;

    quickcheck! {
        /// Any operation stream agrees with an ordered-set oracle and
        /// preserves every balance invariant at every step.
        fn matches_ordered_set_oracle(ops: Vec<(bool, i8)>) -> bool {
            let mut tree = RbTree::<f64>::new();
            let mut oracle = BTreeSet::new();

            for (is_insert, raw) in ops {
                if is_insert {
                    if tree.insert(f64::from(raw)).is_ok() != oracle.insert(raw) {
                        return false;
                    }
                } else if tree.delete(f64::from(raw)).is_ok() != oracle.remove(&raw) {
                    return false;
                }

                if !tree.verify_invariants() {
                    return false;
                }
                let keys: Vec<f64> = tree.keys().collect();
                let expected: Vec<f64> = oracle.iter().map(|&v| f64::from(v)).collect();
                if keys != expected {
                    return false;
                }
            }

            tree.len() == oracle.len() && tree.node_count() == 2 * oracle.len() + 1
        }

        /// Inserting then deleting the same distinct keys always returns
        /// the tree to a single Black sentinel root.
        fn round_trips_to_empty(raw: Vec<i16>) -> bool {
            let keys: BTreeSet<i16> = raw.into_iter().collect();

            let mut tree = RbTree::<f64>::new();
            for &key in &keys {
                if tree.insert(f64::from(key)).is_err() {
                    return false;
                }
            }
            for &key in keys.iter().rev() {
                if tree.delete(f64::from(key)).is_err() {
                    return false;
                }
            }

            tree.is_empty() && tree.node_count() == 1
        }
    }
}
