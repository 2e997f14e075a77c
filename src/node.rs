use ordered_float::OrderedFloat;

/// Index value standing for "no node": the parent of the root and the
/// children of sentinel leaves. Never names an arena slot.
pub(crate) const NIL: usize = usize::MAX;

/// Node color used to maintain the tree's balance properties.
///
/// Red-Black trees stay balanced by ensuring that no Red node has a Red
/// child and that every root-to-leaf path crosses the same number of
/// Black nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Red node - must have Black children.
    Red,
    /// Black node - contributes to black-height; all sentinel leaves are Black.
    Black,
}

/// Stable identity of a live node in the tree's arena.
///
/// An id stays valid until the slot it names is freed or its key is moved
/// by a later deletion; resolve it with [`crate::RbTree::get`] rather than
/// holding it across mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Raw arena slot index behind this id.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Read-only snapshot of one live node, populated or sentinel.
///
/// This is the unit of the structural export: enough to rebuild the tree
/// as a directed graph (vertex colors, keys, owning edges) without
/// exposing any balancing internals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeView<T> {
    /// Identity of the slot this snapshot was taken from.
    pub id: NodeId,
    /// Node color.
    pub color: Color,
    /// Stored key; `None` for sentinel leaves.
    pub key: Option<T>,
    /// Owning parent; `None` at the root.
    pub parent: Option<NodeId>,
    /// Left child; `None` for sentinel leaves.
    pub left: Option<NodeId>,
    /// Right child; `None` for sentinel leaves.
    pub right: Option<NodeId>,
}

/// A tree vertex: either a key-bearing node or an empty sentinel leaf
/// that exists to carry color and bound the search.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    /// Stored key; `None` iff this node is a sentinel leaf.
    pub(crate) key: Option<OrderedFloat<T>>,
    /// Color of this node.
    pub(crate) color: Color,
    /// Index of the owning parent, `NIL` for the root.
    pub(crate) parent: usize,
    /// Index of the left child, `NIL` for sentinels.
    pub(crate) left: usize,
    /// Index of the right child, `NIL` for sentinels.
    pub(crate) right: usize,
}

impl<T> Node<T> {
    /// A fresh Black sentinel leaf owned by `parent`.
    pub(crate) const fn sentinel(parent: usize) -> Self {
        Self {
            key: None,
            color: Color::Black,
            parent,
            left: NIL,
            right: NIL,
        }
    }

    /// True iff no key is present.
    pub(crate) const fn is_sentinel(&self) -> bool {
        self.key.is_none()
    }
}
