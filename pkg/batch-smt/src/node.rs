/// A position in the tree together with its digest
///
/// Level 0 holds the leaves. The node at `(level, index)` has children `(level - 1, 2 * index)`
/// and `(level - 1, 2 * index + 1)`, and its parent is `(level + 1, index / 2)`.
///
/// ```rust
/// # use batch_smt::*;
/// let node = Node::new(2, 5, Hash256::ZERO);
///
/// assert_eq!(node.sibling_index(), 4);
/// assert_eq!(node.parent_index(), 2);
/// assert!(!node.is_left());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node<D> {
    /// Distance from the leaf row
    pub level: usize,
    /// Position within the level, counting from the left
    pub index: u64,
    /// The digest of the subtree rooted here
    pub digest: D,
}

impl<D> Node<D> {
    /// Create a node at an arbitrary position
    #[inline]
    pub const fn new(level: usize, index: u64, digest: D) -> Self {
        Self {
            level,
            index,
            digest,
        }
    }

    /// Create a level-0 node
    #[inline]
    pub const fn leaf(index: u64, digest: D) -> Self {
        Self::new(0, index, digest)
    }

    /// The index of the other child of this node's parent
    #[inline]
    pub const fn sibling_index(&self) -> u64 {
        self.index ^ 1
    }

    /// The index of this node's parent, one level up
    #[inline]
    pub const fn parent_index(&self) -> u64 {
        self.index >> 1
    }

    /// Whether this node is the left child of its parent
    #[inline]
    pub const fn is_left(&self) -> bool {
        self.index & 1 == 0
    }
}
