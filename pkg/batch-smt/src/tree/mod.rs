use crate::{metrics::Metrics, AssertDepth, MerkleHasher, Node, NodeStore, Sha256Hasher, ZeroTable};

mod finalize;
mod merge;
mod raw_api;

pub use merge::intersection_level;

#[cfg(any(test, feature = "proptest"))]
pub mod proptest;

/// A sparse Merkle tree with a fixed depth, updated in batches
///
/// A tree of depth `DEPTH` has levels `0..DEPTH`: level 0 holds `2^(DEPTH - 1)` leaves and level
/// `DEPTH - 1` holds the root. Slots that were never written hold the hasher's empty leaf.
///
/// ```rust
/// # use batch_smt::*;
/// let mut tree = Tree::<64>::new();
///
/// tree.set_leaf(1, Hash256::new([1; 32])).unwrap();
/// tree.set_leaves([
///     (100, Hash256::new([100; 32])),
///     (2, Hash256::new([2; 32])),
/// ])
/// .unwrap();
///
/// assert_eq!(tree.leaf(100), Hash256::new([100; 32]));
/// assert_eq!(tree.leaf(3), Hash256::ZERO);
/// ```
///
/// `DEPTH` must be between 1 and [`MAX_DEPTH`]; other values fail to compile.
///
/// [`MAX_DEPTH`]: crate::MAX_DEPTH
#[derive(Debug, Clone)]
pub struct Tree<const DEPTH: usize, H: MerkleHasher = Sha256Hasher> {
    hasher: H,
    store: NodeStore<DEPTH, H::Digest>,
    metrics: Metrics,
}

impl<const DEPTH: usize, H: MerkleHasher> PartialEq for Tree<DEPTH, H> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.root() == other.root()
    }
}

impl<const DEPTH: usize, H: MerkleHasher> Eq for Tree<DEPTH, H> {}

impl<const DEPTH: usize, H> Default for Tree<DEPTH, H>
where
    H: MerkleHasher + Default,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<const DEPTH: usize, H: MerkleHasher> Tree<DEPTH, H> {
    /// Creates a new, empty tree
    ///
    /// ```rust
    /// # use batch_smt::*;
    /// let tree = Tree::<64>::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self
    where
        H: Default,
    {
        Self::with_hasher(H::default())
    }

    /// Creates a new, empty tree that hashes with `hasher`
    #[must_use]
    pub fn with_hasher(hasher: H) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = AssertDepth::<DEPTH>::VALID;

        let store = NodeStore::new(&hasher);

        Self {
            hasher,
            store,
            metrics: Metrics::default(),
        }
    }

    /// The root of the tree
    ///
    /// This value is cached in the node store, so calls to this function are essentially free
    ///
    /// ```rust
    /// # use batch_smt::*;
    /// let mut tree = Tree::<16>::new();
    /// assert_eq!(tree.root(), tree.zeroes().root());
    ///
    /// let root = tree.set_leaf(7, Hash256::new([1; 32])).unwrap();
    /// assert_eq!(tree.root(), root);
    /// assert_ne!(tree.root(), tree.zeroes().root());
    /// ```
    #[inline]
    #[must_use]
    pub fn root(&self) -> H::Digest {
        self.store.get(DEPTH - 1, 0)
    }

    /// The number of distinct leaf slots that have been written
    ///
    /// Writing the empty leaf value still counts as a write
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.level_len(0)
    }

    /// Whether no leaf has been written yet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get access to the hasher of this tree
    #[inline]
    #[must_use]
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// The empty subtree digests of this tree
    #[inline]
    #[must_use]
    pub fn zeroes(&self) -> &ZeroTable<DEPTH, H::Digest> {
        self.store.zeroes()
    }

    /// The sparse store of every node computed so far
    #[inline]
    #[must_use]
    pub fn store(&self) -> &NodeStore<DEPTH, H::Digest> {
        &self.store
    }

    /// Get an iterator over every node computed so far, leaves first
    pub fn nodes(&self) -> impl Iterator<Item = Node<H::Digest>> + '_ {
        self.store.iter()
    }

    /// Counters for the work done by this tree
    #[inline]
    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Reset all counters in [`Tree::metrics`] to 0
    #[inline]
    pub fn reset_metrics(&mut self) {
        self.metrics = Metrics::default();
    }

    /// Hash two children, counting the call
    fn hash(&mut self, left: H::Digest, right: H::Digest) -> H::Digest {
        self.metrics.incr_hashes();
        self.hasher.hash(left, right)
    }

    /// Compute and store the parent of `node`, taking its sibling from the store
    fn climb(&mut self, node: Node<H::Digest>) -> Node<H::Digest> {
        let sibling = self.store.get(node.level, node.sibling_index());

        let digest = match node.is_left() {
            true => self.hash(node.digest, sibling),
            false => self.hash(sibling, node.digest),
        };

        let parent = Node::new(node.level + 1, node.parent_index(), digest);
        self.store.set(parent);
        parent
    }
}

#[cfg(test)]
mod tests {
    use crate::Hash256;

    use super::*;

    #[test]
    fn empty_tree_root_is_top_zero() {
        let tree = Tree::<16>::new();

        assert_eq!(tree.root(), tree.zeroes().get(15));
        assert!(tree.is_empty());
        assert!(tree.store().is_empty());
    }

    #[test]
    fn climb_orders_children_by_index() {
        let mut tree = Tree::<4>::new();
        let digest = Hash256::new([9; 32]);
        let zero = tree.zeroes().get(0);

        let left = tree.climb(Node::leaf(4, digest));
        assert_eq!(left, Node::new(1, 2, Sha256Hasher.hash(digest, zero)));

        let right = tree.climb(Node::leaf(7, digest));
        assert_eq!(right, Node::new(1, 3, Sha256Hasher.hash(zero, digest)));

        assert_eq!(tree.store().get(1, 2), left.digest);
        assert_eq!(tree.store().get(1, 3), right.digest);
        assert_eq!(tree.metrics().hashes(), 2);
    }

    #[test]
    fn trees_compare_by_root() {
        let mut a = Tree::<8>::new();
        let mut b = Tree::<8>::new();

        a.set_leaves([(1, Hash256::new([1; 32])), (2, Hash256::new([2; 32]))])
            .unwrap();
        b.set_leaf(2, Hash256::new([2; 32])).unwrap();
        assert_ne!(a, b);

        b.set_leaf(1, Hash256::new([1; 32])).unwrap();
        assert_eq!(a, b);
    }
}
