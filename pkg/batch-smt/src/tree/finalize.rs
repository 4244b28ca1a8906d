use tracing::debug;

use crate::{Batch, MerkleHasher, Result, Tree};

impl<const DEPTH: usize, H: MerkleHasher> Tree<DEPTH, H> {
    /// Insert a [`Batch`] into the tree, returning the new root
    ///
    /// Leaves are sorted by index and merged bottom-up, so every internal node above the batch is
    /// hashed once, no matter how many of the batch's leaves sit below it. This is significantly
    /// faster than inserting the same leaves one at a time.
    ///
    /// Leaves that were already written are overwritten. An empty batch leaves the tree unchanged.
    ///
    /// ```rust
    /// # use batch_smt::*;
    /// let mut tree = Tree::<16>::new();
    /// let batch: Batch<16, _> = batch! {
    ///     4 => Hash256::new([4; 32]),
    ///     5 => Hash256::new([5; 32]),
    /// };
    ///
    /// let root = tree.insert_batch(batch);
    ///
    /// let mut other = Tree::<16>::new();
    /// other.set_leaf(5, Hash256::new([5; 32])).unwrap();
    /// other.set_leaf(4, Hash256::new([4; 32])).unwrap();
    ///
    /// assert_eq!(other.root(), root);
    /// ```
    pub fn insert_batch(&mut self, batch: Batch<DEPTH, H::Digest>) -> H::Digest {
        let mut leaves = batch.into_leaves();

        if leaves.is_empty() {
            debug!("empty batch, root unchanged");
            return self.root();
        }

        leaves.sort_unstable_by_key(|leaf| leaf.index);

        let top = self.merge(&leaves);
        let merged_level = top.level;

        self.store.set(top);

        let mut node = top;
        while node.level < DEPTH - 1 {
            node = self.climb(node);
            self.metrics.incr_finalize_steps();
        }

        self.metrics.record_batch(leaves.len());

        debug!(
            leaves = leaves.len(),
            merged_level,
            hashes = self.metrics.hashes(),
            "inserted batch"
        );

        node.digest
    }

    /// Write many leaves at once, returning the new root
    ///
    /// This function validates every `(index, digest)` pair before writing anything: if an index
    /// is out of range or appears twice, the tree is left unchanged and an error is returned.
    ///
    /// ```rust
    /// # use batch_smt::*;
    /// let mut tree = Tree::<4>::new();
    ///
    /// let error = tree
    ///     .set_leaves([(1, Hash256::new([1; 32])), (1, Hash256::new([2; 32]))])
    ///     .unwrap_err();
    ///
    /// assert_eq!(error, Error::DuplicateIndex { index: 1 });
    /// assert!(tree.is_empty());
    /// ```
    pub fn set_leaves<I>(&mut self, leaves: I) -> Result<H::Digest>
    where
        I: IntoIterator<Item = (u64, H::Digest)>,
    {
        let batch = Batch::from_entries(leaves)?;
        Ok(self.insert_batch(batch))
    }

    /// Write a single leaf, returning the new root
    ///
    /// If you need to write many leaves at once, use [`Tree::set_leaves`] or
    /// [`Tree::insert_batch`]
    pub fn set_leaf(&mut self, index: u64, digest: H::Digest) -> Result<H::Digest> {
        self.set_leaves([(index, digest)])
    }

    /// Compute what the root would be if `batch` were inserted
    ///
    /// ```rust
    /// # use batch_smt::*;
    /// let mut tree = Tree::<16>::new();
    /// let root_with_1 = tree.root_with(batch! { 1 => Hash256::new([1; 32]) });
    ///
    /// assert_eq!(tree.root(), tree.zeroes().root());
    ///
    /// tree.set_leaf(1, Hash256::new([1; 32])).unwrap();
    /// assert_eq!(root_with_1, tree.root());
    /// ```
    ///
    /// This works on a copy of the tree's node store, so it is as expensive as cloning the tree
    #[must_use]
    pub fn root_with(&self, batch: Batch<DEPTH, H::Digest>) -> H::Digest
    where
        H: Clone,
    {
        self.clone().insert_batch(batch)
    }
}
