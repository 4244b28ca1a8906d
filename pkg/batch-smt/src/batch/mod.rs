use std::collections::HashSet;

use crate::{leaf_capacity, Error, Node, Result};

#[cfg(any(test, feature = "proptest"))]
mod proptest;

mod merge;

/// A batch of leaf updates to insert into a [`Tree`]
///
/// This batch is generic over the depth of the tree that it is inserted into, since the tree depth
/// determines which leaf indices are valid. Every index is checked when it is added, so inserting
/// a [`Batch`] into a [`Tree`] can't fail.
///
/// [`Tree`]: crate::Tree
#[derive(Debug, Clone)]
#[must_use = "a `Batch` does nothing unless inserted"]
pub struct Batch<const DEPTH: usize, D> {
    pub(crate) leaves: Vec<Node<D>>,
    /// The indices that have been inserted, for efficient checking of new entries
    pub(crate) indices: HashSet<u64>,
}

impl<const DEPTH: usize, D> Default for Batch<DEPTH, D> {
    fn default() -> Self {
        Self {
            leaves: Vec::new(),
            indices: HashSet::new(),
        }
    }
}

impl<const DEPTH: usize, D> Batch<DEPTH, D> {
    /// Create a new, empty batch
    ///
    /// ```rust
    /// # use batch_smt::*;
    /// let mut batch = Batch::<16, Hash256>::new();
    ///
    /// batch.insert(1, Hash256::new([1; 32])).unwrap();
    /// batch.insert(2, Hash256::new([2; 32])).unwrap();
    /// ```
    ///
    /// Alternatively, you can use the [`batch!`] macro for a more concise syntax:
    /// ```rust
    /// # use batch_smt::*;
    /// let batch: Batch<16, _> = batch! {
    ///     1 => Hash256::new([1; 32]),
    ///     2 => Hash256::new([2; 32]),
    /// };
    /// ```
    ///
    /// [`batch!`]: crate::batch!
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty [`Batch`] with at least the specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            leaves: Vec::with_capacity(capacity),
            indices: HashSet::with_capacity(capacity),
        }
    }

    /// The number of leaves in this batch
    #[must_use]
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// Check whether this batch is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Whether this batch writes the leaf at `index`
    #[must_use]
    pub fn contains(&self, index: u64) -> bool {
        self.indices.contains(&index)
    }

    /// Add a leaf update to this [`Batch`]
    ///
    /// This function will return `Err` if `index` doesn't fit in a tree of depth `DEPTH`, or if
    /// the batch already writes to `index`. The batch is unchanged in both cases.
    ///
    /// Note that, unlike [`Tree::set_leaves`], no hashing takes place when inserting into a
    /// [`Batch`], so performance is very good
    ///
    /// [`Tree::set_leaves`]: crate::Tree::set_leaves
    pub fn insert(&mut self, index: u64, digest: D) -> Result<()> {
        let capacity = leaf_capacity::<DEPTH>();

        if index >= capacity {
            return Err(Error::IndexOutOfRange { index, capacity });
        }

        if !self.indices.insert(index) {
            return Err(Error::DuplicateIndex { index });
        }

        self.leaves.push(Node::leaf(index, digest));

        Ok(())
    }

    /// Get an iterator over the leaf indices in this [`Batch`], in insertion order
    pub fn indices(&self) -> impl Iterator<Item = u64> + '_ {
        self.leaves.iter().map(|leaf| leaf.index)
    }

    /// Get an iterator over the leaves in this [`Batch`], in insertion order
    pub fn leaves(&self) -> impl Iterator<Item = &Node<D>> + '_ {
        self.leaves.iter()
    }

    /// Consume this [`Batch`], returning its leaves in insertion order
    #[must_use]
    pub fn into_leaves(self) -> Vec<Node<D>> {
        self.leaves
    }

    /// Create a [`Batch`] from an [`Iterator`] over `(index, digest)` tuples
    ///
    /// ```rust
    /// # use batch_smt::*;
    /// let batch = Batch::<16, _>::from_entries([
    ///     (1, Hash256::new([1; 32])),
    ///     (2, Hash256::new([2; 32])),
    ///     (3, Hash256::new([3; 32])),
    /// ])
    /// .unwrap();
    ///
    /// let error = Batch::<16, _>::from_entries([
    ///     (1, Hash256::new([1; 32])),
    ///     (1, Hash256::new([2; 32])),
    /// ])
    /// .unwrap_err();
    ///
    /// assert_eq!(error, Error::DuplicateIndex { index: 1 });
    /// ```
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u64, D)>,
    {
        let entries = entries.into_iter();
        let mut batch = Self::with_capacity(entries.size_hint().0);

        for (index, digest) in entries {
            batch.insert(index, digest)?;
        }

        Ok(batch)
    }
}

#[cfg(feature = "rand")]
impl<const DEPTH: usize> Batch<DEPTH, crate::Hash256> {
    /// Create a [`Batch`] of `count` random digests at distinct random indices
    ///
    /// If `count` is larger than the number of leaf slots, every slot is filled
    ///
    /// ```rust
    /// # use batch_smt::*;
    /// let batch = Batch::<8, Hash256>::random(&mut rand::thread_rng(), 100);
    /// assert_eq!(batch.len(), 100);
    ///
    /// let full = Batch::<3, Hash256>::random(&mut rand::thread_rng(), 100);
    /// assert_eq!(full.len(), 4);
    /// ```
    pub fn random<R: rand::Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        let capacity = usize::try_from(leaf_capacity::<DEPTH>()).unwrap_or(usize::MAX);
        let count = count.min(capacity);

        let mut batch = Self::with_capacity(count);

        for index in rand::seq::index::sample(rng, capacity, count) {
            let digest = crate::Hash256::random(rng);
            let inserted = batch.insert(index as u64, digest);
            debug_assert!(
                inserted.is_ok(),
                "sampled indices are distinct and in range: {inserted:?}"
            );
        }

        batch
    }
}
