//! Every level of a [`FullTree`] is materialized, so building one costs `2^DEPTH` hashes no matter
//! how few leaves are set. This makes it useless for real trees, but its roots are easy to trust,
//! which makes it a good oracle for [`Tree`] in tests and benchmarks.
//!
//! ```rust
//! # use batch_smt::*;
//! # use batch_smt::reference::FullTree;
//! let leaves = [(1, Hash256::new([1; 32])), (6, Hash256::new([6; 32]))];
//!
//! let full = FullTree::<4, _>::build(&Sha256Hasher, leaves);
//!
//! let mut tree = Tree::<4>::new();
//! tree.set_leaves(leaves).unwrap();
//!
//! assert_eq!(full.root(), tree.root());
//! ```
//!
//! [`Tree`]: crate::Tree

use rayon::prelude::*;

use crate::{leaf_capacity, MerkleHasher};

/// A Merkle tree with every node computed and stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullTree<const DEPTH: usize, D> {
    /// `levels[0]` holds the leaves, `levels[DEPTH - 1]` holds only the root
    levels: Vec<Vec<D>>,
}

impl<const DEPTH: usize, D> FullTree<DEPTH, D>
where
    D: Copy + Send + Sync,
{
    /// Build the tree from `(index, digest)` pairs, hashing each level in parallel
    ///
    /// Slots without a pair hold `hasher.empty_leaf()`. If an index appears more than once, the
    /// last digest wins.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of range, or if the leaf row doesn't fit in memory (in practice,
    /// depths above about 30)
    pub fn build<H>(hasher: &H, leaves: impl IntoIterator<Item = (u64, D)>) -> Self
    where
        H: MerkleHasher<Digest = D>,
    {
        let capacity = usize::try_from(leaf_capacity::<DEPTH>())
            .expect("leaf row of a full tree must be addressable");

        let mut row = vec![hasher.empty_leaf(); capacity];

        for (index, digest) in leaves {
            let slot = usize::try_from(index)
                .ok()
                .and_then(|index| row.get_mut(index))
                .unwrap_or_else(|| panic!("leaf index {index} is out of range"));

            *slot = digest;
        }

        let mut levels = Vec::with_capacity(DEPTH);

        while row.len() > 1 {
            let parents = row
                .par_chunks_exact(2)
                .map(|pair| hasher.hash(pair[0], pair[1]))
                .collect();

            levels.push(core::mem::replace(&mut row, parents));
        }

        levels.push(row);

        Self { levels }
    }

    /// The root of the tree
    #[must_use]
    pub fn root(&self) -> D {
        self.levels[DEPTH - 1][0]
    }

    /// The digest at `(level, index)`
    ///
    /// # Panics
    ///
    /// Panics if `(level, index)` is not a position in the tree
    #[must_use]
    pub fn node(&self, level: usize, index: u64) -> D {
        let index = usize::try_from(index).expect("index must fit in usize");
        self.levels[level][index]
    }

    /// The leaf row of the tree
    #[must_use]
    pub fn leaves(&self) -> &[D] {
        &self.levels[0]
    }
}

#[cfg(test)]
mod tests {
    use crate::{Hash256, Sha256Hasher, ZeroTable};

    use super::*;

    #[test]
    fn empty_full_tree_matches_zeroes() {
        let full = FullTree::<6, _>::build(&Sha256Hasher, []);
        let zeroes = ZeroTable::<6, _>::new(&Sha256Hasher);

        for level in 0..6 {
            assert_eq!(full.node(level, 0), zeroes.get(level));
        }

        assert_eq!(full.leaves().len(), 32);
    }

    #[test]
    fn levels_halve() {
        let full = FullTree::<4, _>::build(&Sha256Hasher, [(0, Hash256::new([1; 32]))]);

        let sizes: Vec<_> = full.levels.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![8, 4, 2, 1]);
    }

    #[test]
    fn last_write_wins() {
        let a = FullTree::<3, _>::build(
            &Sha256Hasher,
            [(1, Hash256::new([1; 32])), (1, Hash256::new([2; 32]))],
        );
        let b = FullTree::<3, _>::build(&Sha256Hasher, [(1, Hash256::new([2; 32]))]);

        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_leaf_panics() {
        let _ = FullTree::<3, Hash256>::build(&Sha256Hasher, [(4, Hash256::ZERO)]);
    }
}
