use tracing::trace;

use crate::{MerkleHasher, Node, Tree};

/// The level at which two nodes on the same `level` first share a parent
///
/// This is `level` plus the bit length of `left ^ right`. Nodes whose indices differ only in the
/// lowest bit are siblings, so they meet one level up. Identical indices yield `level` itself.
///
/// ```rust
/// # use batch_smt::*;
/// // 2 and 3 are siblings
/// assert_eq!(intersection_level(0, 2, 3), 1);
///
/// // 0b000 and 0b101 differ in bit 2, so they meet 3 levels up
/// assert_eq!(intersection_level(0, 0, 5), 3);
/// assert_eq!(intersection_level(4, 0, 5), 7);
///
/// assert_eq!(intersection_level(2, 6, 6), 2);
/// ```
#[inline]
#[must_use]
pub fn intersection_level(level: usize, left: u64, right: u64) -> usize {
    level + (u64::BITS - (left ^ right).leading_zeros()) as usize
}

impl<const DEPTH: usize, H: MerkleHasher> Tree<DEPTH, H> {
    /// Merge a run of leaves into the smallest subtree containing all of them
    ///
    /// `leaves` must be non-empty, sorted by index, and free of duplicates. The returned node is
    /// the common ancestor of every leaf in `leaves`. Every node below it on the path to a leaf
    /// is written to the store, but the returned node itself is not.
    pub(super) fn merge(&mut self, leaves: &[Node<H::Digest>]) -> Node<H::Digest> {
        let (first, last) = match leaves {
            [] => unreachable!("merge is only called with at least one leaf"),
            [leaf] => return *leaf,
            [first, .., last] => (first, last),
        };

        // all leaves share the bits above `split_bit`, and since they're sorted, those with
        // `split_bit` unset come first
        let split_bit = intersection_level(0, first.index, last.index) - 1;
        let split = leaves.partition_point(|leaf| (leaf.index >> split_bit) & 1 == 0);
        let (left_leaves, right_leaves) = leaves.split_at(split);

        trace!(
            len = leaves.len(),
            split,
            split_bit,
            "splitting leaves at subtree boundary"
        );

        let left = self.merge(left_leaves);
        let right = self.merge(right_leaves);

        self.store.set(left);
        self.store.set(right);

        self.join(left, right)
    }

    /// Combine two disjoint subtrees into their common ancestor
    ///
    /// `left` must lie entirely to the left of `right`, and every other leaf below their common
    /// ancestor must already be reflected in the store.
    fn join(
        &mut self,
        mut left: Node<H::Digest>,
        mut right: Node<H::Digest>,
    ) -> Node<H::Digest> {
        while left.level < right.level {
            left = self.climb(left);
            self.metrics.incr_reconcile_steps();
        }

        while right.level < left.level {
            right = self.climb(right);
            self.metrics.incr_reconcile_steps();
        }

        assert_ne!(
            left.index, right.index,
            "merged subtrees overlap at level {}",
            left.level
        );

        let level = intersection_level(left.level, left.index, right.index);

        while left.level + 1 < level {
            left = self.climb(left);
            right = self.climb(right);
            self.metrics.incr_lockstep_steps();
        }

        // `left` and `right` are now siblings
        let digest = self.hash(left.digest, right.digest);

        Node::new(level, left.parent_index(), digest)
    }
}
