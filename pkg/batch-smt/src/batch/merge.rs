use crate::{Batch, Error, Result};

impl<const DEPTH: usize, D> Batch<DEPTH, D> {
    /// Merge `other` into `self`
    ///
    /// If the two batches write to disjoint leaf indices, the resulting [`Batch`] contains all the
    /// leaves from both [`Batch`]es.
    ///
    /// Otherwise, every shared index is returned in ascending order in
    /// [`Error::DuplicateIndices`]
    ///
    /// ```rust
    /// # use batch_smt::*;
    /// let a: Batch<8, _> = batch! { 1 => Hash256::ZERO, 2 => Hash256::ZERO };
    /// let b: Batch<8, _> = batch! { 2 => Hash256::ZERO, 3 => Hash256::ZERO };
    ///
    /// assert_eq!(a.merge(b).unwrap_err(), Error::DuplicateIndices(vec![2]));
    /// ```
    pub fn merge(mut self, other: Self) -> Result<Self> {
        let mut overlapping: Vec<u64> = self
            .indices
            .intersection(&other.indices)
            .copied()
            .collect();

        if !overlapping.is_empty() {
            overlapping.sort_unstable();
            return Err(Error::DuplicateIndices(overlapping));
        }

        self.leaves.extend(other.leaves);
        self.indices.extend(other.indices);

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prop_assert_eq;
    use test_strategy::proptest;

    use crate::{batch, Hash256, Node};

    use super::*;

    #[test]
    fn can_merge_batches() {
        let a = batch! {
            1 => Hash256::new([1; 32]),
            2 => Hash256::new([2; 32]),
        };

        let b = batch! {
            3 => Hash256::new([3; 32]),
            4 => Hash256::new([4; 32]),
        };

        let c: Batch<64, Hash256> = a.merge(b).unwrap();

        let expected: Batch<64, Hash256> = batch! {
            1 => Hash256::new([1; 32]),
            2 => Hash256::new([2; 32]),
            3 => Hash256::new([3; 32]),
            4 => Hash256::new([4; 32]),
        };

        let mut leaves: Vec<_> = c.leaves().collect();
        let mut expected_leaves: Vec<_> = expected.leaves().collect();

        leaves.sort_by_key(|leaf| leaf.index);
        expected_leaves.sort_by_key(|leaf| leaf.index);

        assert_eq!(leaves, expected_leaves);
    }

    #[test]
    fn reports_every_overlapping_index() {
        let a: Batch<8, _> = batch! { 5 => 0u8, 1 => 0, 2 => 0 };
        let b: Batch<8, _> = batch! { 2 => 1u8, 3 => 1, 5 => 1 };

        assert_eq!(a.merge(b).unwrap_err(), Error::DuplicateIndices(vec![2, 5]));
    }

    #[proptest]
    fn merge_batches(batch1: Batch<16, Hash256>, batch2: Batch<16, Hash256>) {
        let expected_leaves: Vec<Node<Hash256>> =
            batch1.leaves().chain(batch2.leaves()).copied().collect();

        let result = batch1.merge(batch2);
        proptest::prop_assume!(result.is_ok());
        let merged = result.unwrap();

        let leaves: Vec<_> = merged.into_leaves();

        prop_assert_eq!(leaves, expected_leaves);
    }
}
