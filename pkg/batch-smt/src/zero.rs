use crate::{AssertDepth, MerkleHasher};

/// The digest of an all-empty subtree at every level of a tree of depth `DEPTH`
///
/// This table can be defined recursively:
///  - `zero[0] = hasher.empty_leaf()`
///  - `zero[n] = hasher.hash(zero[n - 1], zero[n - 1])`
///
/// It is computed once, when a [`Tree`] is created, and never changes afterwards.
///
/// ```rust
/// # use batch_smt::*;
/// let zeroes = ZeroTable::<3, _>::new(&Sha256Hasher);
///
/// let one = Sha256Hasher.hash(Hash256::ZERO, Hash256::ZERO);
/// let two = Sha256Hasher.hash(one, one);
///
/// assert_eq!(zeroes.as_slice(), &[Hash256::ZERO, one, two]);
/// assert_eq!(zeroes.root(), two);
/// ```
///
/// [`Tree`]: crate::Tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZeroTable<const DEPTH: usize, D> {
    zeroes: [D; DEPTH],
}

impl<const DEPTH: usize, D: Copy> ZeroTable<DEPTH, D> {
    /// Compute the table for a given hasher
    ///
    /// Like [`Tree`], `DEPTH` must be between 1 and [`MAX_DEPTH`]:
    ///
    /// ```rust,compile_fail
    /// # use batch_smt::*;
    /// let zeroes = ZeroTable::<0, _>::new(&Sha256Hasher);
    /// ```
    ///
    /// [`Tree`]: crate::Tree
    /// [`MAX_DEPTH`]: crate::MAX_DEPTH
    #[must_use]
    pub fn new<H>(hasher: &H) -> Self
    where
        H: MerkleHasher<Digest = D>,
    {
        #[allow(clippy::let_unit_value)]
        let () = AssertDepth::<DEPTH>::VALID;

        let empty = hasher.empty_leaf();
        let mut zeroes = [empty; DEPTH];

        let mut current = empty;
        for zero in zeroes.iter_mut().skip(1) {
            current = hasher.hash(current, current);
            *zero = current;
        }

        Self { zeroes }
    }

    /// The digest of an empty subtree whose root is at `level`
    ///
    /// # Panics
    ///
    /// Panics if `level >= DEPTH`
    #[inline]
    #[must_use]
    pub fn get(&self, level: usize) -> D {
        self.zeroes[level]
    }

    /// The root of a tree with no leaves
    #[inline]
    #[must_use]
    pub fn root(&self) -> D {
        self.zeroes[DEPTH - 1]
    }

    /// The whole table, leaf level first
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[D] {
        &self.zeroes
    }
}

#[cfg(test)]
mod tests {
    use crate::{Hash256, Sha256Hasher};

    use super::*;

    #[test]
    fn depth_one_is_just_the_empty_leaf() {
        let zeroes = ZeroTable::<1, _>::new(&Sha256Hasher);

        assert_eq!(zeroes.as_slice(), &[Hash256::ZERO]);
        assert_eq!(zeroes.root(), Hash256::ZERO);
    }

    #[test]
    fn each_level_hashes_the_one_below() {
        let zeroes = ZeroTable::<16, _>::new(&Sha256Hasher);

        for pair in zeroes.as_slice().windows(2) {
            assert_eq!(pair[1], Sha256Hasher.hash(pair[0], pair[0]));
        }
    }

    #[test]
    fn known_root_for_depth_4() {
        let zeroes = ZeroTable::<4, _>::new(&Sha256Hasher);

        assert_eq!(
            zeroes.root().to_hex(),
            "c78009fdf07fc56a11f122370658a353aaa542ed63e44c4bc15ff4cd105ab33c"
        );
    }
}
