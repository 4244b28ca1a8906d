use core::fmt::Debug;

use sha2::{Digest, Sha256};

pub use self::digest::Hash256;
#[cfg(feature = "poseidon")]
pub use self::poseidon::PoseidonHasher;

mod digest;
#[cfg(feature = "poseidon")]
mod poseidon;

/// The hash function used to combine two sibling nodes into their parent
///
/// Take special care when implementing this trait: the digest of every empty subtree is derived
/// from [`empty_leaf`][MerkleHasher::empty_leaf] when a [`Tree`] is created, so both functions
/// must be pure. An implementation whose output changes over time will cause a [`Tree`] to
/// report roots that no longer match its leaves.
///
/// [`Tree`]: crate::Tree
pub trait MerkleHasher: Sync + 'static {
    /// The output of the hash function, and the value stored at every node
    type Digest: Copy + Eq + Debug + Send + Sync;

    /// The digest stored at a leaf slot that was never written
    fn empty_leaf(&self) -> Self::Digest;

    /// Calculate the digest of a parent node from the digests of its children
    ///
    /// This operation is not expected to be symmetric
    fn hash(&self, left: Self::Digest, right: Self::Digest) -> Self::Digest;
}

/// `SHA-256(left || right)`, with 32 zero bytes as the empty leaf - the default hasher for
/// [`Tree`]
///
/// ```rust
/// # use batch_smt::*;
/// let hasher = Sha256Hasher;
///
/// let ab = hasher.hash(Hash256::new([1; 32]), Hash256::new([2; 32]));
/// let ba = hasher.hash(Hash256::new([2; 32]), Hash256::new([1; 32]));
///
/// assert_ne!(ab, ba);
/// assert_eq!(hasher.empty_leaf(), Hash256::ZERO);
/// ```
///
/// [`Tree`]: crate::Tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256Hasher;

impl MerkleHasher for Sha256Hasher {
    type Digest = Hash256;

    #[inline]
    fn empty_leaf(&self) -> Hash256 {
        Hash256::ZERO
    }

    #[inline]
    fn hash(&self, left: Hash256, right: Hash256) -> Hash256 {
        let mut hasher = Sha256::new();
        hasher.update(left.as_bytes());
        hasher.update(right.as_bytes());
        Hash256::new(hasher.finalize().into())
    }
}
