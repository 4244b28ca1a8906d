#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::match_bool)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::must_use_candidate)]
#![deny(missing_docs)]

//! # batch-smt
//!
//! A fixed-depth sparse binary Merkle [`Tree`] whose root is recomputed from *batches* of leaf
//! updates, without materializing (or re-hashing) the full tree.
//!
//! ```rust
//! # use batch_smt::*;
//! // a tree with 16 levels has 2^15 leaf slots
//! let mut tree = Tree::<16>::new();
//!
//! // leaves can arrive in any order
//! let batch: Batch<16, _> = batch! {
//!     9 => Hash256::new([9; 32]),
//!     2 => Hash256::new([2; 32]),
//!     3 => Hash256::new([3; 32]),
//! };
//!
//! let root = tree.insert_batch(batch);
//! assert_eq!(root, tree.root());
//! ```
//!
//! ## Empty subtrees
//!
//! Every slot that was never written holds [`MerkleHasher::empty_leaf`]. The digest of an
//! all-empty subtree only depends on its level, so these digests are computed once per tree (see
//! [`ZeroTable`]) and any node that was never computed resolves to the entry for its level.
//!
//! ## Batch inserts
//!
//! A batch is sorted by leaf index and split recursively at the boundaries of the tree itself, so
//! that every internal node above the batch is hashed exactly once, however many leaves share it.
//! Computed nodes are cached in a sparse [`NodeStore`], which later batches reuse as sibling
//! values.
//!
//! ## Hashers
//!
//! The tree is generic over a [`MerkleHasher`]. [`Sha256Hasher`] is the default. With the
//! `poseidon` feature, `PoseidonHasher` hashes over the BN256 scalar field instead.

/// APIs relating to building batches of leaf updates
mod batch;
mod error;
mod hash;
mod macros;
/// Counters describing the work done by a [`Tree`]
pub mod metrics;
mod node;
/// A naive full-tree implementation, for cross-checking roots
pub mod reference;
mod store;
mod tree;
mod zero;

pub use batch::Batch;
pub use error::{Error, Result};
#[cfg(feature = "poseidon")]
pub use hash::PoseidonHasher;
pub use hash::{Hash256, MerkleHasher, Sha256Hasher};
pub use node::Node;
pub use store::NodeStore;
pub use tree::{intersection_level, Tree};
pub use zero::ZeroTable;

/// The largest supported tree depth
///
/// Leaf indices are `u64`s, so a tree of depth 64 has `2^63` leaf slots
pub const MAX_DEPTH: usize = 64;

struct AssertDepth<const DEPTH: usize>;

impl<const DEPTH: usize> AssertDepth<DEPTH> {
    const VALID: () = assert!(
        DEPTH >= 1 && DEPTH <= MAX_DEPTH,
        "tree depth must be between 1 and 64"
    );
}

/// The number of leaf slots in a tree of depth `DEPTH`
///
/// ```rust
/// # use batch_smt::*;
/// assert_eq!(leaf_capacity::<1>(), 1);
/// assert_eq!(leaf_capacity::<4>(), 8);
/// assert_eq!(leaf_capacity::<64>(), 1 << 63);
/// ```
#[inline]
#[must_use]
pub const fn leaf_capacity<const DEPTH: usize>() -> u64 {
    #[allow(clippy::let_unit_value)]
    let () = AssertDepth::<DEPTH>::VALID;
    1 << (DEPTH - 1)
}

/// The number of node slots at `level` in a tree of depth `DEPTH`
pub(crate) const fn level_capacity<const DEPTH: usize>(level: usize) -> u64 {
    leaf_capacity::<DEPTH>() >> level
}
