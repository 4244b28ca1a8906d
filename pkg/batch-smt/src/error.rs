/// An error that can occur when building a [`Batch`] or writing into a [`Tree`]
///
/// Errors are always reported before anything is written, so a [`Tree`] that returned an error
/// is unchanged.
///
/// ```rust
/// # use batch_smt::*;
/// let mut batch = Batch::<4, Hash256>::new();
///
/// // a tree of depth 4 has 8 leaf slots
/// let error = batch.insert(8, Hash256::ZERO).unwrap_err();
/// assert_eq!(error, Error::IndexOutOfRange { index: 8, capacity: 8 });
///
/// batch.insert(5, Hash256::ZERO).unwrap();
/// let error = batch.insert(5, Hash256::ZERO).unwrap_err();
/// assert_eq!(error, Error::DuplicateIndex { index: 5 });
/// ```
///
/// [`Batch`]: crate::Batch
/// [`Tree`]: crate::Tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A leaf index does not fit in the tree
    #[error("leaf index {index} is out of range, the tree has {capacity} leaf slots")]
    IndexOutOfRange {
        /// The rejected index
        index: u64,
        /// The number of leaf slots in the tree
        capacity: u64,
    },

    /// The same leaf index was used twice in one batch
    #[error("leaf index {index} appears more than once in the batch")]
    DuplicateIndex {
        /// The repeated index
        index: u64,
    },

    /// Two batches that were merged both contained these leaf indices
    #[error("batches overlap at leaf indices {0:?}")]
    DuplicateIndices(Vec<u64>),

    /// A node level is not part of the tree
    #[error("level {level} is out of range for a tree of depth {depth}")]
    LevelOutOfRange {
        /// The rejected level
        level: usize,
        /// The depth of the tree
        depth: usize,
    },

    /// A node index is too large for its level
    #[error("node index {index} is out of range at level {level}")]
    NodeIndexOutOfRange {
        /// The level of the node
        level: usize,
        /// The rejected index
        index: u64,
    },
}

/// Result type alias for fallible tree and batch operations
pub type Result<T, E = Error> = std::result::Result<T, E>;
