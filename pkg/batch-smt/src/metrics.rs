/// Counters for the work a [`Tree`] has done, useful for debugging and benchmarking
///
/// Counters accumulate across batches until [`Tree::reset_metrics`] is called.
///
/// ```rust
/// # use batch_smt::*;
/// let mut tree = Tree::<4>::new();
/// tree.set_leaves([(2, Hash256::new([2; 32])), (3, Hash256::new([3; 32]))]).unwrap();
///
/// let metrics = tree.metrics();
///
/// // 2 and 3 are siblings, so the merge hashes them directly and the
/// // finalizer climbs the remaining 2 levels to the root
/// assert_eq!(metrics.hashes(), 3);
/// assert_eq!(metrics.lockstep_steps(), 0);
/// assert_eq!(metrics.finalize_steps(), 2);
/// ```
///
/// [`Tree`]: crate::Tree
/// [`Tree::reset_metrics`]: crate::Tree::reset_metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    hashes: usize,
    reconcile_steps: usize,
    lockstep_steps: usize,
    finalize_steps: usize,
    batches: usize,
    leaves: usize,
}

impl Metrics {
    /// The number of times the hasher has been called
    ///
    /// Computing the [`ZeroTable`] is not included
    ///
    /// [`ZeroTable`]: crate::ZeroTable
    #[inline]
    #[must_use]
    pub fn hashes(&self) -> usize {
        self.hashes
    }

    /// The number of levels climbed to bring two merged subtrees to the same level
    #[inline]
    #[must_use]
    pub fn reconcile_steps(&self) -> usize {
        self.reconcile_steps
    }

    /// The number of levels climbed by both sides of a merge before they became siblings
    ///
    /// Each step hashes two nodes, one per side
    #[inline]
    #[must_use]
    pub fn lockstep_steps(&self) -> usize {
        self.lockstep_steps
    }

    /// The number of levels climbed from the top of a merged batch to the root
    #[inline]
    #[must_use]
    pub fn finalize_steps(&self) -> usize {
        self.finalize_steps
    }

    /// The number of non-empty batches inserted
    #[inline]
    #[must_use]
    pub fn batches(&self) -> usize {
        self.batches
    }

    /// The number of leaves written
    #[inline]
    #[must_use]
    pub fn leaves(&self) -> usize {
        self.leaves
    }

    pub(crate) fn incr_hashes(&mut self) {
        self.hashes += 1;
    }

    pub(crate) fn incr_reconcile_steps(&mut self) {
        self.reconcile_steps += 1;
    }

    pub(crate) fn incr_lockstep_steps(&mut self) {
        self.lockstep_steps += 1;
    }

    pub(crate) fn incr_finalize_steps(&mut self) {
        self.finalize_steps += 1;
    }

    pub(crate) fn record_batch(&mut self, leaves: usize) {
        self.batches += 1;
        self.leaves += leaves;
    }
}
