/// Helper macro to create a [`Batch`]
///
/// ```rust
/// # use batch_smt::*;
/// let batch: Batch<16, _> = batch! {
///     // leaf index => digest
///     5 => Hash256::new([5; 32]),
///     3 => Hash256::new([3; 32]),
/// };
///
/// assert_eq!(batch.len(), 2);
///
/// let empty: Batch<16, Hash256> = batch! {};
/// assert!(empty.is_empty());
/// ```
///
/// # Panics
///
/// Panics if an index is out of range for the batch's depth, or appears twice
///
/// [`Batch`]: crate::Batch
#[macro_export]
macro_rules! batch {
    {} => {{ $crate::Batch::new() }};
    { $index:expr => $digest:expr $(,)? } => {{
        let mut batch = $crate::Batch::new();
        batch.insert($index, $digest).unwrap();
        batch
    }};
    { $index:expr => $digest:expr, $($t:tt)* } => {{
        let mut batch = $crate::batch!{ $($t)* };
        batch.insert($index, $digest).unwrap();
        batch
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Batch, Hash256};

    type B = Batch<16, Hash256>;

    #[test]
    fn basic_syntax_test() {
        let _b: B = batch! {};
        let _b: B = batch! { 1 => Hash256::ZERO };
        let _b: B = batch! { 1 => Hash256::ZERO, };
        let _b: B = batch! { 1 => Hash256::ZERO, 2 => Hash256::ZERO };
        let _b: B = batch! { 1 => Hash256::ZERO, 2 => Hash256::ZERO, };

        let digest = Hash256::new([1; 32]);
        let index = 3;
        let _b: B = batch! { index => digest };
        let _b: B = batch! { index + 1 => digest, index => digest };
    }

    #[test]
    #[should_panic(expected = "DuplicateIndex")]
    fn duplicate_indices_panic() {
        let _b: B = batch! { 1 => Hash256::ZERO, 1 => Hash256::ZERO };
    }
}
