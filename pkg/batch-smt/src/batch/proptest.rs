use proptest::{arbitrary::StrategyFor, prelude::*, strategy::Map};

use crate::{leaf_capacity, Batch};

impl<const DEPTH: usize, D> Arbitrary for Batch<DEPTH, D>
where
    D: Arbitrary,
{
    type Parameters = ();
    type Strategy = Map<StrategyFor<Vec<(u64, D)>>, fn(Vec<(u64, D)>) -> Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        any::<Vec<(u64, D)>>().prop_map(|entries| {
            let mut batch = Batch::with_capacity(entries.len());

            for (index, digest) in entries {
                // wrap into the leaf range, dropping duplicates
                let _ = batch.insert(index % leaf_capacity::<DEPTH>(), digest);
            }

            batch
        })
    }
}
