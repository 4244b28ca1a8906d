use ::proptest::{arbitrary::StrategyFor, prelude::*, strategy::Map};

use crate::{Batch, Hash256, Sha256Hasher, Tree};

impl<const DEPTH: usize> Arbitrary for Tree<DEPTH, Sha256Hasher> {
    type Parameters = ();
    type Strategy = Map<StrategyFor<Batch<DEPTH, Hash256>>, fn(Batch<DEPTH, Hash256>) -> Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        any::<Batch<DEPTH, Hash256>>().prop_map(|batch| {
            let mut tree = Tree::new();
            tree.insert_batch(batch);
            tree
        })
    }
}
