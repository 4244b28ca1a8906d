use poseidon_circuit::{
    poseidon::primitives::{ConstantLength, Hash, P128Pow5T3},
    Bn256Fr,
};

use super::MerkleHasher;

type H = Hash<Bn256Fr, P128Pow5T3<Bn256Fr>, ConstantLength<2>, 3, 2>;

/// Poseidon (P128Pow5T3) over the BN256 scalar field, with the field zero as the empty leaf
///
/// This makes roots directly usable inside Halo2 circuits that hash with the same permutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoseidonHasher;

impl MerkleHasher for PoseidonHasher {
    type Digest = Bn256Fr;

    #[inline]
    fn empty_leaf(&self) -> Bn256Fr {
        Bn256Fr::from(0)
    }

    #[inline]
    fn hash(&self, left: Bn256Fr, right: Bn256Fr) -> Bn256Fr {
        H::init().hash([left, right])
    }
}
