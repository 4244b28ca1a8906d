use std::hint::black_box;

use batch_smt::{reference::FullTree, Batch, Hash256, Sha256Hasher, Tree};
use benchy::{benchmark, BenchmarkRun};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

fn make_batch<const DEPTH: usize>(n: usize) -> Batch<DEPTH, Hash256> {
    let mut rng = ChaChaRng::from_seed([0; 32]);
    Batch::random(&mut rng, n)
}

fn clustered_batch<const DEPTH: usize>(n: u64) -> Batch<DEPTH, Hash256> {
    let start = 1 << 20;
    Batch::from_entries((start..start + n).map(|index| (index, Hash256::new([1; 32])))).unwrap()
}

#[benchmark]
pub fn insert_batch_1000_random(b: &mut BenchmarkRun) {
    let batch = make_batch::<64>(1000);
    let mut hashes = 0;

    b.run(|| {
        let mut tree = Tree::<64>::new();
        tree.insert_batch(batch.clone());
        hashes = tree.metrics().hashes();

        black_box(tree);
    });

    b.metrics.insert("hashes".into(), hashes);
}

#[benchmark]
pub fn insert_batch_1000_clustered(b: &mut BenchmarkRun) {
    let batch = clustered_batch::<64>(1000);
    let mut hashes = 0;

    b.run(|| {
        let mut tree = Tree::<64>::new();
        tree.insert_batch(batch.clone());
        hashes = tree.metrics().hashes();

        black_box(tree);
    });

    b.metrics.insert("hashes".into(), hashes);
}

#[benchmark]
pub fn insert_1000_one_by_one(b: &mut BenchmarkRun) {
    let leaves = make_batch::<64>(1000).into_leaves();
    let mut hashes = 0;

    b.run(|| {
        let mut tree = Tree::<64>::new();
        for leaf in &leaves {
            tree.set_leaf(leaf.index, leaf.digest).unwrap();
        }
        hashes = tree.metrics().hashes();

        black_box(tree);
    });

    b.metrics.insert("hashes".into(), hashes);
}

#[benchmark]
pub fn full_rebuild_depth_20(b: &mut BenchmarkRun) {
    let leaves: Vec<_> = make_batch::<20>(1000)
        .leaves()
        .map(|leaf| (leaf.index, leaf.digest))
        .collect();

    b.run(|| {
        let tree = FullTree::<20, _>::build(&Sha256Hasher, leaves.iter().copied());
        black_box(tree);
    });

    b.metrics.insert("hashes".into(), (1 << 19) - 1);
}

benchy::main!(
    insert_batch_1000_random,
    insert_batch_1000_clustered,
    insert_1000_one_by_one,
    full_rebuild_depth_20,
);
