#[macro_use]
extern crate bencher;

use std::collections::HashSet;

use bencher::{black_box, Bencher};
use intset::IntSet;
use rand::{rngs::StdRng, Rng, SeedableRng};

const MAX_VALUE: usize = 1 << 16;
const COUNT: usize = 1000;

fn random_values(seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..COUNT).map(|_| rng.gen_range(0..MAX_VALUE)).collect()
}

fn bench_int_set_insert(b: &mut Bencher) {
    let values = random_values(1);
    b.iter(|| {
        let mut set: IntSet = IntSet::new();
        for &x in &values {
            set.insert(x);
        }
        black_box(set.len());
    });
}

fn bench_bit_set_insert(b: &mut Bencher) {
    let values = random_values(1);
    b.iter(|| {
        let mut set = bit_set::BitSet::new();
        for &x in &values {
            set.insert(x);
        }
        black_box(set.len());
    });
}

fn bench_hash_set_insert(b: &mut Bencher) {
    let values = random_values(1);
    b.iter(|| {
        let mut set = HashSet::new();
        for &x in &values {
            set.insert(x);
        }
        black_box(set.len());
    });
}

fn bench_int_set_union(b: &mut Bencher) {
    let left: IntSet = random_values(2).into_iter().collect();
    let right: IntSet = random_values(3).into_iter().collect();
    b.iter(|| {
        let mut set = left.copy();
        set.union_with(&right);
        black_box(set.len());
    });
}

fn bench_bit_set_union(b: &mut Bencher) {
    let left: bit_set::BitSet = random_values(2).into_iter().collect();
    let right: bit_set::BitSet = random_values(3).into_iter().collect();
    b.iter(|| {
        let mut set = left.clone();
        set.union_with(&right);
        black_box(set.len());
    });
}

fn bench_int_set_iter(b: &mut Bencher) {
    let set: IntSet = random_values(4).into_iter().collect();
    b.iter(|| {
        for x in set.iter() {
            black_box(x);
        }
    });
}

fn bench_bit_set_iter(b: &mut Bencher) {
    let set: bit_set::BitSet = random_values(4).into_iter().collect();
    b.iter(|| {
        for x in set.iter() {
            black_box(x);
        }
    });
}

benchmark_group!(
    benches,
    bench_int_set_insert,
    bench_bit_set_insert,
    bench_hash_set_insert,
    bench_int_set_union,
    bench_bit_set_union,
    bench_int_set_iter,
    bench_bit_set_iter
);
benchmark_main!(benches);
