// Quick comparison of the skip list against std's BTreeMap.
//
// Run with: cargo run --release --features bench --bin grid_quick

use std::collections::BTreeMap;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use quadlist::SkipList;

fn time_ops<F: Fn() -> usize>(f: F, iterations: usize) -> f64 {
    // Warmup
    for _ in 0..3 {
        let _ = f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = f();
    }
    let elapsed = start.elapsed();
    elapsed.as_nanos() as f64 / iterations as f64
}

fn random_keys(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0..n as u64 * 4)).collect()
}

fn main() {
    println!("\n=== Ordered map comparison ===\n");
    println!("All times in microseconds (us)\n");
    println!(
        "| {:10} | {:>8} | {:>10} | {:>10} | {:>10} | {:>10} |",
        "Impl", "n", "Insert", "Find", "Ceiling", "Remove"
    );
    println!("|------------|----------|------------|------------|------------|------------|");

    for n in [1_000usize, 10_000, 100_000] {
        let keys = random_keys(n, 42);
        let iterations = if n >= 100_000 { 5 } else { 20 };

        let insert = time_ops(
            || {
                let mut list = SkipList::with_seed(7);
                for &key in &keys {
                    list.insert(key, key);
                }
                list.len()
            },
            iterations,
        );
        let mut list = SkipList::with_seed(7);
        for &key in &keys {
            list.insert(key, key);
        }
        let find = time_ops(|| keys.iter().filter(|k| list.find(k).is_some()).count(), iterations);
        let ceiling = time_ops(
            || keys.iter().filter(|k| list.ceiling_entry(&(**k + 1)).is_some()).count(),
            iterations,
        );
        let remove = time_ops(
            || {
                let mut list = SkipList::with_seed(7);
                for &key in &keys {
                    list.insert(key, key);
                }
                keys.iter().filter(|k| list.remove(k).is_some()).count()
            },
            iterations,
        );
        println!(
            "| {:10} | {:>8} | {:>10.0} | {:>10.0} | {:>10.0} | {:>10.0} |",
            "SkipList",
            n,
            insert / 1000.0,
            find / 1000.0,
            ceiling / 1000.0,
            (remove - insert).max(0.0) / 1000.0
        );

        let insert = time_ops(
            || {
                let mut map = BTreeMap::new();
                for &key in &keys {
                    map.insert(key, key);
                }
                map.len()
            },
            iterations,
        );
        let map: BTreeMap<u64, u64> = keys.iter().map(|&k| (k, k)).collect();
        let find = time_ops(|| keys.iter().filter(|k| map.get(*k).is_some()).count(), iterations);
        let ceiling = time_ops(
            || keys.iter().filter(|k| map.range(**k + 1..).next().is_some()).count(),
            iterations,
        );
        let remove = time_ops(
            || {
                let mut map: BTreeMap<u64, u64> = keys.iter().map(|&k| (k, k)).collect();
                keys.iter().filter(|k| map.remove(*k).is_some()).count()
            },
            iterations,
        );
        println!(
            "| {:10} | {:>8} | {:>10.0} | {:>10.0} | {:>10.0} | {:>10.0} |",
            "BTreeMap",
            n,
            insert / 1000.0,
            find / 1000.0,
            ceiling / 1000.0,
            (remove - insert).max(0.0) / 1000.0
        );
    }
    println!();
}
