pub mod order;

mod error;
mod heap;

pub use error::HeapViolation;
pub use heap::{BinaryHeap, IntoIterSorted, MaxHeap, MinHeap};
pub use order::{ByFn, ByKey, FloatOrder, NaturalOrder, Reversed, TotalOrder};

use rand::prelude::*;
use std::cmp::Reverse;

fn bench<F: FnOnce()>(name: &str, num_tabs: usize, f: F) {
    use std::time::{Duration, Instant};
    let start = Instant::now();
    f();
    let elapsed = start.elapsed();

    print!("BENCH `{}` :", name);
    for _ in 0..num_tabs {
        print!("\t");
    }

    if elapsed < Duration::from_millis(1) {
        println!(
            "{} {:03} nanos",
            elapsed.as_micros(),
            elapsed.as_nanos() % 1000,
        );
    } else if elapsed < Duration::from_secs(1) {
        println!(
            "{} {:03} micros",
            elapsed.as_millis(),
            elapsed.as_micros() % 1000,
        );
    } else {
        println!(
            "{} {:03} millis",
            elapsed.as_secs(),
            elapsed.subsec_millis(),
        );
    }
}

#[allow(dead_code)]
fn validate_heap_dstruct() {
    let mut rng = SmallRng::from_entropy();

    const K: usize = 16;
    const N: usize = K * 1024;

    let values: Vec<u32> = (0..N).map(|_| rng.gen_range(0..1000_000)).collect();

    let mut std_heap = std::collections::BinaryHeap::new();
    let mut heap = MinHeap::new();

    println!("[Validate MinHeap]");
    for k in 0..K {
        let start = k * N / K;
        let end = start + N / K;

        for &x in values[start..end].iter() {
            heap.push(x);
            std_heap.push(Reverse(x));
        }

        for _ in 0..N / K / 4 {
            assert_eq!(heap.pop(), std_heap.pop().map(|Reverse(x)| x));
        }

        assert_eq!(heap.len(), std_heap.len());
        assert_eq!(heap.peek(), std_heap.peek().map(|Reverse(x)| x));
        assert_eq!(heap.validate(), Ok(()));
    }

    let mut remove_perm: Vec<u32> = heap.iter().copied().collect();
    remove_perm.shuffle(&mut rng);

    let (removed, kept) = remove_perm.split_at(remove_perm.len() / 2);
    for (i, x) in removed.iter().enumerate() {
        assert!(heap.remove(x));
        assert_eq!(heap.len(), remove_perm.len() - i - 1);
    }
    assert_eq!(heap.validate(), Ok(()));
    assert!(!heap.remove(&1000_000));

    let mut kept = kept.to_vec();
    kept.sort_unstable();
    assert_eq!(heap.into_sorted_vec(), kept);

    println!("MinHeap VALIDATED");
    println!();
}

#[allow(dead_code)]
fn bench_heap_dstruct() {
    if cfg!(feature = "invariant-checks") {
        return;
    }

    let mut rng = SmallRng::from_entropy();

    const N: usize = 256 * 1024; // 256 KiB

    let values: Vec<u32> = (0..N).map(|_| rng.gen_range(0..1000_000)).collect();

    let mut std_heap = std::collections::BinaryHeap::new();
    bench("std::collections::BinaryHeap::push", 2, || {
        for &x in values.iter() {
            std_heap.push(Reverse(x));
        }
    });
    bench("std::collections::BinaryHeap::pop", 2, || {
        for len in (0..N).rev() {
            assert!(std_heap.pop().is_some());
            assert_eq!(std_heap.len(), len);
        }
    });
    bench("std::collections::BinaryHeap::from", 2, || {
        std_heap = values.iter().map(|&x| Reverse(x)).collect();
    });
    println!();

    let mut heap = MinHeap::new();
    bench("MinHeap::push", 5, || {
        for &x in values.iter() {
            heap.push(x);
        }
    });
    bench("MinHeap::pop", 5, || {
        let mut prev = 0;
        for len in (0..N).rev() {
            let x = heap.pop().unwrap_or_default();
            assert!(prev <= x);
            assert_eq!(heap.len(), len);
            prev = x;
        }
    });
    bench("MinHeap::from_vec", 4, || {
        heap = MinHeap::from_vec(values.clone());
    });
    assert_eq!(heap.peek(), std_heap.peek().map(|Reverse(x)| x));
}

#[test]
pub fn main() {
    validate_heap_dstruct();
    bench_heap_dstruct();
    println!();
}
