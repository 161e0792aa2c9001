//! Benchmark for LinkedList and ArrayList vs standard Vec.
//!
//! Covers appends (where the array list pays for linear growth), indexed
//! reads and front insertion.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use edu_collections::collections::{ArrayList, LinkedList};
use std::hint::black_box;

// =============================================================================
// add Benchmark (append)
// =============================================================================

fn benchmark_add(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("add");

    for size in [100, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("LinkedList", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut list = LinkedList::new();
                    for index in 0..size {
                        list.add(black_box(index));
                    }
                    black_box(list)
                });
            },
        );

        // Linear growth makes this quadratic overall
        group.bench_with_input(
            BenchmarkId::new("ArrayList", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut list = ArrayList::new();
                    for index in 0..size {
                        list.add(black_box(index));
                    }
                    black_box(list)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut vector = Vec::new();
                for index in 0..size {
                    vector.push(black_box(index));
                }
                black_box(vector)
            });
        });
    }

    group.finish();
}

// =============================================================================
// get Benchmark (middle index)
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get_middle");

    for size in [100, 1000, 10000] {
        let linked: LinkedList<i32> = (0..size).collect();
        let array: ArrayList<i32> = (0..size).collect();
        let vector: Vec<i32> = (0..size).collect();
        let middle = (size / 2) as usize;

        group.bench_with_input(BenchmarkId::new("LinkedList", size), &size, |bencher, _| {
            bencher.iter(|| black_box(linked.get(black_box(middle)).ok()));
        });

        group.bench_with_input(BenchmarkId::new("ArrayList", size), &size, |bencher, _| {
            bencher.iter(|| black_box(array.get(black_box(middle)).ok()));
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, _| {
            bencher.iter(|| black_box(vector.get(black_box(middle))));
        });
    }

    group.finish();
}

// =============================================================================
// insert Benchmark (front)
// =============================================================================

fn benchmark_insert_front(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert_front");

    for size in [100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("LinkedList", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut list = LinkedList::new();
                    for index in 0..size {
                        let _ = list.insert(0, black_box(index));
                    }
                    black_box(list)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("ArrayList", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut list = ArrayList::new();
                    for index in 0..size {
                        let _ = list.insert(0, black_box(index));
                    }
                    black_box(list)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_add, benchmark_get, benchmark_insert_front);

criterion_main!(benches);
