// Search and insertion benchmarks for SortedSequence
//
// Mirrors the large custom-key workloads: a sequence of records sorted by
// a `start` field, searched and inserted into at random keys.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sorted_sequence::SortedSequence;

#[derive(Clone, Debug)]
struct Record {
    start: u64,
}

fn records(count: u64, step: u64) -> Vec<Record> {
    return (0..count).map(|i| Record { start: i * step }).collect();
}

// =============================================================================
// Find
// =============================================================================

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    let mut rng = StdRng::seed_from_u64(42);

    for count in [1_000u64, 100_000, 10_000_000] {
        let seq = SortedSequence::with_key(records(count, 10), |r: &Record| r.start);
        let probes: Vec<u64> = (0..1024).map(|_| rng.gen_range(0..count) * 10).collect();

        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_with_input(BenchmarkId::new("custom_key", count), &probes, |b, probes| {
            b.iter(|| {
                for start in probes {
                    black_box(seq.find_key(start));
                }
            });
        });
    }

    group.finish();
}

// =============================================================================
// Insert
// =============================================================================

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    let mut rng = StdRng::seed_from_u64(7);

    for count in [1_000u64, 100_000, 1_000_000] {
        let data = records(count, 2);
        group.throughput(Throughput::Elements(1));

        group.bench_function(BenchmarkId::new("random_key", count), |b| {
            b.iter_batched(
                || {
                    let seq = SortedSequence::with_key(data.clone(), |r: &Record| r.start);
                    let start = rng.gen_range(0..count * 2) | 1;
                    (seq, Record { start })
                },
                |(mut seq, record)| {
                    let _ = black_box(seq.insert(record).map(|e| e.index));
                    seq
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(BenchmarkId::new("append", count), |b| {
            b.iter_batched(
                || SortedSequence::with_key(data.clone(), |r: &Record| r.start),
                |mut seq| {
                    let _ = black_box(seq.insert(Record { start: count * 2 }).map(|e| e.index));
                    seq
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_find, bench_insert);
criterion_main!(benches);
