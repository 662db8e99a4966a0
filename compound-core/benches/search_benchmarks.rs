//! Benchmarks for index construction and compound search
//!
//! Run with: cargo bench --bench search_benchmarks

use compound_core::{find_longest_compound, DictionaryIndex, SearchOptions, Segmenter};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// Deterministic pseudo-random word list over a small alphabet, so that many
/// words share prefixes and a fair number are compounds.
fn generate_words(count: usize) -> Vec<String> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    (0..count)
        .map(|_| {
            let len = 1 + (next() % 12) as usize;
            (0..len)
                .map(|_| char::from(b'a' + (next() % 6) as u8))
                .collect()
        })
        .collect()
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for count in [1_000, 10_000, 100_000] {
        let words = generate_words(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("build", count), &words, |b, words| {
            b.iter(|| DictionaryIndex::build(black_box(words.iter().map(String::as_str))).unwrap());
        });
    }

    group.finish();
}

fn bench_longest_compound(c: &mut Criterion) {
    let mut group = c.benchmark_group("longest_compound");

    for count in [1_000, 10_000, 100_000] {
        let index = DictionaryIndex::build(generate_words(count)).unwrap();
        group.bench_with_input(BenchmarkId::new("find", count), &index, |b, index| {
            b.iter(|| find_longest_compound(black_box(index)));
        });
    }

    group.finish();
}

/// Compare the plain backtracking walk with the failed-suffix memo on a
/// dictionary built to make the plain walk blow up.
fn bench_memoization(c: &mut Criterion) {
    let mut group = c.benchmark_group("memoization");

    let words: Vec<String> = (1..=12).map(|n| "a".repeat(n)).collect();
    let index = DictionaryIndex::build(words).unwrap();
    let word = format!("{}b", "a".repeat(18));

    for memoize_failures in [false, true] {
        let segmenter = Segmenter::with_options(&index, SearchOptions { memoize_failures });
        group.bench_with_input(
            BenchmarkId::new("decompose", memoize_failures),
            &word,
            |b, word| {
                b.iter(|| segmenter.can_decompose(black_box(word)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_index_build,
    bench_longest_compound,
    bench_memoization
);
criterion_main!(benches);
