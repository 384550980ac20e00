// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seqcheck_core::palindrome::is_palindrome;
use seqcheck_core::quantifier::{all_of_if, one_of};
use std::hint::black_box;

const SIZES: [usize; 3] = [1_000, 100_000, 1_000_000];
const SEED: u64 = 0xC0FFEE;

/// Non-negative haystack; a negative needle forces a full scan.
fn haystack(rng: &mut StdRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(0..1_000_000)).collect()
}

fn mirrored(rng: &mut StdRng, half: usize) -> Vec<i64> {
    let mut front: Vec<i64> = (0..half).map(|_| rng.gen_range(0..1_000_000)).collect();
    let mut back: Vec<i64> = front.iter().rev().copied().collect();
    front.append(&mut back);
    front
}

fn bench_quantifiers(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut group = c.benchmark_group("quantifier");

    for size in SIZES {
        let data = haystack(&mut rng, size);
        group.throughput(Throughput::Elements(size as u64));

        // Worst case: needle absent, the whole sequence is scanned.
        group.bench_with_input(BenchmarkId::new("one_of/absent", size), &data, |b, data| {
            b.iter(|| one_of(black_box(data), black_box(&-1)))
        });

        group.bench_with_input(
            BenchmarkId::new("all_of_if/full_scan", size),
            &data,
            |b, data| b.iter(|| all_of_if(black_box(data), |&x| x >= 0)),
        );
    }

    group.finish();
}

fn bench_palindrome(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut group = c.benchmark_group("palindrome");

    for size in SIZES {
        let data = mirrored(&mut rng, size / 2);
        group.throughput(Throughput::Elements(data.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("is_palindrome/mirrored", size),
            &data,
            |b, data| b.iter(|| is_palindrome(black_box(data))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_quantifiers, bench_palindrome);
criterion_main!(benches);
