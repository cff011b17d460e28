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
use gic_cinema_core::seat::{RowLetter, SeatCoord, SeatIndex};
use gic_cinema_engine::alloc::{plan_center_first, plan_run_from};
use gic_cinema_engine::seatmap::SeatMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

fn coord(row: u8, seat: usize) -> SeatCoord {
    SeatCoord::new(RowLetter::new(row), SeatIndex::new(seat))
}

/// Occupies roughly `fill_permille`/1000 of the map at random.
fn scattered_map(rows: usize, seats_per_row: usize, fill_permille: u32, seed: u64) -> SeatMap {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut map = SeatMap::new(rows, seats_per_row);
    for row in 0..rows {
        for seat in 0..seats_per_row {
            if rng.random_range(0..1000) < fill_permille {
                map.set_occupied(coord(row as u8, seat)).expect("in bounds");
            }
        }
    }
    map
}

fn bench_center_first(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_center_first");
    for &fill in &[0u32, 300, 700] {
        let map = scattered_map(26, 50, fill, 42);
        let requested = map.count_available().min(40);
        group.throughput(Throughput::Elements(requested as u64));
        group.bench_with_input(BenchmarkId::from_parameter(fill), &map, |b, map| {
            b.iter(|| black_box(plan_center_first(black_box(map), requested)));
        });
    }
    group.finish();
}

fn bench_run_from(c: &mut Criterion) {
    let map = scattered_map(26, 50, 300, 7);
    c.bench_function("plan_run_from", |b| {
        b.iter(|| black_box(plan_run_from(black_box(&map), coord(12, 3), 10)));
    });
}

criterion_group!(benches, bench_center_first, bench_run_from);
criterion_main!(benches);
