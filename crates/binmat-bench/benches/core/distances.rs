// Dweve binmat - Binary Matrix Distance Toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Distance engine benchmarks.

use binmat_bench::{corner_grid, distances_parallel, sizes, square_grid};
use binmat_core::distances;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_random_grids(c: &mut Criterion) {
    let mut group = c.benchmark_group("distances_random");

    for side in sizes::GRID_SIDES {
        let grid = square_grid(side);
        group.throughput(Throughput::Elements((side * side) as u64));
        if side >= 1000 {
            group.sample_size(10);
        }
        group.bench_with_input(BenchmarkId::from_parameter(side), &grid, |b, grid| {
            b.iter(|| distances(black_box(grid)))
        });
    }

    group.finish();
}

fn bench_single_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("distances_single_source");

    for side in sizes::GRID_SIDES {
        let grid = corner_grid(side);
        group.throughput(Throughput::Elements((side * side) as u64));
        if side >= 1000 {
            group.sample_size(10);
        }
        group.bench_with_input(BenchmarkId::from_parameter(side), &grid, |b, grid| {
            b.iter(|| distances(black_box(grid)))
        });
    }

    group.finish();
}

fn bench_parallel_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("distances_batch");
    let grids: Vec<_> = (0..64).map(|_| square_grid(100)).collect();
    group.throughput(Throughput::Elements(grids.len() as u64));

    group.bench_function("sequential", |b| {
        b.iter(|| {
            black_box(&grids)
                .iter()
                .map(distances)
                .collect::<Vec<_>>()
        })
    });
    group.bench_function("parallel", |b| b.iter(|| distances_parallel(black_box(&grids))));

    group.finish();
}

criterion_group!(benches, bench_random_grids, bench_single_source, bench_parallel_batch);
criterion_main!(benches);
