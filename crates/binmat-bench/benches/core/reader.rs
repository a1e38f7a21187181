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

//! Stream reader benchmarks.

use binmat_bench::{sizes, stream_text};
use binmat_stream::{read_all, MatrixStream, ReaderLimits};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io::Cursor;

fn bench_read_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("reader_read_all");

    for count in sizes::STREAM_COUNTS {
        let text = stream_text(count, sizes::STREAM_SIDE);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &text, |b, text| {
            b.iter(|| read_all(black_box(text), ReaderLimits::unlimited()))
        });
    }

    group.finish();
}

fn bench_matrix_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("reader_stream");

    for count in sizes::STREAM_COUNTS {
        let text = stream_text(count, sizes::STREAM_SIDE);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &text, |b, text| {
            b.iter(|| {
                MatrixStream::new(Cursor::new(black_box(text.as_bytes())))
                    .filter_map(Result::ok)
                    .count()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_read_all, bench_matrix_stream);
criterion_main!(benches);
