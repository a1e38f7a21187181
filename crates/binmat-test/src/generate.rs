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

//! Seeded random grids and streams for tests and benchmarks.
//!
//! The generators themselves live in `binmat-stream` (feature `generate`);
//! this module pins them to reproducible seeds and panics on shapes a fixture
//! should never request.

use binmat_core::{Binary, Grid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic RNG for reproducible fixtures.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// [`binmat_stream::random_grid`] for fixtures.
///
/// # Panics
///
/// Panics if either dimension is zero.
pub fn random_grid<R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    columns: usize,
    density: f64,
) -> Grid<Binary> {
    binmat_stream::random_grid(rng, rows, columns, density)
        .expect("random grid dimensions must be positive")
}

/// [`binmat_stream::random_stream`] for fixtures.
///
/// # Panics
///
/// Panics if `count`, `rows` or `columns` is zero.
pub fn random_stream<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    rows: usize,
    columns: usize,
    density: f64,
) -> String {
    binmat_stream::random_stream(rng, count, rows, columns, density)
        .expect("random stream shape must be positive")
}
