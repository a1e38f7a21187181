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

//! Benchmark datasets for binmat.
//!
//! Every dataset is generated from a fixed seed so runs are comparable.

use binmat_core::{Binary, Grid};
use binmat_test::{random_grid, random_stream, seeded_rng};
use rayon::prelude::*;

/// Standard benchmark sizes.
pub mod sizes {
    /// Square grid sides for distance benchmarks.
    pub const GRID_SIDES: [usize; 3] = [10, 100, 1000];
    /// Matrix counts for reader benchmarks.
    pub const STREAM_COUNTS: [usize; 3] = [1, 10, 100];
    /// Side of each matrix in reader benchmarks.
    pub const STREAM_SIDE: usize = 100;
}

/// Fixed seed shared by all datasets.
pub const SEED: u64 = 0x5eed;

/// Cell density of benchmark grids.
pub const DENSITY: f64 = 0.1;

/// A square random grid.
pub fn square_grid(side: usize) -> Grid<Binary> {
    random_grid(&mut seeded_rng(SEED ^ side as u64), side, side, DENSITY)
}

/// A grid whose only source is the bottom-right corner: the longest frontier
/// walk for its size.
pub fn corner_grid(side: usize) -> Grid<Binary> {
    let mut grid = Grid::filled(side, side, Binary::Zero)
        .expect("benchmark grid side must be positive");
    grid[(side - 1, side - 1)] = Binary::One;
    grid
}

/// Stream text holding `count` square matrices of `side`.
pub fn stream_text(count: usize, side: usize) -> String {
    random_stream(&mut seeded_rng(SEED ^ count as u64), count, side, side, DENSITY)
}

/// Run the engine over many grids in parallel; the CLI's `--parallel` path.
pub fn distances_parallel(grids: &[Grid<Binary>]) -> Vec<Grid<u32>> {
    grids.par_iter().map(binmat_core::distances).collect()
}
