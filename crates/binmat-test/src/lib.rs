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

//! Shared test fixtures, oracles and generators for binmat.
//!
//! # Quick Start
//!
//! ```rust
//! use binmat_core::distances;
//! use binmat_test::{fixtures, oracle, parse_grid};
//!
//! // Known distance answers
//! for case in fixtures::distance_cases() {
//!     assert_eq!(distances(&case.source).render(), case.expected);
//! }
//!
//! // Brute-force reference for any grid with a source cell
//! let grid = parse_grid(&["000", "001"]);
//! assert_eq!(oracle::brute_force_distances(&grid), distances(&grid));
//! ```

use binmat_core::{Binary, Grid};

pub mod fixtures;
pub mod generate;
pub mod oracle;

pub use generate::{random_grid, random_stream, seeded_rng};

/// Build a grid from compact `0`/`1` row strings.
///
/// # Panics
///
/// Panics on characters other than `0` and `1` or on ragged rows; fixtures
/// are expected to be well-formed.
pub fn parse_grid(rows: &[&str]) -> Grid<Binary> {
    let data = rows
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| Binary::try_from(c).expect("fixture cell must be 0 or 1"))
                .collect()
        })
        .collect();
    Grid::from_rows(data).expect("fixture grid must be rectangular and non-empty")
}

/// Number of `1` cells in a grid.
pub fn count_sources(grid: &Grid<Binary>) -> usize {
    grid.cells().iter().filter(|cell| cell.is_one()).count()
}
