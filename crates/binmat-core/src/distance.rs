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

//! Multi-source distance transform over binary grids.
//!
//! For every cell, [`distances`] computes the number of orthogonal steps to
//! the nearest cell holding [`Binary::One`]. It runs a single breadth-first
//! search seeded with every `One` cell at once and advances one frontier per
//! distance level, so each cell is enqueued at most once and the total work
//! is `O(rows × columns)`.
//!
//! ```rust
//! use binmat_core::{distances, Binary::{One as I, Zero as O}, Grid};
//!
//! let grid = Grid::from_rows(vec![
//!     vec![O, O, O, I],
//!     vec![O, O, I, I],
//!     vec![O, I, I, O],
//! ])
//! .unwrap();
//!
//! assert_eq!(distances(&grid).render(), "3 2 1 0\n2 1 0 0\n1 0 0 1");
//! ```
//!
//! # Grids without any `One`
//!
//! The result grid starts zero-filled and only frontier cells are written.
//! With no sources the search never runs, so the result is all zeros. A zero
//! in that output does not mean a source was found.

use crate::binary::Binary;
use crate::coordinate::{Coordinate, Direction};
use crate::grid::Grid;
use std::collections::VecDeque;

/// Distance of every cell to its nearest `One`, by 4-directional steps.
///
/// The input grid is never modified; visited marks go to a private copy.
/// The result always has the same dimensions as `source`.
pub fn distances(source: &Grid<Binary>) -> Grid<u32> {
    let mut visited = source.clone();
    let mut result = source.map(|_| 0u32);

    // Row-major seeding fixes the visit order; the distances do not depend on it.
    let mut queue: VecDeque<Coordinate> = source
        .coordinates()
        .filter(|&coordinate| source[coordinate].is_one())
        .collect();

    let mut current_distance = 0u32;

    while !queue.is_empty() {
        // Only the cells queued before this level started belong to it.
        let frontier = queue.len();

        for _ in 0..frontier {
            let Some(coordinate) = queue.pop_front() else {
                break;
            };

            result[coordinate] = current_distance;

            for direction in Direction::ALL {
                if let Some(neighbor) = visited.neighbor(direction, coordinate) {
                    if visited[neighbor].is_zero() {
                        visited[neighbor] = Binary::One;
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        current_distance += 1;
    }

    result
}
