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

//! Brute-force reference for the distance engine.

use binmat_core::{Binary, Coordinate, Grid};

/// Distance from every cell to its nearest `1` cell, computed by walking
/// every (cell, source) pair.
///
/// On a grid without obstacles the 4-neighbour step distance between two
/// cells is their Manhattan distance, so the nearest source is the one
/// minimizing `|dr| + |dc|`. Quadratic in the cell count; for small grids.
///
/// A grid without sources yields all zeros, matching the engine.
pub fn brute_force_distances(source: &Grid<Binary>) -> Grid<u32> {
    let sources: Vec<Coordinate> = source
        .coordinates()
        .filter(|&c| source[c].is_one())
        .collect();

    let mut result = source.map(|_| 0u32);
    for cell in source.coordinates() {
        let nearest = sources
            .iter()
            .map(|s| manhattan(cell, *s))
            .min()
            .unwrap_or(0);
        result[cell] = nearest;
    }
    result
}

fn manhattan(a: Coordinate, b: Coordinate) -> u32 {
    let steps = a.row.abs_diff(b.row) + a.column.abs_diff(b.column);
    u32::try_from(steps).unwrap_or(u32::MAX)
}
