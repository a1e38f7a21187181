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

//! Distance engine fixtures.

use binmat_core::{Binary, Grid};

use crate::parse_grid;

/// A source grid and the rendering its distance grid must have.
#[derive(Debug, Clone)]
pub struct DistanceCase {
    pub name: &'static str,
    pub source: Grid<Binary>,
    pub expected: &'static str,
}

fn case(name: &'static str, rows: &[&str], expected: &'static str) -> DistanceCase {
    DistanceCase {
        name,
        source: parse_grid(rows),
        expected,
    }
}

/// All distance fixtures.
pub fn distance_cases() -> Vec<DistanceCase> {
    vec![
        case("sample", &["0001", "0011", "0110"], "3 2 1 0\n2 1 0 0\n1 0 0 1"),
        case("single_zero", &["0"], "0"),
        case("single_one", &["1"], "0"),
        case("small", &["01", "10"], "1 0\n0 1"),
        case("only_ones", &["111", "111", "111"], "0 0 0\n0 0 0\n0 0 0"),
        case(
            "alternating_lines",
            &["111", "000", "111", "000"],
            "0 0 0\n1 1 1\n0 0 0\n1 1 1",
        ),
        case(
            "two_bottom_one_lines",
            &["000", "111", "111"],
            "1 1 1\n0 0 0\n0 0 0",
        ),
        case(
            "zero_lines_over_one_lines",
            &["000", "000", "111", "111"],
            "2 2 2\n1 1 1\n0 0 0\n0 0 0",
        ),
        case("one_corner", &["000", "000", "001"], "4 3 2\n3 2 1\n2 1 0"),
        case("one_line", &["00000001"], "7 6 5 4 3 2 1 0"),
        case("one_column", &["0", "0", "1", "0"], "2\n1\n0\n1"),
        case("no_sources", &["000", "000"], "0 0 0\n0 0 0"),
        case(
            "two_sources",
            &["10000", "00000", "00001"],
            "0 1 2 3 2\n1 2 3 2 1\n2 3 2 1 0",
        ),
    ]
}
