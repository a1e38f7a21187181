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

//! Property tests checking the engine against the brute-force oracle and the
//! reader against generated streams.

use binmat_core::{distances, Binary, Grid};
use binmat_stream::{read_all, to_stream_string, ReaderErrorCode, ReaderLimits};
use binmat_test::oracle::brute_force_distances;
use binmat_test::{count_sources, random_grid, seeded_rng};
use proptest::prelude::*;

fn binary_grid(max_side: usize) -> impl Strategy<Value = Grid<Binary>> {
    (1..=max_side, 1..=max_side).prop_flat_map(|(rows, columns)| {
        prop::collection::vec(prop::collection::vec(any::<bool>(), columns), rows).prop_map(
            |data| {
                let data = data
                    .into_iter()
                    .map(|row| row.into_iter().map(Binary::from).collect())
                    .collect();
                Grid::from_rows(data).unwrap()
            },
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_distances_match_oracle(grid in binary_grid(10)) {
        prop_assume!(count_sources(&grid) > 0);
        prop_assert_eq!(distances(&grid), brute_force_distances(&grid));
    }

    #[test]
    fn prop_sparse_grids_match_oracle(seed in any::<u64>(), rows in 1usize..20, columns in 1usize..20) {
        let grid = random_grid(&mut seeded_rng(seed), rows, columns, 0.05);
        prop_assert_eq!(distances(&grid), brute_force_distances(&grid));
    }

    #[test]
    fn prop_reader_accepts_written_streams(matrices in prop::collection::vec(binary_grid(6), 1..5)) {
        let text = to_stream_string(&matrices);
        let read = read_all(&text, ReaderLimits::unlimited()).unwrap();
        prop_assert_eq!(read, matrices);
    }

    #[test]
    fn prop_truncated_streams_close(matrices in prop::collection::vec(binary_grid(4), 1..4), cut in any::<prop::sample::Index>()) {
        let text = to_stream_string(&matrices);
        let lines: Vec<&str> = text.lines().collect();
        let keep = cut.index(lines.len());
        let truncated: String = lines[..keep].iter().map(|line| format!("{}\n", line)).collect();

        let err = read_all(&truncated, ReaderLimits::unlimited()).unwrap_err();
        prop_assert_eq!(err.code, ReaderErrorCode::InputClosed);
        prop_assert_eq!(err.line, keep);
    }
}
