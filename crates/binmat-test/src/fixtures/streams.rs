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

//! Reader fixtures.

use binmat_stream::ReaderErrorCode;

/// A stream the reader must accept.
#[derive(Debug, Clone)]
pub struct ValidStream {
    pub name: &'static str,
    pub text: &'static str,
    /// Rendering of each matrix, in order.
    pub matrices: &'static [&'static str],
}

/// A stream the reader must reject.
#[derive(Debug, Clone)]
pub struct InvalidStream {
    pub name: &'static str,
    pub text: &'static str,
    pub code: ReaderErrorCode,
    /// 1-based line of the failure (lines read, for `InputClosed`).
    pub line: usize,
}

/// All valid stream fixtures.
pub fn valid_streams() -> Vec<ValidStream> {
    vec![
        ValidStream {
            name: "single",
            text: "1\n3 4\n0001\n1100\n1010\n",
            matrices: &["0 0 0 1\n1 1 0 0\n1 0 1 0"],
        },
        ValidStream {
            name: "multi_without_trailing_newline",
            text: "2\n3 4\n0001\n1100\n1010\n\n2 2\n10\n01",
            matrices: &["0 0 0 1\n1 1 0 0\n1 0 1 0", "1 0\n0 1"],
        },
        ValidStream {
            name: "crlf",
            text: "1\r\n2 2\r\n10\r\n01\r\n",
            matrices: &["1 0\n0 1"],
        },
        ValidStream {
            name: "single_cell",
            text: "1\n1 1\n0\n",
            matrices: &["0"],
        },
        ValidStream {
            name: "long_row_truncated",
            text: "1\n1 2\n0110\n",
            matrices: &["0 1"],
        },
        ValidStream {
            name: "separator_content_ignored",
            text: "2\n1 1\n1\nxyz\n1 1\n0\n",
            matrices: &["1", "0"],
        },
        ValidStream {
            name: "trailing_garbage_ignored",
            text: "1\n1 1\n1\nnot part of the stream\n",
            matrices: &["1"],
        },
        ValidStream {
            name: "count_with_spaces",
            text: " 1 \n1 3\n101\n",
            matrices: &["1 0 1"],
        },
    ]
}

/// All invalid stream fixtures.
pub fn invalid_streams() -> Vec<InvalidStream> {
    use ReaderErrorCode::*;

    let invalid = |name, text, code, line| InvalidStream { name, text, code, line };

    vec![
        invalid("count_negative", "-1\n", CountFormatInvalid, 1),
        invalid("count_letters", "abc\n", CountFormatInvalid, 1),
        invalid("count_zero", "0\n", CountFormatInvalid, 1),
        invalid("count_empty", "\n", CountFormatInvalid, 1),
        invalid("dimensions_negative_columns", "1\n1 -2\n", DimensionsFormatInvalid, 2),
        invalid("dimensions_negative_rows", "1\n-1 2\n", DimensionsFormatInvalid, 2),
        invalid("dimensions_letter_columns", "1\n2 abc\n", DimensionsFormatInvalid, 2),
        invalid("dimensions_letter_rows", "1\nabc 2\n", DimensionsFormatInvalid, 2),
        invalid("dimensions_zero_rows", "1\n0 2\n", DimensionsFormatInvalid, 2),
        invalid("dimensions_zero_columns", "1\n1 0\n", DimensionsFormatInvalid, 2),
        invalid("dimensions_single_token", "1\n11\n", DimensionsFormatInvalid, 2),
        invalid("dimensions_empty", "1\n\n", DimensionsFormatInvalid, 2),
        invalid("row_not_binary", "1\n1 2\n95\n", ColumnFormatInvalid, 3),
        invalid("row_letter", "1\n1 2\na0\n", ColumnFormatInvalid, 3),
        invalid("row_empty", "1\n1 2\n\n", RowFormatInvalid, 3),
        invalid("row_short", "1\n2 3\n010\n01\n", RowFormatInvalid, 4),
        invalid("empty_input", "", InputClosed, 0),
        invalid("closed_after_count", "1\n", InputClosed, 1),
        invalid("closed_mid_matrix", "1\n3 4\n0001\n", InputClosed, 3),
        invalid("closed_before_second", "2\n1 1\n1\n", InputClosed, 3),
    ]
}
