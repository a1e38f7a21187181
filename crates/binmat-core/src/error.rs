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

//! Error types for grid construction and cell conversion.

use thiserror::Error;

/// Errors raised while building a [`Grid`](crate::Grid) or converting cells.
///
/// Out-of-bounds cell access is not represented here: it is a programming
/// error and panics, the same as slice indexing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The row data had no rows, or its first row had no columns.
    #[error("grid data is empty")]
    EmptyGrid,

    /// A row's length differs from the first row's.
    #[error("row {row} has {got} columns, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Column count established by the first row.
        expected: usize,
        /// Column count of the offending row.
        got: usize,
    },

    /// The cell count `rows × columns` does not fit in `usize`.
    #[error("grid of {rows}x{columns} cells is too large")]
    TooLarge {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        columns: usize,
    },

    /// A value outside `{0, 1}` was offered as a binary cell.
    #[error("expected 0 or 1, got {value}")]
    InvalidBinary {
        /// The rejected value, as written.
        value: String,
    },
}

impl GridError {
    /// Create an invalid-binary error from anything printable.
    pub fn invalid_binary(value: impl ToString) -> Self {
        Self::InvalidBinary {
            value: value.to_string(),
        }
    }
}

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;
