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

//! Validate command - stream grammar and limit checking

use super::{open_input, source_name};
use crate::error::CliError;
use binmat_stream::{MatrixStream, ReaderLimits};
use colored::Colorize;

/// Check that `file` (or stdin) is a well-formed matrix stream.
///
/// Reads the whole stream without computing distances.
///
/// # Errors
///
/// Returns `Err` if the input cannot be read, violates the grammar or a
/// limit, or ends early.
///
/// # Output
///
/// Prints a summary to stdout:
/// - Validation status (✓ or ✗) and the input name
/// - Number of matrices read
/// - Dimensions of each matrix
pub fn validate(file: Option<&str>, limits: ReaderLimits) -> Result<(), CliError> {
    let name = source_name(file);
    let stream = MatrixStream::with_limits(open_input(file)?, limits);

    let mut dimensions = Vec::new();
    for matrix in stream {
        match matrix {
            Ok(matrix) => dimensions.push(matrix.dimensions()),
            Err(e) => {
                println!("{} {}", "✗".red().bold(), name);
                if !dimensions.is_empty() {
                    println!("  Matrices read before failure: {}", dimensions.len());
                }
                return Err(CliError::from_stream(name, e));
            }
        }
    }

    println!("{} {}", "✓".green().bold(), name);
    println!("  Matrices: {}", dimensions.len());
    for (index, (rows, columns)) in dimensions.iter().enumerate() {
        println!("  Matrix {}: {}x{}", index + 1, rows, columns);
    }
    Ok(())
}
