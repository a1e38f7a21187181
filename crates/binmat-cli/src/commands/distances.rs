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

//! Distances command - nearest-1 distance for every matrix of a stream

use super::{open_input, source_name, stdout_error};
use crate::error::CliError;
use binmat_core::Grid;
use binmat_stream::{MatrixStream, ReaderLimits};
use clap::ValueEnum;
use rayon::prelude::*;
use std::io::{self, BufWriter, Write};
use tracing::{debug, info};

/// How distance matrices are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Canonical rendering, matrices separated by a blank line
    #[default]
    Text,
    /// One JSON array of row arrays per line
    Json,
}

/// Compute the distance matrix of every matrix in `file` (or stdin).
///
/// In sequential mode each result is written and flushed as soon as its
/// matrix has been read. With `parallel`, matrices are read up to the end of
/// the stream (or the first error), computed with rayon, and written in input
/// order.
///
/// Results already written stay on stdout when the input later turns out to
/// be malformed.
///
/// # Errors
///
/// Returns `Err` if:
/// - The input cannot be opened or read
/// - The input violates the stream grammar or a configured limit
/// - The input ends before every declared matrix was read
/// - Writing to stdout fails
///
/// # Examples
///
/// ```no_run
/// use binmat_cli::commands::{distances, OutputFormat};
/// use binmat_stream::ReaderLimits;
///
/// # fn main() -> Result<(), binmat_cli::error::CliError> {
/// distances(Some("matrices.txt"), ReaderLimits::unlimited(), OutputFormat::Text, false)?;
/// # Ok(())
/// # }
/// ```
pub fn distances(
    file: Option<&str>,
    limits: ReaderLimits,
    format: OutputFormat,
    parallel: bool,
) -> Result<(), CliError> {
    let name = source_name(file);
    let stream = MatrixStream::with_limits(open_input(file)?, limits);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if parallel {
        return distances_parallel(name, stream, format, &mut out);
    }

    for (index, matrix) in stream.enumerate() {
        let matrix = matrix.map_err(|e| CliError::from_stream(name, e))?;
        debug!(index, rows = matrix.rows(), columns = matrix.columns(), "computing distances");

        let result = binmat_core::distances(&matrix);
        write_result(&mut out, index, &result, format)?;
        out.flush().map_err(stdout_error)?;
    }

    Ok(())
}

fn distances_parallel<R: io::Read, W: Write>(
    name: &str,
    stream: MatrixStream<R>,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    let mut matrices = Vec::new();
    let mut failure = None;
    for matrix in stream {
        match matrix {
            Ok(matrix) => matrices.push(matrix),
            Err(e) => {
                failure = Some(CliError::from_stream(name, e));
                break;
            }
        }
    }

    info!(matrices = matrices.len(), "computing distances in parallel");
    let results: Vec<Grid<u32>> = matrices
        .par_iter()
        .map(|matrix| binmat_core::distances(matrix))
        .collect();

    for (index, result) in results.iter().enumerate() {
        write_result(out, index, result, format)?;
    }
    out.flush().map_err(stdout_error)?;

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Write one result in `format`; `index` is its position in the output.
pub(crate) fn write_result<W: Write>(
    out: &mut W,
    index: usize,
    result: &Grid<u32>,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            if index > 0 {
                writeln!(out).map_err(stdout_error)?;
            }
            writeln!(out, "{}", result).map_err(stdout_error)
        }
        OutputFormat::Json => {
            let json = serde_json::to_string(result)?;
            writeln!(out, "{}", json).map_err(stdout_error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample() -> Grid<u32> {
        Grid::from_rows(vec![vec![3, 2, 1, 0], vec![2, 1, 0, 0], vec![1, 0, 0, 1]]).unwrap()
    }

    #[test]
    fn test_write_text_separates_with_blank_line() {
        let mut out = Vec::new();
        write_result(&mut out, 0, &sample(), OutputFormat::Text).unwrap();
        write_result(&mut out, 1, &sample(), OutputFormat::Text).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "3 2 1 0\n2 1 0 0\n1 0 0 1\n\n3 2 1 0\n2 1 0 0\n1 0 0 1\n"
        );
    }

    #[test]
    fn test_write_json_one_line_per_matrix() {
        let mut out = Vec::new();
        write_result(&mut out, 0, &sample(), OutputFormat::Json).unwrap();
        write_result(&mut out, 1, &sample(), OutputFormat::Json).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[[3,2,1,0],[2,1,0,0],[1,0,0,1]]\n[[3,2,1,0],[2,1,0,0],[1,0,0,1]]\n"
        );
    }

    #[test]
    fn test_parallel_keeps_input_order_and_partial_output() {
        let input = "3\n1 2\n01\n\n1 3\n100\n\n1 1\nx\n";
        let stream = MatrixStream::new(Cursor::new(input));
        let mut out = Vec::new();

        let err = distances_parallel("test", stream, OutputFormat::Text, &mut out).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
        assert_eq!(String::from_utf8(out).unwrap(), "1 0\n\n0 1 2\n");
    }
}
