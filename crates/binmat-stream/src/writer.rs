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

//! Writer for the matrix stream format.
//!
//! Produces text that [`MatrixReader`](crate::MatrixReader) accepts: the count,
//! then per matrix a dimensions line and one compact `0`/`1` line per row,
//! with a blank separator between matrices.

use binmat_core::{Binary, Grid};
use std::io::{self, Write};

/// Write `matrices` in stream format. Every line, including the last, ends
/// with `\n`.
///
/// An empty slice writes nothing: a stream must declare at least one matrix.
pub fn write_matrices<W: Write>(out: &mut W, matrices: &[Grid<Binary>]) -> io::Result<()> {
    if matrices.is_empty() {
        return Ok(());
    }

    writeln!(out, "{}", matrices.len())?;
    for (index, matrix) in matrices.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        write_matrix(out, matrix)?;
    }
    Ok(())
}

/// Write one matrix body: the dimensions line and one compact row per line.
///
/// The count line and separators are the caller's responsibility, which
/// lets large streams be produced one matrix at a time.
pub fn write_matrix<W: Write>(out: &mut W, matrix: &Grid<Binary>) -> io::Result<()> {
    writeln!(out, "{} {}", matrix.rows(), matrix.columns())?;

    let mut line = String::with_capacity(matrix.columns() + 1);
    for row in matrix.rows_iter() {
        line.clear();
        line.extend(row.iter().map(|cell| if cell.is_one() { '1' } else { '0' }));
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    Ok(())
}

/// [`write_matrices`] into a `String`.
pub fn to_stream_string(matrices: &[Grid<Binary>]) -> String {
    let mut buffer = Vec::new();
    // Writing to a Vec cannot fail.
    let _ = write_matrices(&mut buffer, matrices);
    String::from_utf8_lossy(&buffer).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::read_all;
    use crate::ReaderLimits;

    fn grid(rows: &[&str]) -> Grid<Binary> {
        let data = rows
            .iter()
            .map(|r| r.chars().map(|c| Binary::try_from(c).unwrap()).collect())
            .collect();
        Grid::from_rows(data).unwrap()
    }

    #[test]
    fn test_single_matrix() {
        let text = to_stream_string(&[grid(&["0001", "1100", "1010"])]);
        assert_eq!(text, "1\n3 4\n0001\n1100\n1010\n");
    }

    #[test]
    fn test_separator_between_matrices_only() {
        let text = to_stream_string(&[grid(&["10", "01"]), grid(&["1"])]);
        assert_eq!(text, "2\n2 2\n10\n01\n\n1 1\n1\n");
    }

    #[test]
    fn test_write_matrix_body_only() {
        let mut out = Vec::new();
        write_matrix(&mut out, &grid(&["10", "01"])).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2 2\n10\n01\n");
    }

    #[test]
    fn test_empty_writes_nothing() {
        assert_eq!(to_stream_string(&[]), "");
    }

    #[test]
    fn test_reader_accepts_output() {
        let matrices = vec![grid(&["011", "110"]), grid(&["0"]), grid(&["1", "0", "1"])];
        let text = to_stream_string(&matrices);
        assert_eq!(read_all(&text, ReaderLimits::unlimited()).unwrap(), matrices);
    }
}
