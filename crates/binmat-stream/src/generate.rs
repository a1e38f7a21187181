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

//! Random well-formed matrices and streams.
//!
//! Backs `binmat generate` and the seeded datasets used by tests and
//! benchmarks. Streams are written one matrix at a time, so their size is not
//! bounded by memory.
//!
//! # Examples
//!
//! ```rust
//! use binmat_stream::{random_stream, read_all, ReaderLimits};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let text = random_stream(&mut rng, 3, 4, 5, 0.2).unwrap();
//!
//! let matrices = read_all(&text, ReaderLimits::unlimited()).unwrap();
//! assert_eq!(matrices.len(), 3);
//! assert!(matrices.iter().all(|m| m.dimensions() == (4, 5)));
//! ```

use binmat_core::{Binary, Grid, GridResult};
use rand::Rng;
use std::io::{self, Write};

use crate::writer::write_matrix;

/// A `rows` x `columns` grid where each cell is `1` with probability
/// `density`, clamped to `[0, 1]`. A NaN density yields an all-zero grid.
///
/// # Errors
///
/// [`GridError::EmptyGrid`](binmat_core::GridError::EmptyGrid) if either
/// dimension is zero.
pub fn random_grid<R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    columns: usize,
    density: f64,
) -> GridResult<Grid<Binary>> {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let data = (0..rows)
        .map(|_| {
            (0..columns)
                .map(|_| Binary::from(rng.gen_bool(density)))
                .collect()
        })
        .collect();
    Grid::from_rows(data)
}

/// Write a stream of `count` random matrices of the given shape.
///
/// # Errors
///
/// `InvalidInput` if `count`, `rows` or `columns` is zero; otherwise any
/// error from `out`.
pub fn write_random_stream<W: Write, R: Rng + ?Sized>(
    out: &mut W,
    rng: &mut R,
    count: usize,
    rows: usize,
    columns: usize,
    density: f64,
) -> io::Result<()> {
    if count == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "a stream declares at least one matrix",
        ));
    }

    writeln!(out, "{}", count)?;
    for index in 0..count {
        if index > 0 {
            writeln!(out)?;
        }
        let matrix = random_grid(rng, rows, columns, density)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        write_matrix(out, &matrix)?;
    }
    Ok(())
}

/// [`write_random_stream`] into a `String`.
pub fn random_stream<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    rows: usize,
    columns: usize,
    density: f64,
) -> io::Result<String> {
    let mut buffer = Vec::new();
    write_random_stream(&mut buffer, rng, count, rows, columns, density)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
