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

//! Generate command - random well-formed matrix streams

use super::stdout_error;
use crate::error::CliError;
use binmat_stream::write_random_stream;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::info;

/// Parameters of a generated stream.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    /// Number of matrices
    pub count: usize,
    /// Rows per matrix
    pub rows: usize,
    /// Columns per matrix
    pub columns: usize,
    /// Probability that a cell is `1`
    pub density: f64,
    /// RNG seed; entropy when absent
    pub seed: Option<u64>,
}

impl GenerateOptions {
    /// Check ranges: positive sizes, density within `[0, 1]`.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.count == 0 || self.rows == 0 || self.columns == 0 {
            return Err(CliError::invalid_argument(
                "count, rows and columns must be at least 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(CliError::invalid_argument(format!(
                "density must be within [0, 1], got {}",
                self.density
            )));
        }
        Ok(())
    }
}

/// Write a random stream to `output` (or stdout).
///
/// Matrices are generated and written one at a time, so the stream size is
/// not bounded by memory.
///
/// # Errors
///
/// Returns `Err` if an option is out of range or writing fails.
///
/// # Examples
///
/// ```no_run
/// use binmat_cli::commands::{generate, GenerateOptions};
///
/// # fn main() -> Result<(), binmat_cli::error::CliError> {
/// let options = GenerateOptions { count: 10, rows: 100, columns: 100, density: 0.1, seed: Some(42) };
/// generate(&options, Some("matrices.txt"))?;
/// # Ok(())
/// # }
/// ```
pub fn generate(options: &GenerateOptions, output: Option<&str>) -> Result<(), CliError> {
    options.validate()?;

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(
        count = options.count,
        rows = options.rows,
        columns = options.columns,
        density = options.density,
        "generating matrices"
    );

    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| CliError::io_error(path, e))?;
            let mut out = BufWriter::new(file);
            write_stream(&mut out, options, &mut rng)
                .and_then(|()| out.flush())
                .map_err(|e| CliError::io_error(path, e))
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write_stream(&mut out, options, &mut rng)
                .and_then(|()| out.flush())
                .map_err(stdout_error)
        }
    }
}

fn write_stream<W: Write, R: Rng>(
    out: &mut W,
    options: &GenerateOptions,
    rng: &mut R,
) -> io::Result<()> {
    write_random_stream(
        out,
        rng,
        options.count,
        options.rows,
        options.columns,
        options.density,
    )
}
