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

//! Incremental matrix reader.
//!
//! [`MatrixReader`] consumes a stream of binary matrices one line at a time:
//!
//! ```text
//! <count>
//! <rows> <columns>
//! <row 0>
//! ...
//! <row rows-1>
//! <separator>          (only between matrices)
//! <rows> <columns>
//! ...
//! ```
//!
//! Each line moves the reader through a small state machine and yields a
//! [`ReadOutcome`]. The reader never looks ahead and never buffers more than
//! the rows of the matrix currently being read, so it can be driven by any
//! line source: a file, a socket, an async channel, or a test fixture.
//!
//! # Basic Usage
//!
//! ```rust
//! use binmat_stream::{MatrixReader, ReadOutcome, ReaderLimits};
//!
//! let mut reader = MatrixReader::new(ReaderLimits::unlimited());
//! let mut outcome = ReadOutcome::Continue;
//! for line in ["1", "3 4", "0001", "0011", "0110"] {
//!     outcome = reader.feed_line(line);
//! }
//!
//! let matrix = outcome.completed_matrix().unwrap();
//! assert_eq!(matrix.dimensions(), (3, 4));
//! assert!(reader.is_terminal());
//! ```
//!
//! # Errors
//!
//! The first violation is terminal: the reader reports it once as
//! [`ReadOutcome::Failed`] and answers every later line with
//! [`ReadOutcome::Closed`].
//!
//! ```rust
//! use binmat_stream::{MatrixReader, ReadOutcome, ReaderErrorCode, ReaderLimits};
//!
//! let mut reader = MatrixReader::new(ReaderLimits::unlimited());
//! reader.feed_line("1");
//! reader.feed_line("2 2");
//! reader.feed_line("01");
//!
//! let err = match reader.feed_line("a0") {
//!     ReadOutcome::Failed(err) => err,
//!     other => panic!("unexpected outcome: {:?}", other),
//! };
//! assert_eq!(err.code, ReaderErrorCode::ColumnFormatInvalid);
//! assert_eq!((err.line, err.row, err.column), (4, Some(1), Some(0)));
//!
//! assert_eq!(reader.feed_line("01"), ReadOutcome::Closed);
//! ```

use binmat_core::{Binary, Grid};
use std::fmt;
use std::mem;
use std::sync::Arc;
use tracing::debug;

use crate::error::{ReaderError, ReaderResult};
use crate::event::ReadOutcome;
use crate::limits::ReaderLimits;

/// Which line the reader expects next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReaderStageKind {
    /// The count line.
    AwaitingCount,
    /// A dimensions line.
    AwaitingDimensions,
    /// A row of the current matrix.
    AwaitingRow,
    /// The separator between two matrices.
    AwaitingSeparator,
    /// Every declared matrix was read.
    Done,
    /// The input was rejected.
    Failed,
}

impl ReaderStageKind {
    /// Whether the stage accepts no further input.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

impl fmt::Display for ReaderStageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AwaitingCount => "awaiting count",
            Self::AwaitingDimensions => "awaiting dimensions",
            Self::AwaitingRow => "awaiting row",
            Self::AwaitingSeparator => "awaiting separator",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Declared shape of the matrix being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Dimensions {
    rows: usize,
    columns: usize,
}

/// Reader stage together with the data only that stage needs.
///
/// `count` is the declared number of matrices and `index` the 0-based index of
/// the matrix being read (or, before a separator, of the next one).
#[derive(Debug, Default)]
enum Stage {
    #[default]
    AwaitingCount,
    AwaitingDimensions {
        count: usize,
        index: usize,
    },
    AwaitingRow {
        count: usize,
        index: usize,
        dimensions: Dimensions,
        rows: Vec<Vec<Binary>>,
    },
    AwaitingSeparator {
        count: usize,
        index: usize,
    },
    Done,
    Failed,
}

impl Stage {
    fn kind(&self) -> ReaderStageKind {
        match self {
            Self::AwaitingCount => ReaderStageKind::AwaitingCount,
            Self::AwaitingDimensions { .. } => ReaderStageKind::AwaitingDimensions,
            Self::AwaitingRow { .. } => ReaderStageKind::AwaitingRow,
            Self::AwaitingSeparator { .. } => ReaderStageKind::AwaitingSeparator,
            Self::Done => ReaderStageKind::Done,
            Self::Failed => ReaderStageKind::Failed,
        }
    }

    /// Consume one line. Returns the next stage and the matrix the line
    /// completed, if any. Never called on a terminal stage.
    fn consume(
        self,
        line: &str,
        line_number: usize,
        limits: &ReaderLimits,
    ) -> ReaderResult<(Stage, Option<Grid<Binary>>)> {
        match self {
            Stage::AwaitingCount => {
                let count = read_count(line, line_number, limits)?;
                Ok((Stage::AwaitingDimensions { count, index: 0 }, None))
            }
            Stage::AwaitingDimensions { count, index } => {
                let dimensions = read_dimensions(line, line_number, limits)?;
                let rows = Vec::new();
                Ok((Stage::AwaitingRow { count, index, dimensions, rows }, None))
            }
            Stage::AwaitingRow { count, index, dimensions, mut rows } => {
                let row = read_row(line, dimensions.columns, rows.len(), line_number)?;
                rows.push(row);

                if rows.len() < dimensions.rows {
                    return Ok((Stage::AwaitingRow { count, index, dimensions, rows }, None));
                }

                // Dimensions are positive and every row holds exactly
                // `columns` cells, so construction only fails on a broken
                // invariant.
                let grid = Grid::from_rows(rows).map_err(|e| {
                    ReaderError::row_format_invalid(e.to_string(), line_number)
                })?;
                debug!(
                    index,
                    rows = dimensions.rows,
                    columns = dimensions.columns,
                    "matrix completed"
                );

                let index = index + 1;
                let next = if index == count {
                    Stage::Done
                } else {
                    Stage::AwaitingSeparator { count, index }
                };
                Ok((next, Some(grid)))
            }
            // Separator content is not inspected.
            Stage::AwaitingSeparator { count, index } => {
                Ok((Stage::AwaitingDimensions { count, index }, None))
            }
            terminal @ (Stage::Done | Stage::Failed) => Ok((terminal, None)),
        }
    }
}

/// Everything the reader carries between lines.
///
/// Completed grids are stored once and shared with the outcomes that report
/// them.
#[derive(Debug, Default)]
struct ReaderState {
    stage: Stage,
    matrices: Vec<Arc<Grid<Binary>>>,
    lines: usize,
}

impl ReaderState {
    /// Pure transition: consume the old state and one line, produce the new
    /// state and the outcome to report.
    fn advance(mut self, line: &str, limits: &ReaderLimits) -> (ReaderState, ReadOutcome) {
        if self.stage.kind().is_terminal() {
            return (self, ReadOutcome::Closed);
        }

        self.lines += 1;
        let stage = mem::take(&mut self.stage);

        match stage.consume(line, self.lines, limits) {
            Ok((next, None)) => {
                self.stage = next;
                (self, ReadOutcome::Continue)
            }
            Ok((Stage::Done, Some(grid))) => {
                self.stage = Stage::Done;
                self.matrices.push(Arc::new(grid));
                debug!(
                    matrices = self.matrices.len(),
                    lines = self.lines,
                    "all declared matrices read"
                );
                let matrices = self.matrices.clone();
                (self, ReadOutcome::Finished(matrices))
            }
            Ok((next, Some(grid))) => {
                self.stage = next;
                let grid = Arc::new(grid);
                self.matrices.push(Arc::clone(&grid));
                (self, ReadOutcome::MatrixCompleted(grid))
            }
            Err(err) => {
                self.stage = Stage::Failed;
                debug!(code = %err.code, line = err.line, "matrix reader failed");
                (self, ReadOutcome::Failed(err))
            }
        }
    }

    /// Signal end of input.
    fn close(mut self) -> (ReaderState, ReadOutcome) {
        if self.stage.kind().is_terminal() {
            return (self, ReadOutcome::Closed);
        }

        let err = ReaderError::input_closed(self.lines);
        debug!(stage = %self.stage.kind(), lines = self.lines, "input closed before completion");
        self.stage = Stage::Failed;
        (self, ReadOutcome::Failed(err))
    }
}

/// Line-driven reader for binary matrix streams.
///
/// The reader is ready to accept the count line as soon as it is created.
/// Completed matrices are retained, in input order, for the whole life of the
/// reader and are available through [`MatrixReader::matrices`].
#[derive(Debug, Default)]
pub struct MatrixReader {
    limits: ReaderLimits,
    state: ReaderState,
}

impl MatrixReader {
    /// Create a reader enforcing `limits`.
    pub fn new(limits: ReaderLimits) -> Self {
        Self {
            limits,
            state: ReaderState::default(),
        }
    }

    /// The limits this reader enforces.
    #[inline]
    pub fn limits(&self) -> &ReaderLimits {
        &self.limits
    }

    /// Reset to a fresh reader: awaiting the count line, no matrices, no
    /// lines consumed. Limits are kept.
    pub fn start(&mut self) {
        self.state = ReaderState::default();
    }

    /// Consume one line, without its terminator.
    pub fn feed_line(&mut self, line: &str) -> ReadOutcome {
        let state = mem::take(&mut self.state);
        let (state, outcome) = state.advance(line, &self.limits);
        self.state = state;
        outcome
    }

    /// Signal that the input has ended.
    ///
    /// Returns [`ReadOutcome::Failed`] with `InputClosed` unless the reader is
    /// already terminal, in which case it returns [`ReadOutcome::Closed`].
    pub fn finish(&mut self) -> ReadOutcome {
        let state = mem::take(&mut self.state);
        let (state, outcome) = state.close();
        self.state = state;
        outcome
    }

    /// Matrices completed so far, in input order.
    ///
    /// These are the same allocations handed out in
    /// [`ReadOutcome::MatrixCompleted`] and [`ReadOutcome::Finished`].
    #[inline]
    pub fn matrices(&self) -> &[Arc<Grid<Binary>>] {
        &self.state.matrices
    }

    /// Consume the reader, returning the completed matrices.
    ///
    /// A grid is moved out when the reader holds its only handle and cloned
    /// otherwise.
    pub fn into_matrices(self) -> Vec<Grid<Binary>> {
        self.state
            .matrices
            .into_iter()
            .map(|grid| Arc::try_unwrap(grid).unwrap_or_else(|shared| Grid::clone(&shared)))
            .collect()
    }

    /// The stage the reader is in.
    #[inline]
    pub fn stage(&self) -> ReaderStageKind {
        self.state.stage.kind()
    }

    /// Whether the reader accepts no further input.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.stage().is_terminal()
    }

    /// Number of lines consumed since the last reset.
    #[inline]
    pub fn lines_consumed(&self) -> usize {
        self.state.lines
    }

    /// The declared matrix count, once the count line has been read.
    pub fn declared_count(&self) -> Option<usize> {
        match self.state.stage {
            Stage::AwaitingDimensions { count, .. }
            | Stage::AwaitingRow { count, .. }
            | Stage::AwaitingSeparator { count, .. } => Some(count),
            Stage::Done => Some(self.state.matrices.len()),
            Stage::AwaitingCount | Stage::Failed => None,
        }
    }
}

/// Read a whole in-memory input: feed every line, then signal end of input.
///
/// Lines after the last declared matrix are ignored.
///
/// # Examples
///
/// ```rust
/// use binmat_stream::{read_all, ReaderLimits};
///
/// let matrices = read_all("2\n1 2\n01\n\n1 1\n1\n", ReaderLimits::unlimited()).unwrap();
/// assert_eq!(matrices.len(), 2);
/// assert_eq!(matrices[1].render(), "1");
/// ```
pub fn read_all(input: &str, limits: ReaderLimits) -> ReaderResult<Vec<Grid<Binary>>> {
    let mut reader = MatrixReader::new(limits);
    for line in input.lines() {
        match reader.feed_line(line) {
            ReadOutcome::Failed(err) => return Err(err),
            ReadOutcome::Finished(_) => break,
            ReadOutcome::Continue | ReadOutcome::MatrixCompleted(_) | ReadOutcome::Closed => {}
        }
    }
    match reader.finish() {
        ReadOutcome::Failed(err) => Err(err),
        _ => Ok(reader.into_matrices()),
    }
}

/// Parse a strictly decimal positive integer. Signs, whitespace, zero and
/// values that overflow `usize` are rejected.
fn parse_positive(token: &str) -> Option<usize> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse::<usize>().ok().filter(|&value| value >= 1)
}

fn read_count(line: &str, line_number: usize, limits: &ReaderLimits) -> ReaderResult<usize> {
    let count = parse_positive(line.trim()).ok_or_else(|| {
        ReaderError::count_format_invalid(
            format!("count should be a positive integer, got: '{}'", line),
            line_number,
        )
    })?;

    if limits.count_exceeded(count) {
        return Err(ReaderError::count_exceeds_limit(
            format!("count {} exceeds limit of {}", count, describe(limits.max_count)),
            line_number,
        ));
    }

    Ok(count)
}

fn read_dimensions(
    line: &str,
    line_number: usize,
    limits: &ReaderLimits,
) -> ReaderResult<Dimensions> {
    let mut tokens = line.split(' ');
    let (Some(rows), Some(columns), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(ReaderError::dimensions_format_invalid(
            format!(
                "should have two dimensions separated by a single space, got: '{}'",
                line
            ),
            line_number,
        ));
    };

    let (Some(rows), Some(columns)) = (parse_positive(rows), parse_positive(columns)) else {
        return Err(ReaderError::dimensions_format_invalid(
            format!("dimensions should be positive integers, got: '{}'", line),
            line_number,
        ));
    };

    if limits.dimensions_exceeded(rows, columns) {
        return Err(ReaderError::dimensions_exceed_limit(
            format!(
                "matrix dimensions ({}, {}) exceed limit of ({}, {})",
                rows,
                columns,
                describe(limits.max_rows),
                describe(limits.max_columns)
            ),
            line_number,
        ));
    }

    Ok(Dimensions { rows, columns })
}

fn read_row(
    line: &str,
    columns: usize,
    row_index: usize,
    line_number: usize,
) -> ReaderResult<Vec<Binary>> {
    let available = line.chars().take(columns).count();
    if available < columns {
        return Err(ReaderError::row_format_invalid(
            format!("should have {} columns, got {}", columns, available),
            line_number,
        )
        .with_row(row_index));
    }

    let mut row = Vec::with_capacity(columns);
    for (column, ch) in line.chars().take(columns).enumerate() {
        let cell = Binary::try_from(ch).map_err(|_| {
            ReaderError::column_format_invalid(
                format!(
                    "column {} of row {} should be 0 or 1, got '{}'",
                    column, row_index, ch
                ),
                line_number,
            )
            .with_row(row_index)
            .with_column(column)
        })?;
        row.push(cell);
    }

    if line.chars().nth(columns).is_some() {
        debug!(line = line_number, columns, "row longer than declared, extra characters ignored");
    }

    Ok(row)
}

fn describe(limit: Option<usize>) -> String {
    limit.map_or_else(|| "unlimited".to_string(), |max| max.to_string())
}
