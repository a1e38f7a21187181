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

//! Outcomes reported by the matrix reader.

use binmat_core::{Binary, Grid};
use std::sync::Arc;

use crate::error::ReaderError;

/// What happened after the reader consumed one line (or the end of input).
///
/// Completed grids are handed out as [`Arc`] handles to the reader's own
/// storage; no cell data is copied when a matrix is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The line was accepted; more input is needed.
    Continue,

    /// A matrix was completed and more are declared.
    MatrixCompleted(Arc<Grid<Binary>>),

    /// The last declared matrix was completed. Carries every matrix in input
    /// order; the final element is the one this line completed.
    Finished(Vec<Arc<Grid<Binary>>>),

    /// The input was rejected. The reader is now terminal.
    Failed(ReaderError),

    /// The reader was already terminal; the line was ignored.
    Closed,
}

impl ReadOutcome {
    /// The matrix completed by this step, if any.
    pub fn completed_matrix(&self) -> Option<&Grid<Binary>> {
        match self {
            Self::MatrixCompleted(grid) => Some(grid.as_ref()),
            Self::Finished(matrices) => matrices.last().map(Arc::as_ref),
            _ => None,
        }
    }

    /// The failure, if this step failed.
    pub fn error(&self) -> Option<&ReaderError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Whether the reader accepts no further input after this step.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished(_) | Self::Failed(_) | Self::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one() -> Arc<Grid<Binary>> {
        Arc::new(Grid::filled(1, 1, Binary::One).unwrap())
    }

    #[test]
    fn test_completed_matrix() {
        assert_eq!(ReadOutcome::Continue.completed_matrix(), None);
        assert_eq!(
            ReadOutcome::MatrixCompleted(one()).completed_matrix(),
            Some(one().as_ref())
        );

        let zero = Arc::new(Grid::filled(1, 1, Binary::Zero).unwrap());
        let finished = ReadOutcome::Finished(vec![zero, one()]);
        assert_eq!(finished.completed_matrix(), Some(one().as_ref()));
    }

    #[test]
    fn test_error() {
        let err = ReaderError::input_closed(2);
        assert_eq!(ReadOutcome::Failed(err.clone()).error(), Some(&err));
        assert_eq!(ReadOutcome::Closed.error(), None);
    }

    #[test]
    fn test_is_terminal() {
        assert!(!ReadOutcome::Continue.is_terminal());
        assert!(!ReadOutcome::MatrixCompleted(one()).is_terminal());
        assert!(ReadOutcome::Finished(vec![one()]).is_terminal());
        assert!(ReadOutcome::Failed(ReaderError::input_closed(0)).is_terminal());
        assert!(ReadOutcome::Closed.is_terminal());
    }
}
