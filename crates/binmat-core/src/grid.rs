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

//! Dense, rectangular, row-major grid container.
//!
//! A [`Grid`] owns `rows × columns` cells in a single contiguous buffer. Its
//! shape is fixed at construction; cell values may be changed in place
//! afterwards.
//!
//! # Rendering
//!
//! The [`Display`](fmt::Display) implementation is the canonical text form:
//! cells within a row are joined by a single space, rows by `\n`, with no
//! trailing newline.
//!
//! ```rust
//! use binmat_core::{Binary, Grid};
//!
//! let grid = Grid::from_rows(vec![
//!     vec![Binary::Zero, Binary::One],
//!     vec![Binary::One, Binary::Zero],
//! ])
//! .unwrap();
//!
//! assert_eq!(grid.render(), "0 1\n1 0");
//! ```

use crate::coordinate::{Coordinate, Direction};
use crate::error::{GridError, GridResult};
use std::fmt;
use std::ops::{Index, IndexMut};

/// A dense two-dimensional grid of cells.
///
/// Invariants: `rows >= 1`, `columns >= 1`, and the buffer holds exactly
/// `rows * columns` cells in row-major order.
///
/// Indexing with a [`Coordinate`] or a `(row, column)` tuple panics when the
/// position is out of bounds; use [`Grid::get`] for a checked lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: usize,
    columns: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from row data.
    ///
    /// # Errors
    ///
    /// - [`GridError::EmptyGrid`] if there are no rows or the first row is empty.
    /// - [`GridError::RaggedRow`] if any row's length differs from the first.
    pub fn from_rows(data: Vec<Vec<T>>) -> GridResult<Self> {
        let rows = data.len();
        let columns = data.first().map(Vec::len).unwrap_or(0);
        if rows == 0 || columns == 0 {
            return Err(GridError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(rows * columns);
        for (row, values) in data.into_iter().enumerate() {
            if values.len() != columns {
                return Err(GridError::RaggedRow {
                    row,
                    expected: columns,
                    got: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The row-major cell buffer.
    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Whether `coordinate` lies inside the grid.
    #[inline]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.rows && coordinate.column < self.columns
    }

    /// Checked cell lookup.
    #[inline]
    pub fn get(&self, coordinate: Coordinate) -> Option<&T> {
        if self.contains(coordinate) {
            Some(&self.cells[self.offset(coordinate.row, coordinate.column)])
        } else {
            None
        }
    }

    /// Checked mutable cell lookup.
    #[inline]
    pub fn get_mut(&mut self, coordinate: Coordinate) -> Option<&mut T> {
        if self.contains(coordinate) {
            let offset = self.offset(coordinate.row, coordinate.column);
            Some(&mut self.cells[offset])
        } else {
            None
        }
    }

    /// Overwrite the cell at `coordinate`.
    ///
    /// # Panics
    ///
    /// Panics if `coordinate` is out of bounds.
    #[inline]
    pub fn set(&mut self, coordinate: Coordinate, value: T) {
        self[coordinate] = value;
    }

    /// The adjacent coordinate in `direction`, or `None` at that edge.
    pub fn neighbor(&self, direction: Direction, coordinate: Coordinate) -> Option<Coordinate> {
        let Coordinate { row, column } = coordinate;
        match direction {
            Direction::Left if column > 0 => Some(Coordinate::new(row, column - 1)),
            Direction::Right if column + 1 < self.columns => {
                Some(Coordinate::new(row, column + 1))
            }
            Direction::Top if row > 0 => Some(Coordinate::new(row - 1, column)),
            Direction::Bottom if row + 1 < self.rows => Some(Coordinate::new(row + 1, column)),
            _ => None,
        }
    }

    /// Left neighbor; `None` in column 0.
    #[inline]
    pub fn left(&self, coordinate: Coordinate) -> Option<Coordinate> {
        self.neighbor(Direction::Left, coordinate)
    }

    /// Right neighbor; `None` in the last column.
    #[inline]
    pub fn right(&self, coordinate: Coordinate) -> Option<Coordinate> {
        self.neighbor(Direction::Right, coordinate)
    }

    /// Top neighbor; `None` in row 0.
    #[inline]
    pub fn top(&self, coordinate: Coordinate) -> Option<Coordinate> {
        self.neighbor(Direction::Top, coordinate)
    }

    /// Bottom neighbor; `None` in the last row.
    #[inline]
    pub fn bottom(&self, coordinate: Coordinate) -> Option<Coordinate> {
        self.neighbor(Direction::Bottom, coordinate)
    }

    /// Existing neighbors of `coordinate`, in [`Direction::ALL`] order.
    pub fn neighbors(&self, coordinate: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.neighbor(direction, coordinate))
    }

    /// All coordinates in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let columns = self.columns;
        (0..self.rows)
            .flat_map(move |row| (0..columns).map(move |column| Coordinate::new(row, column)))
    }

    /// Row slices, top to bottom.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.columns)
    }

    /// Build a same-shaped grid by applying `f` to every cell.
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            rows: self.rows,
            columns: self.columns,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Consume the grid, returning its row data.
    pub fn into_rows(self) -> Vec<Vec<T>> {
        let columns = self.columns;
        let mut rows = Vec::with_capacity(self.rows);
        let mut cells = self.cells.into_iter();
        for _ in 0..self.rows {
            rows.push(cells.by_ref().take(columns).collect());
        }
        rows
    }

    #[inline]
    fn offset(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.rows && column < self.columns,
            "coordinate ({}, {}) out of bounds for {}x{} grid",
            row,
            column,
            self.rows,
            self.columns
        );
        row * self.columns + column
    }
}

impl<T: Clone> Grid<T> {
    /// A `rows × columns` grid with every cell set to `value`.
    ///
    /// # Errors
    ///
    /// - [`GridError::EmptyGrid`] if either dimension is zero.
    /// - [`GridError::TooLarge`] if `rows * columns` overflows `usize`.
    pub fn filled(rows: usize, columns: usize, value: T) -> GridResult<Self> {
        if rows == 0 || columns == 0 {
            return Err(GridError::EmptyGrid);
        }
        let cell_count = rows
            .checked_mul(columns)
            .ok_or(GridError::TooLarge { rows, columns })?;
        Ok(Self {
            rows,
            columns,
            cells: vec![value; cell_count],
        })
    }
}

impl<T: fmt::Display> Grid<T> {
    /// The canonical string rendering (see [`Display`](fmt::Display)).
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<T> Index<Coordinate> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, coordinate: Coordinate) -> &T {
        &self.cells[self.offset(coordinate.row, coordinate.column)]
    }
}

impl<T> IndexMut<Coordinate> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, coordinate: Coordinate) -> &mut T {
        let offset = self.offset(coordinate.row, coordinate.column);
        &mut self.cells[offset]
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, column): (usize, usize)) -> &T {
        &self.cells[self.offset(row, column)]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        let offset = self.offset(row, column);
        &mut self.cells[offset]
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows_iter().enumerate() {
            if r > 0 {
                f.write_str("\n")?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Grid<T> {
    type Error = GridError;

    fn try_from(data: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Grid::from_rows(data)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Grid<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.rows))?;
        for row in self.rows_iter() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Grid<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Grid::from_rows(rows).map_err(serde::de::Error::custom)
    }
}
