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

//! Grid data model and distance transform for binary matrices.
//!
//! This crate holds the pieces shared by every other binmat crate:
//!
//! - [`Coordinate`] and [`Direction`]: positions and orthogonal adjacency
//! - [`Binary`]: a cell restricted to 0 or 1
//! - [`Grid`]: a dense, rectangular, row-major container with bounds-checked
//!   access, neighbor lookup, and a canonical text rendering
//! - [`distances`]: the multi-source breadth-first distance transform
//!
//! # Example
//!
//! ```rust
//! use binmat_core::{distances, Binary, Grid};
//!
//! let source: Grid<Binary> = Grid::from_rows(vec![
//!     vec![Binary::Zero, Binary::Zero],
//!     vec![Binary::Zero, Binary::One],
//! ])
//! .unwrap();
//!
//! let result = distances(&source);
//! assert_eq!(result.render(), "2 1\n1 0");
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Coordinate`], [`Binary`] and
//!   [`Grid`]. A grid serializes as an array of row arrays.

#![forbid(unsafe_code)]

mod binary;
mod coordinate;
mod distance;
mod error;
mod grid;

pub use binary::Binary;
pub use coordinate::{Coordinate, Direction};
pub use distance::distances;
pub use error::{GridError, GridResult};
pub use grid::Grid;
