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

//! Resource limits for the matrix reader.

/// Optional upper bounds enforced while reading.
///
/// Each bound is checked as soon as the line that declares the value has been
/// read, so an oversized input is rejected before any of its rows are held in
/// memory. A `None` bound is not enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderLimits {
    /// Maximum number of matrices a stream may declare.
    pub max_count: Option<usize>,
    /// Maximum number of rows per matrix.
    pub max_rows: Option<usize>,
    /// Maximum number of columns per matrix.
    pub max_columns: Option<usize>,
}

impl ReaderLimits {
    /// Create limits with no restrictions.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Bound the declared matrix count.
    pub fn with_max_count(mut self, max: usize) -> Self {
        self.max_count = Some(max);
        self
    }

    /// Bound the declared row count of each matrix.
    pub fn with_max_rows(mut self, max: usize) -> Self {
        self.max_rows = Some(max);
        self
    }

    /// Bound the declared column count of each matrix.
    pub fn with_max_columns(mut self, max: usize) -> Self {
        self.max_columns = Some(max);
        self
    }

    /// Whether no bound is set.
    pub fn is_unlimited(&self) -> bool {
        self.max_count.is_none() && self.max_rows.is_none() && self.max_columns.is_none()
    }

    /// Whether `count` is above the count bound.
    #[inline]
    pub fn count_exceeded(&self, count: usize) -> bool {
        self.max_count.map_or(false, |max| count > max)
    }

    /// Whether either dimension is above its bound.
    #[inline]
    pub fn dimensions_exceeded(&self, rows: usize, columns: usize) -> bool {
        self.max_rows.map_or(false, |max| rows > max)
            || self.max_columns.map_or(false, |max| columns > max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Default limits tests ====================

    #[test]
    fn test_default_is_unlimited() {
        let limits = ReaderLimits::default();
        assert!(limits.is_unlimited());
        assert_eq!(limits, ReaderLimits::unlimited());
    }

    #[test]
    fn test_unlimited_never_exceeded() {
        let limits = ReaderLimits::unlimited();
        assert!(!limits.count_exceeded(usize::MAX));
        assert!(!limits.dimensions_exceeded(usize::MAX, usize::MAX));
    }

    // ==================== Builder tests ====================

    #[test]
    fn test_builders() {
        let limits = ReaderLimits::unlimited()
            .with_max_count(1000)
            .with_max_rows(10)
            .with_max_columns(20);
        assert_eq!(limits.max_count, Some(1000));
        assert_eq!(limits.max_rows, Some(10));
        assert_eq!(limits.max_columns, Some(20));
        assert!(!limits.is_unlimited());
    }

    #[test]
    fn test_single_bound_is_not_unlimited() {
        assert!(!ReaderLimits::unlimited().with_max_rows(1).is_unlimited());
    }

    // ==================== Check tests ====================

    #[test]
    fn test_count_bound_is_inclusive() {
        let limits = ReaderLimits::unlimited().with_max_count(1000);
        assert!(!limits.count_exceeded(1000));
        assert!(limits.count_exceeded(1001));
    }

    #[test]
    fn test_dimension_bounds_are_independent() {
        let limits = ReaderLimits::unlimited().with_max_rows(10).with_max_columns(10);
        assert!(!limits.dimensions_exceeded(10, 10));
        assert!(limits.dimensions_exceeded(11, 1));
        assert!(limits.dimensions_exceeded(1, 11));
    }

    #[test]
    fn test_zero_bound_rejects_everything() {
        let limits = ReaderLimits::unlimited().with_max_count(0);
        assert!(limits.count_exceeded(1));
    }
}
