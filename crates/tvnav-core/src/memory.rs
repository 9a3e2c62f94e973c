#![forbid(unsafe_code)]

//! Per-row "last focused column" memory.
//!
//! Moving vertically into a row restores the column the user last had in
//! that row instead of keeping the current column. Each row's horizontal
//! position is therefore independent of every other row's.
//!
//! A row that has never held focus has no remembered column yet. It reads
//! as column 0, and the navigation engine enters it at the column focus is
//! leaving, the way a remote's focus engine moves straight down.

use crate::grid::GridModel;

/// Remembered column for each row.
///
/// Stored values may go stale when the grid shrinks; every read clamps
/// against the grid it is given, so callers never observe an out-of-range
/// column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionMemory {
    columns: Vec<Option<usize>>,
}

impl SelectionMemory {
    /// Memory for `row_count` rows, none of them visited.
    #[must_use]
    pub fn new(row_count: usize) -> Self {
        Self {
            columns: vec![None; row_count],
        }
    }

    /// Memory sized for `grid`.
    #[must_use]
    pub fn for_grid(grid: &GridModel) -> Self {
        Self::new(grid.row_count())
    }

    /// Remembered column for `row`, clamped into the row. Rows that never
    /// held focus read as 0.
    #[must_use]
    pub fn remembered(&self, row: usize, grid: &GridModel) -> usize {
        self.recall(row, grid).unwrap_or(0)
    }

    /// Remembered column for `row`, or `None` if the row never held focus.
    #[must_use]
    pub fn recall(&self, row: usize, grid: &GridModel) -> Option<usize> {
        let stored = self.columns.get(row).copied().flatten()?;
        Some(grid.clamp_column(row, stored))
    }

    /// Record `column` as the last focused column of `row`.
    ///
    /// The column is clamped into the row. Rows outside the grid are ignored.
    pub fn remember(&mut self, row: usize, column: usize, grid: &GridModel) {
        if row >= grid.row_count() {
            return;
        }
        if self.columns.len() < grid.row_count() {
            self.columns.resize(grid.row_count(), None);
        }
        self.columns[row] = Some(grid.clamp_column(row, column));
    }

    /// Bring the stored columns in line with a new grid shape.
    pub fn reconcile(&mut self, grid: &GridModel) {
        self.columns.resize(grid.row_count(), None);
        for (row, slot) in self.columns.iter_mut().enumerate() {
            if let Some(column) = slot {
                *column = grid.clamp_column(row, *column);
            }
        }
    }

    /// Forget every row's position.
    pub fn reset(&mut self) {
        self.columns.fill(None);
    }

    /// Remembered column of every row of `grid`, top to bottom, each
    /// clamped into its row. Unvisited rows read as 0.
    #[must_use]
    pub fn columns(&self, grid: &GridModel) -> Vec<usize> {
        (0..grid.row_count())
            .map(|row| self.remembered(row, grid))
            .collect()
    }
}
