#![forbid(unsafe_code)]

//! Shape of the navigable surface.
//!
//! A dashboard is a stack of horizontal rows of media tiles with a single
//! search field sitting above row 0. [`GridModel`] describes how many rows
//! there are and how many tiles each row holds; [`Cell`] names one focusable
//! unit on that surface.
//!
//! The model is immutable once built. When the backing item list changes the
//! host builds a new model and hands it to the runtime, which re-clamps any
//! state that referenced the old shape.

use std::fmt;

/// A focusable unit: the search field or one tile in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// The search field above the first row.
    Search,
    /// Tile `column` of row `row`.
    Row {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index within the row.
        column: usize,
    },
}

impl Cell {
    /// Shorthand for [`Cell::Row`].
    #[inline]
    #[must_use]
    pub const fn at(row: usize, column: usize) -> Self {
        Self::Row { row, column }
    }

    /// Row index, or `None` for the search field.
    #[inline]
    #[must_use]
    pub const fn row(self) -> Option<usize> {
        match self {
            Self::Search => None,
            Self::Row { row, .. } => Some(row),
        }
    }

    /// Column index, or `None` for the search field.
    #[inline]
    #[must_use]
    pub const fn column(self) -> Option<usize> {
        match self {
            Self::Search => None,
            Self::Row { column, .. } => Some(column),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search => f.write_str("search"),
            Self::Row { row, column } => write!(f, "row{row}-{column}"),
        }
    }
}

/// Rows × items-per-row description of a screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridModel {
    row_lengths: Vec<usize>,
}

impl GridModel {
    /// Number of rows the dashboard shows over its shared item list.
    pub const DEFAULT_ROWS: usize = 3;

    /// Every row backed by the same list of `item_count` items.
    #[must_use]
    pub fn uniform(row_count: usize, item_count: usize) -> Self {
        Self {
            row_lengths: vec![item_count; row_count],
        }
    }

    /// Rows with independently sized item lists.
    #[must_use]
    pub fn from_row_lengths(row_lengths: Vec<usize>) -> Self {
        Self { row_lengths }
    }

    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_lengths.len()
    }

    /// Items in `row`; 0 for rows outside the grid.
    #[inline]
    #[must_use]
    pub fn item_count(&self, row: usize) -> usize {
        self.row_lengths.get(row).copied().unwrap_or(0)
    }

    /// Per-row item counts, top to bottom.
    #[must_use]
    pub fn row_lengths(&self) -> &[usize] {
        &self.row_lengths
    }

    /// True when no row holds a tile.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_lengths.iter().all(|&len| len == 0)
    }

    /// Whether `cell` addresses a real tile (or the search field).
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        match cell {
            Cell::Search => true,
            Cell::Row { row, column } => column < self.item_count(row),
        }
    }

    /// Last valid column of `row`, or `None` when the row has no tiles.
    #[inline]
    #[must_use]
    pub fn last_column(&self, row: usize) -> Option<usize> {
        self.item_count(row).checked_sub(1)
    }

    /// Clamp `column` into `row`'s valid range. Empty rows clamp to 0.
    #[inline]
    #[must_use]
    pub fn clamp_column(&self, row: usize, column: usize) -> usize {
        self.last_column(row).map_or(0, |last| column.min(last))
    }

    /// Nearest valid cell to `cell`.
    ///
    /// Rows past the bottom clamp to the last row; columns clamp into the
    /// row. When the clamped row is empty the nearest non-empty row above it
    /// is used, then the nearest below. Returns `None` only when the grid has
    /// no tiles at all and `cell` is a row cell.
    #[must_use]
    pub fn clamp(&self, cell: Cell) -> Option<Cell> {
        let Cell::Row { row, column } = cell else {
            return Some(Cell::Search);
        };
        let last_row = self.row_count().checked_sub(1)?;
        let row = row.min(last_row);
        let target = (0..=row)
            .rev()
            .chain(row + 1..self.row_count())
            .find(|&r| self.item_count(r) > 0)?;
        Some(Cell::at(target, self.clamp_column(target, column)))
    }

    /// Topmost row holding at least one tile.
    #[must_use]
    pub fn first_filled_row(&self) -> Option<usize> {
        self.row_lengths.iter().position(|&len| len > 0)
    }

    /// Nearest row below `row` holding at least one tile.
    #[must_use]
    pub fn filled_row_below(&self, row: usize) -> Option<usize> {
        (row.saturating_add(1)..self.row_count()).find(|&r| self.item_count(r) > 0)
    }

    /// Nearest row above `row` holding at least one tile.
    #[must_use]
    pub fn filled_row_above(&self, row: usize) -> Option<usize> {
        (0..row.min(self.row_count()))
            .rev()
            .find(|&r| self.item_count(r) > 0)
    }

    /// Initial focus target: the first tile of the topmost non-empty row,
    /// or the search field when the grid has no tiles.
    #[must_use]
    pub fn first_cell(&self) -> Cell {
        self.first_filled_row()
            .map_or(Cell::Search, |row| Cell::at(row, 0))
    }
}
