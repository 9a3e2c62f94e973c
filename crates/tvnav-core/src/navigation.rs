#![forbid(unsafe_code)]

//! Directional focus navigation.
//!
//! [`transition`] is the whole state machine. States are the search field
//! plus every tile of the grid; inputs are the four remote-control
//! directions.
//!
//! # Rules
//!
//! | From          | Input   | To                                        |
//! |---------------|---------|-------------------------------------------|
//! | `Row(r, c)`   | Right   | `Row(r, min(c + 1, last))`                 |
//! | `Row(r, c)`   | Left    | `Row(r, max(c - 1, 0))`                    |
//! | `Row(r, c)`   | Down    | `Row(r + 1, memory[r + 1])`, or stay      |
//! | `Row(0, c)`   | Up      | `Search`                                   |
//! | `Row(r, c)`   | Up      | `Row(r - 1, memory[r - 1])`                |
//! | `Search`      | Down    | `Row(0, memory[0])`                        |
//! | `Search`      | other   | `Search`                                   |
//!
//! Edges clamp and never wrap. Landing on a row cell writes its column into
//! the selection memory, so vertical moves come back to where the user left
//! each row. A row that never held focus has no memory yet; a vertical move
//! enters it at column `c` (clamped to its length).
//!
//! A current cell that no longer fits the grid (the item list shrank) is
//! clamped to the nearest valid cell before the move is applied. Rows with
//! no tiles cannot take focus and vertical moves pass over them: Down lands
//! on the next non-empty row below (staying put on the bottom one), Up on
//! the next non-empty row above (or `Search` past the top), and Down from
//! `Search` on the topmost non-empty row.

use std::fmt;

use crate::grid::{Cell, GridModel};
#[cfg(feature = "tracing")]
use crate::logging::NAV_TARGET;
use crate::memory::SelectionMemory;

/// Cardinal remote-control direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in remote-pad order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    #[inline]
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one focus change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Focus before the change; `None` for the very first assignment.
    pub previous: Option<Cell>,
    /// Focus after the change.
    pub next: Cell,
}

impl Transition {
    #[must_use]
    pub const fn new(previous: Option<Cell>, next: Cell) -> Self {
        Self { previous, next }
    }

    /// Whether focus actually moved.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.previous != Some(self.next)
    }
}

/// Apply `direction` to `current`.
///
/// Returns `None` when `current` is `None`: input before initial focus is
/// dropped. Otherwise returns the transition (which may leave focus in
/// place at an edge) and records the landing column in `memory`.
pub fn transition(
    current: Option<Cell>,
    direction: Direction,
    grid: &GridModel,
    memory: &mut SelectionMemory,
) -> Option<Transition> {
    let Some(current) = current else {
        crate::trace!(target: NAV_TARGET, %direction, "input before initial focus dropped");
        return None;
    };

    let from = grid.clamp(current).unwrap_or(Cell::Search);
    if from != current {
        crate::debug!(
            target: NAV_TARGET,
            %current,
            clamped = %from,
            "focus outside grid, clamped"
        );
    }

    let next = match from {
        Cell::Search => from_search(direction, grid, memory),
        Cell::Row { row, column } => from_row(row, column, direction, grid, memory),
    };

    if let Cell::Row { row, column } = next {
        memory.remember(row, column, grid);
    }

    crate::trace!(target: NAV_TARGET, %direction, from = %current, to = %next, "transition");
    Some(Transition::new(Some(current), next))
}

fn from_search(direction: Direction, grid: &GridModel, memory: &SelectionMemory) -> Cell {
    match (direction, grid.first_filled_row()) {
        (Direction::Down, Some(row)) => Cell::at(row, memory.remembered(row, grid)),
        _ => Cell::Search,
    }
}

fn from_row(
    row: usize,
    column: usize,
    direction: Direction,
    grid: &GridModel,
    memory: &SelectionMemory,
) -> Cell {
    match direction {
        Direction::Right => Cell::at(row, grid.clamp_column(row, column.saturating_add(1))),
        Direction::Left => Cell::at(row, column.saturating_sub(1)),
        Direction::Down => grid
            .filled_row_below(row)
            .map_or(Cell::at(row, column), |target| enter_row(target, column, grid, memory)),
        Direction::Up => grid
            .filled_row_above(row)
            .map_or(Cell::Search, |target| enter_row(target, column, grid, memory)),
    }
}

/// Vertical landing on the non-empty row `target`, leaving `column`.
///
/// Restores the target's remembered column; an unvisited row is entered
/// straight down (or up) from `column`.
fn enter_row(target: usize, column: usize, grid: &GridModel, memory: &SelectionMemory) -> Cell {
    let landing = memory
        .recall(target, grid)
        .unwrap_or_else(|| grid.clamp_column(target, column));
    Cell::at(target, landing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (GridModel, SelectionMemory) {
        let grid = GridModel::uniform(3, 5);
        let memory = SelectionMemory::for_grid(&grid);
        (grid, memory)
    }

    fn step(
        current: Cell,
        direction: Direction,
        grid: &GridModel,
        memory: &mut SelectionMemory,
    ) -> Cell {
        transition(Some(current), direction, grid, memory)
            .expect("focused input always transitions")
            .next
    }

    #[test]
    fn uninitialized_focus_ignores_input() {
        let (grid, mut memory) = setup();
        for direction in Direction::ALL {
            assert_eq!(transition(None, direction, &grid, &mut memory), None);
        }
        assert_eq!(memory.columns(&grid), &[0, 0, 0]);
    }

    #[test]
    fn horizontal_moves_clamp_at_edges() {
        let (grid, mut memory) = setup();
        assert_eq!(step(Cell::at(1, 0), Direction::Left, &grid, &mut memory), Cell::at(1, 0));
        assert_eq!(step(Cell::at(1, 4), Direction::Right, &grid, &mut memory), Cell::at(1, 4));
        assert_eq!(step(Cell::at(1, 2), Direction::Right, &grid, &mut memory), Cell::at(1, 3));
        assert_eq!(step(Cell::at(1, 2), Direction::Left, &grid, &mut memory), Cell::at(1, 1));
    }

    #[test]
    fn horizontal_moves_are_remembered() {
        let (grid, mut memory) = setup();
        step(Cell::at(0, 2), Direction::Right, &grid, &mut memory);
        assert_eq!(memory.remembered(0, &grid), 3);
    }

    #[test]
    fn up_from_first_row_goes_to_search() {
        let (grid, mut memory) = setup();
        for column in 0..5 {
            assert_eq!(
                step(Cell::at(0, column), Direction::Up, &grid, &mut memory),
                Cell::Search
            );
        }
    }

    #[test]
    fn search_does_not_touch_memory() {
        let (grid, mut memory) = setup();
        memory.remember(0, 4, &grid);
        step(Cell::at(0, 4), Direction::Up, &grid, &mut memory);
        assert_eq!(memory.columns(&grid), &[4, 0, 0]);
    }

    #[test]
    fn search_only_moves_down() {
        let (grid, mut memory) = setup();
        for direction in [Direction::Up, Direction::Left, Direction::Right] {
            assert_eq!(step(Cell::Search, direction, &grid, &mut memory), Cell::Search);
        }
        assert_eq!(step(Cell::Search, Direction::Down, &grid, &mut memory), Cell::at(0, 0));
    }

    #[test]
    fn down_from_search_restores_row_zero_memory() {
        let (grid, mut memory) = setup();
        let cell = step(Cell::at(0, 1), Direction::Right, &grid, &mut memory);
        assert_eq!(cell, Cell::at(0, 2));
        let cell = step(cell, Direction::Up, &grid, &mut memory);
        assert_eq!(cell, Cell::Search);
        assert_eq!(step(cell, Direction::Down, &grid, &mut memory), Cell::at(0, 2));
    }

    #[test]
    fn down_from_last_row_stays_on_last_row() {
        let (grid, mut memory) = setup();
        memory.remember(2, 3, &grid);
        assert_eq!(step(Cell::at(2, 3), Direction::Down, &grid, &mut memory), Cell::at(2, 3));
    }

    #[test]
    fn vertical_moves_restore_memory_not_column() {
        let (grid, mut memory) = setup();
        memory.remember(1, 4, &grid);
        assert_eq!(step(Cell::at(0, 1), Direction::Down, &grid, &mut memory), Cell::at(1, 4));
        assert_eq!(step(Cell::at(2, 2), Direction::Up, &grid, &mut memory), Cell::at(1, 4));
    }

    #[test]
    fn memory_round_trip_through_another_row() {
        let (grid, mut memory) = setup();
        let cell = step(Cell::at(0, 2), Direction::Right, &grid, &mut memory);
        assert_eq!(cell, Cell::at(0, 3));
        let cell = step(cell, Direction::Down, &grid, &mut memory);
        assert_eq!(cell, Cell::at(1, 3));
        let cell = step(cell, Direction::Left, &grid, &mut memory);
        assert_eq!(step(cell, Direction::Up, &grid, &mut memory), Cell::at(0, 3));
        assert_eq!(memory.columns(&grid), &[3, 2, 0]);
    }

    #[test]
    fn unvisited_row_is_entered_at_current_column() {
        let (grid, mut memory) = setup();
        assert_eq!(step(Cell::at(0, 2), Direction::Down, &grid, &mut memory), Cell::at(1, 2));
        assert_eq!(step(Cell::at(1, 2), Direction::Down, &grid, &mut memory), Cell::at(2, 2));
        assert_eq!(step(Cell::at(2, 2), Direction::Up, &grid, &mut memory), Cell::at(1, 2));

        let grid = GridModel::from_row_lengths(vec![6, 3]);
        let mut memory = SelectionMemory::for_grid(&grid);
        assert_eq!(step(Cell::at(0, 5), Direction::Down, &grid, &mut memory), Cell::at(1, 2));
    }

    #[test]
    fn stale_focus_is_clamped_before_moving() {
        let (grid, mut memory) = setup();
        let t = transition(Some(Cell::at(1, 9)), Direction::Left, &grid, &mut memory).unwrap();
        assert_eq!(t.previous, Some(Cell::at(1, 9)));
        assert_eq!(t.next, Cell::at(1, 3));

        let t = transition(Some(Cell::at(7, 0)), Direction::Right, &grid, &mut memory).unwrap();
        assert_eq!(t.next, Cell::at(2, 1));
    }

    #[test]
    fn stale_focus_on_empty_grid_falls_back_to_search() {
        let grid = GridModel::uniform(3, 0);
        let mut memory = SelectionMemory::for_grid(&grid);
        let t = transition(Some(Cell::at(0, 2)), Direction::Down, &grid, &mut memory).unwrap();
        assert_eq!(t.next, Cell::Search);
    }

    #[test]
    fn vertical_moves_pass_over_empty_rows() {
        let grid = GridModel::from_row_lengths(vec![3, 0, 2]);
        let mut memory = SelectionMemory::for_grid(&grid);
        assert_eq!(step(Cell::at(0, 1), Direction::Down, &grid, &mut memory), Cell::at(2, 1));
        assert_eq!(step(Cell::at(2, 1), Direction::Down, &grid, &mut memory), Cell::at(2, 1));
        assert_eq!(step(Cell::at(2, 1), Direction::Up, &grid, &mut memory), Cell::at(0, 1));
        assert_eq!(memory.columns(&grid), &[1, 0, 1]);
    }

    #[test]
    fn leading_empty_rows_are_skipped_from_search() {
        let grid = GridModel::from_row_lengths(vec![0, 4, 4]);
        let mut memory = SelectionMemory::for_grid(&grid);
        let cell = step(Cell::Search, Direction::Down, &grid, &mut memory);
        assert_eq!(cell, Cell::at(1, 0));
        assert_eq!(step(cell, Direction::Up, &grid, &mut memory), Cell::Search);
        assert_eq!(step(Cell::at(1, 3), Direction::Down, &grid, &mut memory), Cell::at(2, 3));
    }

    #[test]
    fn repeated_down_reaches_every_non_empty_row() {
        for lengths in [vec![3, 0, 2], vec![0, 4, 4], vec![2, 0, 0, 5]] {
            let grid = GridModel::from_row_lengths(lengths);
            let mut memory = SelectionMemory::for_grid(&grid);
            let mut focus = Some(grid.first_cell());
            for _ in 0..5 {
                focus = transition(focus, Direction::Down, &grid, &mut memory).map(|t| t.next);
            }
            let last = grid.row_count() - 1;
            assert_eq!(focus.and_then(Cell::row), Some(last), "{:?}", grid.row_lengths());
        }
    }

    #[test]
    fn grid_without_tiles_keeps_search() {
        let grid = GridModel::uniform(3, 0);
        let mut memory = SelectionMemory::for_grid(&grid);
        assert_eq!(step(Cell::Search, Direction::Down, &grid, &mut memory), Cell::Search);
    }

    #[test]
    fn right_clamps_per_row_length() {
        let grid = GridModel::from_row_lengths(vec![5, 2]);
        let mut memory = SelectionMemory::for_grid(&grid);
        assert_eq!(step(Cell::at(1, 1), Direction::Right, &grid, &mut memory), Cell::at(1, 1));
        assert_eq!(step(Cell::at(0, 1), Direction::Right, &grid, &mut memory), Cell::at(0, 2));
    }

    #[test]
    fn edge_moves_report_no_change() {
        let (grid, mut memory) = setup();
        let t = transition(Some(Cell::at(0, 0)), Direction::Left, &grid, &mut memory).unwrap();
        assert!(!t.changed());
        let t = transition(Some(Cell::at(0, 0)), Direction::Right, &grid, &mut memory).unwrap();
        assert!(t.changed());
    }

    #[test]
    fn direction_labels() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert!(Direction::Down.is_vertical());
        assert!(!Direction::Left.is_vertical());
    }
}
