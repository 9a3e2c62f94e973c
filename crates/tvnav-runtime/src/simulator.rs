#![forbid(unsafe_code)]

//! Deterministic navigation simulator for testing and replay.
//!
//! `NavSimulator` drives a [`FocusNavigator`] with a [`RecordingAdapter`]
//! and keeps a record of what every input did, so tests can assert on focus
//! traces and scroll requests without a view layer.
//!
//! # Example
//!
//! ```ignore
//! use tvnav_core::{Cell, GridModel};
//! use tvnav_runtime::NavSimulator;
//!
//! let mut sim = NavSimulator::new(GridModel::uniform(3, 5));
//! sim.init();
//! sim.run_script("RRDDU")?;
//! assert_eq!(sim.focus(), Some(Cell::at(1, 2)));
//! ```

use tvnav_core::{Cell, GridModel, NavInput, ScriptError, Transition};

use crate::config::NavConfig;
use crate::navigator::FocusNavigator;
use crate::scroll::{RecordingAdapter, ScrollRequest};

/// What one simulated input did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRecord {
    /// Focus moved.
    Moved(Transition),
    /// Focus stayed put at a grid edge (or on search).
    Stayed(Cell),
    /// Directional input before initial focus.
    Dropped(NavInput),
    /// Input without a direction.
    Ignored(NavInput),
    /// Direct selection outside the grid.
    Rejected { row: usize, column: usize },
}

impl InputRecord {
    /// Focus after this input, when focus was assigned.
    #[must_use]
    pub fn focus_after(&self) -> Option<Cell> {
        match self {
            Self::Moved(t) => Some(t.next),
            Self::Stayed(cell) => Some(*cell),
            Self::Dropped(_) | Self::Ignored(_) | Self::Rejected { .. } => None,
        }
    }
}

/// Deterministic driver around a recording navigator.
#[derive(Debug)]
pub struct NavSimulator {
    navigator: FocusNavigator<RecordingAdapter>,
    records: Vec<InputRecord>,
}

impl NavSimulator {
    pub fn new(grid: GridModel) -> Self {
        Self::with_config(grid, &NavConfig::default())
    }

    pub fn with_config(grid: GridModel, config: &NavConfig) -> Self {
        Self {
            navigator: FocusNavigator::with_config(grid, RecordingAdapter::new(), config),
            records: Vec::new(),
        }
    }

    /// Assign initial focus, as the host does once layout settles.
    pub fn init(&mut self) {
        if let Some(t) = self.navigator.initialize() {
            self.records.push(InputRecord::Moved(t));
        }
    }

    /// Inject one remote input.
    pub fn inject(&mut self, input: NavInput) {
        let record = match (input.direction(), self.navigator.handle_input(input)) {
            (None, _) => InputRecord::Ignored(input),
            (Some(_), None) => InputRecord::Dropped(input),
            (Some(_), Some(t)) if t.changed() => InputRecord::Moved(t),
            (Some(_), Some(t)) => InputRecord::Stayed(t.next),
        };
        self.records.push(record);
    }

    pub fn inject_all(&mut self, inputs: &[NavInput]) {
        for &input in inputs {
            self.inject(input);
        }
    }

    /// Parse and inject a key script (see [`NavInput::parse_script`]).
    ///
    /// Nothing is injected when the script fails to parse.
    pub fn run_script(&mut self, script: &str) -> Result<(), ScriptError> {
        let inputs = NavInput::parse_script(script)?;
        self.inject_all(&inputs);
        Ok(())
    }

    /// Simulate a tap on (`row`, `column`).
    pub fn tap(&mut self, row: usize, column: usize) {
        let record = match self.navigator.select_direct(row, column) {
            Some(t) if t.changed() => InputRecord::Moved(t),
            Some(t) => InputRecord::Stayed(t.next),
            None => InputRecord::Rejected { row, column },
        };
        self.records.push(record);
    }

    /// Reload the backing list with a new grid.
    pub fn reload(&mut self, grid: GridModel) {
        if let Some(t) = self.navigator.replace_grid(grid) {
            self.records.push(InputRecord::Moved(t));
        }
    }

    pub fn focus(&self) -> Option<Cell> {
        self.navigator.focus()
    }

    /// Focus after each recorded step that had focus, oldest first.
    pub fn focus_trace(&self) -> Vec<Cell> {
        self.records.iter().filter_map(InputRecord::focus_after).collect()
    }

    pub fn records(&self) -> &[InputRecord] {
        &self.records
    }

    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        self.navigator.adapter().requests()
    }

    pub fn navigator(&self) -> &FocusNavigator<RecordingAdapter> {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut FocusNavigator<RecordingAdapter> {
        &mut self.navigator
    }

    /// Forget recorded inputs and scroll requests; focus and memory stay.
    pub fn clear(&mut self) {
        self.records.clear();
        self.navigator.adapter_mut().clear();
    }
}
