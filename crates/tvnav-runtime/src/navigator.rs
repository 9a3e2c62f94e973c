#![forbid(unsafe_code)]

//! Focus state container.
//!
//! [`FocusNavigator`] holds the one focused cell of a screen together with
//! its grid and selection memory. It is the only writer of focus: remote
//! input, direct selection (tap/click), and grid reloads all go through it.
//! After every change it tells the [`ScrollAdapter`] and then each
//! subscriber, in subscription order.
//!
//! Focus starts out unset. Directional input is dropped until the host calls
//! [`FocusNavigator::initialize`] once its item list and layout are ready.

use tracing::{debug, info, trace, warn};
use tvnav_core::logging::NAV_TARGET;
use tvnav_core::{Cell, Direction, GridModel, NavInput, SelectionMemory, Transition, transition};

use crate::config::NavConfig;
use crate::scroll::{NoopAdapter, ScrollAdapter, ScrollAnchor, ScrollRequest};

/// Handle returned by [`FocusNavigator::subscribe`].
pub type SubId = u64;

type Observer = Box<dyn FnMut(&Transition)>;

/// Owns focus, grid, and selection memory for one screen.
pub struct FocusNavigator<A: ScrollAdapter = NoopAdapter> {
    grid: GridModel,
    memory: SelectionMemory,
    focus: Option<Cell>,
    adapter: A,
    anchor: ScrollAnchor,
    log_transitions: bool,
    observers: Vec<(SubId, Observer)>,
    next_sub_id: SubId,
}

impl<A: ScrollAdapter> FocusNavigator<A> {
    /// Navigator over `grid` with default configuration. Focus is unset.
    pub fn new(grid: GridModel, adapter: A) -> Self {
        Self::with_config(grid, adapter, &NavConfig::default())
    }

    pub fn with_config(grid: GridModel, adapter: A, config: &NavConfig) -> Self {
        let memory = SelectionMemory::for_grid(&grid);
        Self {
            grid,
            memory,
            focus: None,
            adapter,
            anchor: config.scroll_anchor,
            log_transitions: config.log_transitions,
            observers: Vec::new(),
            next_sub_id: 0,
        }
    }

    /// Assign initial focus: the first tile of the topmost non-empty row, or
    /// the search field when the grid has no tiles.
    ///
    /// Returns `None` if focus was already assigned.
    pub fn initialize(&mut self) -> Option<Transition> {
        if self.focus.is_some() {
            trace!(target: NAV_TARGET, "initialize ignored, focus already assigned");
            return None;
        }
        let cell = self.grid.first_cell();
        Some(self.land(cell))
    }

    /// Whether focus has been assigned.
    pub fn is_initialized(&self) -> bool {
        self.focus.is_some()
    }

    /// Apply one directional move.
    ///
    /// Returns `None` before initialization. At grid edges the returned
    /// transition has `changed() == false` and nobody is notified.
    pub fn handle_direction(&mut self, direction: Direction) -> Option<Transition> {
        let t = transition(self.focus, direction, &self.grid, &mut self.memory)?;
        self.focus = Some(t.next);
        if t.changed() {
            self.notify(&t);
        }
        Some(t)
    }

    /// Apply a remote button. Buttons without a direction are ignored here;
    /// the host handles select/back/playback itself.
    pub fn handle_input(&mut self, input: NavInput) -> Option<Transition> {
        match input.direction() {
            Some(direction) => self.handle_direction(direction),
            None => {
                trace!(target: NAV_TARGET, ?input, "non-directional input");
                None
            }
        }
    }

    /// Focus the tile at (`row`, `column`) directly, as a tap or click would.
    ///
    /// Also serves as initial focus assignment. Targets outside the grid are
    /// rejected with a warning and leave focus unchanged.
    pub fn select_direct(&mut self, row: usize, column: usize) -> Option<Transition> {
        let cell = Cell::at(row, column);
        if !self.grid.contains(cell) {
            warn!(
                target: NAV_TARGET,
                row,
                column,
                rows = self.grid.row_count(),
                items = self.grid.item_count(row),
                "direct selection outside grid ignored"
            );
            return None;
        }
        Some(self.land(cell))
    }

    /// Focus the search field directly.
    pub fn focus_search(&mut self) -> Transition {
        self.land(Cell::Search)
    }

    /// Swap in a new grid after the backing item list reloaded.
    ///
    /// Memory and focus are clamped to the new shape. Returns the transition
    /// when focus had to move.
    pub fn replace_grid(&mut self, grid: GridModel) -> Option<Transition> {
        debug!(
            target: NAV_TARGET,
            rows = grid.row_count(),
            "grid replaced"
        );
        self.grid = grid;
        self.memory.reconcile(&self.grid);

        let current = self.focus?;
        let next = self.grid.clamp(current).unwrap_or(Cell::Search);
        if next == current {
            return None;
        }
        Some(self.land(next))
    }

    pub fn focus(&self) -> Option<Cell> {
        self.focus
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    pub fn memory(&self) -> &SelectionMemory {
        &self.memory
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Tear down the navigator, keeping the adapter.
    pub fn into_adapter(self) -> A {
        self.adapter
    }

    /// Call `observer` after every focus change. Observers run after the
    /// scroll adapter, in subscription order.
    pub fn subscribe<F>(&mut self, observer: F) -> SubId
    where
        F: FnMut(&Transition) + 'static,
    {
        let id = self.next_sub_id;
        self.next_sub_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a subscriber. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Set focus to a cell already known to be valid.
    fn land(&mut self, cell: Cell) -> Transition {
        let t = Transition::new(self.focus, cell);
        self.focus = Some(cell);
        if let Cell::Row { row, column } = cell {
            self.memory.remember(row, column, &self.grid);
        }
        if t.changed() {
            self.notify(&t);
        }
        t
    }

    fn notify(&mut self, t: &Transition) {
        let from = t.previous.map_or_else(|| "none".to_string(), |c| c.to_string());
        if self.log_transitions {
            info!(target: NAV_TARGET, %from, to = %t.next, "focus changed");
        } else {
            debug!(target: NAV_TARGET, %from, to = %t.next, "focus changed");
        }
        crate::debug_trace!("focus {from} -> {}", t.next);

        let request = ScrollRequest {
            previous: t.previous,
            target: t.next,
            anchor: self.anchor,
        };
        self.adapter.scroll_to(&request);
        for (_, observer) in &mut self.observers {
            observer(t);
        }
    }
}

impl<A: ScrollAdapter + std::fmt::Debug> std::fmt::Debug for FocusNavigator<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FocusNavigator")
            .field("grid", &self.grid)
            .field("memory", &self.memory)
            .field("focus", &self.focus)
            .field("adapter", &self.adapter)
            .field("anchor", &self.anchor)
            .field("observers", &self.observers.len())
            .finish()
    }
}
