#![forbid(unsafe_code)]

//! A navigation session over one catalog.
//!
//! The session stands in for the dashboard view: its scroll adapter prints
//! the tile that would be scrolled into view, and Select/Back print what
//! the screen would do. Input comes from a key script or from the keyboard
//! in raw mode.

use std::io::{self, Write};
use std::rc::Rc;

use crossterm::event::{self as cte, Event, KeyCode, KeyModifiers};
use tracing::{debug, warn};
use tvnav_catalog::Catalog;
use tvnav_core::{Cell, NavInput, ScriptError};
use tvnav_runtime::{FocusNavigator, NavConfig, ScrollAdapter, ScrollRequest};

/// Prints one line per scroll request.
pub struct ConsoleAdapter<W: Write> {
    out: W,
    catalog: Rc<Catalog>,
    line_end: &'static str,
}

impl<W: Write> ConsoleAdapter<W> {
    fn write_line(&mut self, line: &str) {
        if let Err(err) = write!(self.out, "{line}{}", self.line_end).and_then(|()| self.out.flush())
        {
            warn!(error = %err, "console write failed");
        }
    }

    fn describe(&self, cell: Cell) -> String {
        match self.catalog.movie_at(cell) {
            Some(movie) => format!("{cell}  {}", movie.title),
            None => cell.to_string(),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ScrollAdapter for ConsoleAdapter<W> {
    fn scroll_to(&mut self, request: &ScrollRequest) {
        let line = format!("focus {}", self.describe(request.target));
        self.write_line(&line);
    }
}

pub struct Session<W: Write> {
    navigator: FocusNavigator<ConsoleAdapter<W>>,
}

impl<W: Write> Session<W> {
    /// `line_end` is `"\n"` normally and `"\r\n"` in raw mode.
    pub fn new(catalog: Catalog, config: &NavConfig, out: W, line_end: &'static str) -> Self {
        let catalog = Rc::new(catalog);
        let grid = catalog.grid_model(config.rows);
        let adapter = ConsoleAdapter {
            out,
            catalog,
            line_end,
        };
        Self {
            navigator: FocusNavigator::with_config(grid, adapter, config),
        }
    }

    /// Assign initial focus once the catalog is in place.
    pub fn start(&mut self) {
        self.navigator.initialize();
    }

    pub fn focus(&self) -> Option<Cell> {
        self.navigator.focus()
    }

    /// Apply one remote input.
    pub fn apply(&mut self, input: NavInput) {
        if input.direction().is_some() {
            self.navigator.handle_input(input);
            return;
        }
        let Some(cell) = self.navigator.focus() else {
            debug!(?input, "input before focus dropped");
            return;
        };
        let line = match input {
            NavInput::Select if cell.is_search() => "select search".to_string(),
            NavInput::Select => {
                let adapter = self.navigator.adapter();
                format!("select {}", adapter.describe(cell))
            }
            NavInput::Back => "back".to_string(),
            NavInput::PlayPause | NavInput::Menu => {
                debug!(?input, "unhandled remote button");
                return;
            }
            NavInput::Up | NavInput::Down | NavInput::Left | NavInput::Right => return,
        };
        self.navigator.adapter_mut().write_line(&line);
    }

    /// Replay a key script.
    pub fn run_script(&mut self, script: &str) -> Result<(), ScriptError> {
        for input in NavInput::parse_script(script)? {
            self.apply(input);
        }
        Ok(())
    }

    /// Read the keyboard until `q` or Ctrl+C.
    pub fn run_interactive(&mut self) -> io::Result<()> {
        let _raw = RawModeGuard::enable()?;
        loop {
            let event = cte::read()?;
            if is_quit(&event) {
                return Ok(());
            }
            if let Some(input) = NavInput::from_crossterm(&event) {
                self.apply(input);
            }
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.navigator.into_adapter().into_inner()
    }
}

fn is_quit(event: &Event) -> bool {
    let Event::Key(key) = event else {
        return false;
    };
    if key.kind == cte::KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Raw mode for the lifetime of the guard.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        crossterm::terminal::enable_raw_mode()?;
        debug!("terminal raw mode enabled");
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = crossterm::terminal::disable_raw_mode();
        debug!("terminal raw mode disabled");
    }
}
