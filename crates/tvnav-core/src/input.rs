#![forbid(unsafe_code)]

//! Remote-control input.
//!
//! [`NavInput`] is the button set of a TV remote. Only the four arrows carry
//! a [`Direction`]; the rest are surfaced for the host (activate a tile, go
//! back, toggle playback) and are no-ops for navigation.
//!
//! On native targets [`NavInput::from_key`] maps Crossterm key events, so a
//! keyboard can stand in for the remote. [`NavInput::parse_script`] reads a
//! compact key script (`"RRDDU"`) for replays and tests.

use std::fmt;

#[cfg(not(target_arch = "wasm32"))]
use crossterm::event as cte;

use crate::navigation::Direction;

/// One remote-control button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavInput {
    Up,
    Down,
    Left,
    Right,
    /// Center/OK button.
    Select,
    /// Back/Menu-out button.
    Back,
    PlayPause,
    Menu,
}

impl NavInput {
    /// Navigation direction carried by this input, if any.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            Self::Select | Self::Back | Self::PlayPause | Self::Menu => None,
        }
    }

    /// Map a Crossterm key event to a remote button.
    ///
    /// Arrow keys and `h`/`j`/`k`/`l` navigate; Enter selects; Esc and
    /// Backspace go back; space and the media play/pause key toggle playback;
    /// `m` opens the menu. Key releases never map.
    #[must_use]
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_key(event: &cte::KeyEvent) -> Option<Self> {
        if event.kind == cte::KeyEventKind::Release {
            return None;
        }
        if event
            .modifiers
            .intersects(cte::KeyModifiers::CONTROL | cte::KeyModifiers::ALT)
        {
            return None;
        }
        match event.code {
            cte::KeyCode::Up | cte::KeyCode::Char('k') => Some(Self::Up),
            cte::KeyCode::Down | cte::KeyCode::Char('j') => Some(Self::Down),
            cte::KeyCode::Left | cte::KeyCode::Char('h') => Some(Self::Left),
            cte::KeyCode::Right | cte::KeyCode::Char('l') => Some(Self::Right),
            cte::KeyCode::Enter => Some(Self::Select),
            cte::KeyCode::Esc | cte::KeyCode::Backspace => Some(Self::Back),
            cte::KeyCode::Char(' ') => Some(Self::PlayPause),
            cte::KeyCode::Char('m') => Some(Self::Menu),
            cte::KeyCode::Media(media) => map_media_key(media),
            _ => None,
        }
    }

    /// Map a Crossterm event; anything but a key event yields `None`.
    #[must_use]
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_crossterm(event: &cte::Event) -> Option<Self> {
        match event {
            cte::Event::Key(key) => Self::from_key(key),
            _ => None,
        }
    }

    /// Parse a key script.
    ///
    /// `U`/`D`/`L`/`R` are the arrows, `S` is select, `B` is back, `P` is
    /// play/pause and `M` is menu (case-insensitive). Whitespace and commas
    /// separate nothing and are skipped.
    pub fn parse_script(script: &str) -> Result<Vec<Self>, ScriptError> {
        script
            .char_indices()
            .filter(|(_, ch)| !ch.is_whitespace() && *ch != ',')
            .map(|(offset, ch)| {
                Self::from_script_char(ch).ok_or(ScriptError::UnknownKey { offset, key: ch })
            })
            .collect()
    }

    fn from_script_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'U' => Some(Self::Up),
            'D' => Some(Self::Down),
            'L' => Some(Self::Left),
            'R' => Some(Self::Right),
            'S' => Some(Self::Select),
            'B' => Some(Self::Back),
            'P' => Some(Self::PlayPause),
            'M' => Some(Self::Menu),
            _ => None,
        }
    }
}

impl From<Direction> for NavInput {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::Up,
            Direction::Down => Self::Down,
            Direction::Left => Self::Left,
            Direction::Right => Self::Right,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn map_media_key(code: cte::MediaKeyCode) -> Option<NavInput> {
    match code {
        cte::MediaKeyCode::Play | cte::MediaKeyCode::Pause | cte::MediaKeyCode::PlayPause => {
            Some(NavInput::PlayPause)
        }
        _ => None,
    }
}

/// Key script could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// Character at byte `offset` is not a known key.
    UnknownKey { offset: usize, key: char },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKey { offset, key } => {
                write!(f, "unknown key {key:?} at offset {offset} (expected one of UDLRSBPM)")
            }
        }
    }
}

impl std::error::Error for ScriptError {}
