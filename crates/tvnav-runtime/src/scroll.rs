#![forbid(unsafe_code)]

//! Scroll/render adapter boundary.
//!
//! The navigator decides *which* cell is focused; the view layer decides
//! how to bring it on screen. After every focus change the navigator hands
//! the adapter a [`ScrollRequest`] and moves on. There is no acknowledgement
//! and no way for the adapter to veto the move.

use tvnav_core::Cell;

/// Where the target tile should sit once scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollAnchor {
    /// Center the tile in its row and the row in the viewport.
    #[default]
    Center,
    /// Scroll the minimum distance that makes the tile fully visible.
    Nearest,
}

impl ScrollAnchor {
    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "center" | "centre" | "c" => Some(Self::Center),
            "nearest" | "n" => Some(Self::Nearest),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Nearest => "nearest",
        }
    }
}

/// Ask the view layer to bring `target` into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    /// Cell that lost focus, if any. Lets the view drop its highlight.
    pub previous: Option<Cell>,
    pub target: Cell,
    pub anchor: ScrollAnchor,
}

impl ScrollRequest {
    /// Stable view identity of the target (`row{r}-{c}` or `search`).
    #[must_use]
    pub fn anchor_id(&self) -> String {
        self.target.to_string()
    }

    /// Whether the request crosses rows, which needs a vertical scroll as
    /// well as a horizontal one.
    #[must_use]
    pub fn crosses_rows(&self) -> bool {
        self.previous.and_then(Cell::row) != self.target.row()
    }
}

/// Receives scroll requests after each focus change.
pub trait ScrollAdapter {
    fn scroll_to(&mut self, request: &ScrollRequest);
}

impl<F> ScrollAdapter for F
where
    F: FnMut(&ScrollRequest),
{
    fn scroll_to(&mut self, request: &ScrollRequest) {
        self(request);
    }
}

/// Discards every request. For hosts that poll focus instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAdapter;

impl ScrollAdapter for NoopAdapter {
    fn scroll_to(&mut self, _request: &ScrollRequest) {}
}

/// Keeps every request in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingAdapter {
    requests: Vec<ScrollRequest>,
}

impl RecordingAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> &[ScrollRequest] {
        &self.requests
    }

    /// Most recent request, if any.
    pub fn last(&self) -> Option<&ScrollRequest> {
        self.requests.last()
    }

    /// Targets of all requests, oldest first.
    pub fn targets(&self) -> Vec<Cell> {
        self.requests.iter().map(|r| r.target).collect()
    }

    pub fn clear(&mut self) {
        self.requests.clear();
    }
}

impl ScrollAdapter for RecordingAdapter {
    fn scroll_to(&mut self, request: &ScrollRequest) {
        self.requests.push(*request);
    }
}
