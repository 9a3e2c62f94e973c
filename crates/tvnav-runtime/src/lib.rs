#![forbid(unsafe_code)]

//! tvnav Runtime
//!
//! This crate owns the mutable side of navigation: the single focused cell,
//! the per-row selection memory, and the scroll adapter that is told where
//! focus went.
//!
//! # Key Components
//!
//! - [`FocusNavigator`] - State container; the only writer of focus
//! - [`ScrollAdapter`] - Boundary to the view layer that scrolls tiles into view
//! - [`NavSimulator`] - Deterministic driver for tests and replays
//! - [`NavConfig`] - Environment-driven configuration
//!
//! # How it fits in the system
//! Input arrives from the host (remote, keyboard, script) as
//! [`NavInput`](tvnav_core::NavInput). The navigator runs the pure
//! transition from `tvnav-core`, stores the result, and notifies the
//! adapter and any subscribers. Rendering never reads navigation internals;
//! it only reacts to [`ScrollRequest`]s and [`FocusNavigator::focus`].

pub mod config;
pub mod debug_trace;
pub mod navigator;
pub mod scroll;
pub mod simulator;

pub use config::{ConfigError, NavConfig};
pub use navigator::{FocusNavigator, SubId};
pub use scroll::{NoopAdapter, RecordingAdapter, ScrollAdapter, ScrollAnchor, ScrollRequest};
pub use simulator::{InputRecord, NavSimulator};
