#![forbid(unsafe_code)]

//! Core: grid model, selection memory, remote input, and the focus
//! navigation engine, plus linear field focus for remote-driven forms.
//!
//! # Role in tvnav
//! `tvnav-core` is pure: it owns no focus state and performs no I/O. The
//! engine in [`navigation`] maps `(current focus, direction, grid, memory)`
//! to the next focus and updates the memory in place. `tvnav-runtime` owns
//! the focus value and notifies the scroll adapter.

pub mod chain;
pub mod grid;
pub mod input;
pub mod logging;
pub mod memory;
pub mod navigation;
pub mod signup;

pub use chain::{FieldChain, FieldMove};
pub use grid::{Cell, GridModel};
pub use input::{NavInput, ScriptError};
pub use memory::SelectionMemory;
pub use navigation::{Direction, Transition, transition};
pub use signup::{SignUpError, SignUpField, SignUpForm};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
