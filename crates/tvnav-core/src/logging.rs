#![forbid(unsafe_code)]

//! Logging shim for the navigation core.
//!
//! With the `tracing` feature the `trace!`/`debug!`/`warn!` family are the
//! real `tracing` macros. Without it they expand to nothing, so the engine
//! stays dependency-free for hosts that do not log.
//!
//! Every event emitted by the core uses [`NAV_TARGET`] so hosts can filter
//! navigation chatter with `RUST_LOG=tvnav::nav=trace`.

/// Log target shared by all navigation events.
pub const NAV_TARGET: &str = "tvnav::nav";

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op warn macro when tracing is disabled.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }

    /// No-op trace_span macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }
}

/// Span stand-in used when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Enter the span. Dropping the guard does nothing.
    pub fn entered(self) -> NoopSpan {
        self
    }
}
