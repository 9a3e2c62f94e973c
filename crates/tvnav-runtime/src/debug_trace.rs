#![forbid(unsafe_code)]

//! Stderr debug tracing controlled by environment variable.
//!
//! Set `TVNAV_DEBUG_TRACE=1` to print every focus change to stderr with a
//! millisecond timestamp, independent of any `tracing` subscriber. When
//! unset the check is a single static bool load.
//!
//! ```bash
//! TVNAV_DEBUG_TRACE=1 cargo run -p tvnav-harness -- --script=RRDDU
//! ```

use std::sync::LazyLock;
use std::time::Instant;

static DEBUG_TRACE_ENABLED: LazyLock<bool> =
    LazyLock::new(|| std::env::var("TVNAV_DEBUG_TRACE").is_ok_and(|v| parse_flag(&v)));

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[inline]
pub fn is_enabled() -> bool {
    *DEBUG_TRACE_ENABLED
}

/// Milliseconds since the first trace call.
#[inline]
pub fn elapsed_ms() -> u64 {
    u64::try_from(START_TIME.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Print a timestamped line to stderr when `TVNAV_DEBUG_TRACE` is set.
///
/// ```ignore
/// use tvnav_runtime::debug_trace;
/// debug_trace!("focus {} -> {}", from, to);
/// ```
#[macro_export]
macro_rules! debug_trace {
    ($($arg:tt)*) => {
        if $crate::debug_trace::is_enabled() {
            eprintln!(
                "[TVNAV {:>8}ms] {}",
                $crate::debug_trace::elapsed_ms(),
                format_args!($($arg)*)
            );
        }
    };
}
