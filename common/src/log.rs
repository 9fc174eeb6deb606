//! Status line macros.
//!
//! Thin wrappers over `tracing` that tag events with [`STATUS_TARGET`], so a
//! filter such as `scoreboard::status=warn` can quiet user-facing status lines
//! without touching diagnostics.

pub const STATUS_TARGET: &str = "scoreboard::status";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: $crate::log::STATUS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!(target: $crate::log::STATUS_TARGET, $($arg)*)
    };
}
