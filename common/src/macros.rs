//! Logging convenience macros.
//!
//! Thin wrappers around `tracing` so call sites across the workspace read
//! uniformly. The CLI installs a formatter that turns the level into a
//! status symbol; library crates just emit plain events.

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

/// An `info`-level event marked as a positive outcome.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(outcome = "success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!($($arg)*)
    };
}
