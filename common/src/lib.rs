//! # NWA Common
//!
//! Types shared by every crate of the workspace:
//!
//! * **[`report`]**: the typed model of a network scan report.
//! * **[`config`]**: runtime options handed from the front end to the engine.
//!
//! The logging macros exported here route through `tracing` so that the
//! binary decides how (and whether) they are rendered.

pub mod config;
pub mod report;

#[doc(hidden)]
pub use tracing as __tracing;

/// Target used for messages that report a completed step.
pub const SUCCESS_TARGET: &str = "nwa::success";

/// Target used for raw terminal output that must bypass the level prefix.
pub const PRINT_TARGET: &str = "nwa::print";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "nwa::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!($($arg)*)
    };
}
