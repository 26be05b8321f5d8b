//! Logging helpers layered on `tracing`.
//!
//! The CLI formatter renders events sent to [`SUCCESS_TARGET`] with their own
//! symbol, so library code can report a finished step without the CLI
//! knowing about it.

#[doc(hidden)]
pub use tracing;

pub const SUCCESS_TARGET: &str = "ipgate::success";

#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        $crate::log::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)+)
    };
}
