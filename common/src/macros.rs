//! Status macros shared by every crate.
//!
//! These forward to `tracing` with a `mailroom::*` target so the terminal
//! formatter can pick a symbol for each kind of message.

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "mailroom::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "mailroom::info", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!(target: "mailroom::warn", $($arg)*)
    };
}
