//! Log macros shared by every crate in the workspace.
//!
//! They forward to `tracing`. `success!` is an `INFO` event under the
//! `dnscheck::success` target so the terminal formatter can mark it apart.

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "dnscheck::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::__tracing::error!($($arg)*)
    };
}
