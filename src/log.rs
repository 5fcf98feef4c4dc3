//! Logging macros, compiled out unless the `log` feature is enabled.
#![allow(unused, reason = "logger")]

pub(crate) const TARGET: &str = "wirehttp";

macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::trace!(target: $crate::log::TARGET, $($tt)*);
    };
}

macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::debug!(target: $crate::log::TARGET, $($tt)*);
    };
}

macro_rules! info {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::info!(target: $crate::log::TARGET, $($tt)*);
    };
}

macro_rules! error {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::error!(target: $crate::log::TARGET, $($tt)*);
    };
}

pub(crate) use {trace, debug, info, error};
