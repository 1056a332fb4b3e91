//! `format!`-style logging through the root logger.
//!
//! ```
//! abclog::info!("listening on {}:{}", "0.0.0.0", 8080);
//! abclog::log!(abclog::Level::Warn, "disk {}% full", 91);
//! ```
//!
//! Arguments are only formatted if the root logger has the level enabled.

#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {
        $crate::root::printf($level, ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! verbose {
    ($($arg:tt)+) => {
        $crate::root::verbosef(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::root::debugf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::root::infof(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::root::warnf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::root::errorf(::std::format_args!($($arg)+))
    };
}

/// Logs at `Fatal`. Does not terminate the process.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        $crate::root::fatalf(::std::format_args!($($arg)+))
    };
}
