//! Variadic logging macros
//!
//! Each macro takes one or more `Display` values. A leading `logger;` routes
//! the call through that logger, otherwise [`CONSOLE`](crate::logging::CONSOLE)
//! is used. `logger => writer;` writes the line to `writer` instead of stdout.
//!
//! ```rust,no_run
//! use conlog::logging::{Logger, Severity};
//!
//! conlog::info!("Starting", "server", 8080);
//!
//! let quiet = Logger::new(Severity::Error);
//! conlog::debug!(quiet; "dropped");
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($severity:expr, $logger:expr, $($arg:expr),+) => {
        $logger.log($severity, &[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_to {
    ($severity:expr, $logger:expr, $writer:expr, $($arg:expr),+) => {
        $logger.log_to($writer, $severity, &[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}

/// Log at error level
#[macro_export]
macro_rules! error {
    ($logger:expr => $writer:expr; $($arg:expr),+ $(,)?) => {
        $crate::__log_to!($crate::logging::Severity::Error, $logger, $writer, $($arg),+)
    };
    ($logger:expr; $($arg:expr),+ $(,)?) => {
        $crate::__log_at!($crate::logging::Severity::Error, $logger, $($arg),+)
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::__log_at!($crate::logging::Severity::Error, $crate::logging::CONSOLE, $($arg),+)
    };
}

/// Log at warning level
#[macro_export]
macro_rules! warning {
    ($logger:expr => $writer:expr; $($arg:expr),+ $(,)?) => {
        $crate::__log_to!($crate::logging::Severity::Warning, $logger, $writer, $($arg),+)
    };
    ($logger:expr; $($arg:expr),+ $(,)?) => {
        $crate::__log_at!($crate::logging::Severity::Warning, $logger, $($arg),+)
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::__log_at!($crate::logging::Severity::Warning, $crate::logging::CONSOLE, $($arg),+)
    };
}

/// Log at debug level
#[macro_export]
macro_rules! debug {
    ($logger:expr => $writer:expr; $($arg:expr),+ $(,)?) => {
        $crate::__log_to!($crate::logging::Severity::Debug, $logger, $writer, $($arg),+)
    };
    ($logger:expr; $($arg:expr),+ $(,)?) => {
        $crate::__log_at!($crate::logging::Severity::Debug, $logger, $($arg),+)
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::__log_at!($crate::logging::Severity::Debug, $crate::logging::CONSOLE, $($arg),+)
    };
}

/// Log at info level
#[macro_export]
macro_rules! info {
    ($logger:expr => $writer:expr; $($arg:expr),+ $(,)?) => {
        $crate::__log_to!($crate::logging::Severity::Info, $logger, $writer, $($arg),+)
    };
    ($logger:expr; $($arg:expr),+ $(,)?) => {
        $crate::__log_at!($crate::logging::Severity::Info, $logger, $($arg),+)
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::__log_at!($crate::logging::Severity::Info, $crate::logging::CONSOLE, $($arg),+)
    };
}

/// Log at verbose level (gated like info)
#[macro_export]
macro_rules! verbose {
    ($logger:expr => $writer:expr; $($arg:expr),+ $(,)?) => {
        $crate::__log_to!($crate::logging::Severity::Verbose, $logger, $writer, $($arg),+)
    };
    ($logger:expr; $($arg:expr),+ $(,)?) => {
        $crate::__log_at!($crate::logging::Severity::Verbose, $logger, $($arg),+)
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::__log_at!($crate::logging::Severity::Verbose, $crate::logging::CONSOLE, $($arg),+)
    };
}
