//! The logger facade
//!
//! A `Logger` is just a threshold. Each call either renders one line and
//! writes it, or returns without doing anything.

use std::fmt::Display;
use std::io::{self, Write};

use super::render::render_line;
use super::severity::Severity;
use super::timestamp;
use crate::config::Config;

/// Threshold compiled into [`CONSOLE`]
pub const DEFAULT_THRESHOLD: Severity = Severity::ALL;

/// Process-wide logger used by the macros when no logger is given
pub static CONSOLE: Logger = Logger::new(DEFAULT_THRESHOLD);

/// Leveled console logger with a fixed threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logger {
    threshold: Severity,
}

impl Logger {
    /// Create a logger that emits lines at or below `threshold`
    pub const fn new(threshold: Severity) -> Self {
        Self { threshold }
    }

    /// Create a logger from loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.threshold)
    }

    /// The threshold this logger was built with
    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Check whether a line at `severity` would be written
    pub fn enabled(&self, severity: Severity) -> bool {
        severity.gate() <= self.threshold
    }

    /// Write one line to stdout if `severity` is enabled
    pub fn log(&self, severity: Severity, args: &[&dyn Display]) {
        if !self.enabled(severity) {
            return;
        }
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.log_to(&mut handle, severity, args);
    }

    /// Write one line to `writer` if `severity` is enabled
    ///
    /// The line goes out in a single `write_all`. Write errors are dropped.
    pub fn log_to<W: Write>(&self, writer: &mut W, severity: Severity, args: &[&dyn Display]) {
        if !self.enabled(severity) {
            return;
        }
        let line = render_line(&timestamp::now(), severity, args);
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    /// Write an error line to stdout
    pub fn error(&self, args: &[&dyn Display]) {
        self.error_to(&mut io::stdout().lock(), args);
    }

    /// Write a warning line to stdout
    pub fn warning(&self, args: &[&dyn Display]) {
        self.warning_to(&mut io::stdout().lock(), args);
    }

    /// Write a debug line to stdout
    pub fn debug(&self, args: &[&dyn Display]) {
        self.debug_to(&mut io::stdout().lock(), args);
    }

    /// Write an info line to stdout
    pub fn info(&self, args: &[&dyn Display]) {
        self.info_to(&mut io::stdout().lock(), args);
    }

    /// Write a verbose line to stdout, gated like [`Logger::info`]; see [`Severity::gate`]
    pub fn verbose(&self, args: &[&dyn Display]) {
        self.verbose_to(&mut io::stdout().lock(), args);
    }

    /// Write an error line to `writer`
    pub fn error_to<W: Write>(&self, writer: &mut W, args: &[&dyn Display]) {
        self.log_to(writer, Severity::Error, args);
    }

    /// Write a warning line to `writer`
    pub fn warning_to<W: Write>(&self, writer: &mut W, args: &[&dyn Display]) {
        self.log_to(writer, Severity::Warning, args);
    }

    /// Write a debug line to `writer`
    pub fn debug_to<W: Write>(&self, writer: &mut W, args: &[&dyn Display]) {
        self.log_to(writer, Severity::Debug, args);
    }

    /// Write an info line to `writer`
    pub fn info_to<W: Write>(&self, writer: &mut W, args: &[&dyn Display]) {
        self.log_to(writer, Severity::Info, args);
    }

    /// Write a verbose line to `writer`
    pub fn verbose_to<W: Write>(&self, writer: &mut W, args: &[&dyn Display]) {
        self.log_to(writer, Severity::Verbose, args);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn capture(logger: Logger, severity: Severity, args: &[&dyn Display]) -> String {
        let mut out: Vec<u8> = Vec::new();
        logger.log_to(&mut out, severity, args);
        String::from_utf8(out).unwrap()
    }

    /// Strip the leading timestamp so lines can be compared structurally
    fn without_timestamp(line: &str) -> &str {
        &line[TIMESTAMP_LEN..]
    }

    const TIMESTAMP_LEN: usize = 19;

    #[test]
    fn test_enabled_matrix() {
        for threshold in Severity::iter_all() {
            let logger = Logger::new(threshold);
            for severity in Severity::iter_all() {
                let expected = severity.gate() <= threshold;
                assert_eq!(
                    logger.enabled(severity),
                    expected,
                    "{} at threshold {}",
                    severity,
                    threshold
                );
                let output = capture(logger, severity, &[&"x"]);
                assert_eq!(!output.is_empty(), expected);
            }
        }
    }

    #[test]
    fn test_error_threshold_only_emits_errors() {
        let logger = Logger::new(Severity::Error);
        assert!(!capture(logger, Severity::Error, &[&"bad"]).is_empty());
        assert!(capture(logger, Severity::Warning, &[&"w"]).is_empty());
        assert!(capture(logger, Severity::Debug, &[&"trace"]).is_empty());
        assert!(capture(logger, Severity::Info, &[&"i"]).is_empty());
        assert!(capture(logger, Severity::Verbose, &[&"v"]).is_empty());
    }

    #[test]
    fn test_all_threshold_emits_everything() {
        let logger = Logger::new(Severity::ALL);
        for severity in Severity::iter_all() {
            let line = capture(logger, severity, &[&"x"]);
            assert!(line.contains(&severity.tag()));
        }
    }

    #[test]
    fn test_verbose_follows_info_threshold() {
        let logger = Logger::new(Severity::Info);
        assert!(logger.enabled(Severity::Verbose));
        assert!(!capture(logger, Severity::Verbose, &[&"v"]).is_empty());

        let logger = Logger::new(Severity::Debug);
        assert!(!logger.enabled(Severity::Verbose));
    }

    #[test]
    fn test_info_scenario() {
        let logger = Logger::new(Severity::ALL);
        let line = capture(logger, Severity::Info, &[&"Starting", &"server", &8080]);

        assert!(line.contains("INFO:"));
        assert!(line.ends_with("Starting server 8080\n"));
        assert_eq!(line.matches('\n').count(), 1);
    }

    #[test]
    fn test_suppressed_debug_writes_nothing() {
        let logger = Logger::new(Severity::Error);
        let mut out: Vec<u8> = Vec::new();
        logger.log_to(&mut out, Severity::Debug, &[&"trace"]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_repeated_calls_are_structurally_identical() {
        let logger = Logger::default();
        let first = capture(logger, Severity::Warning, &[&"disk", &91, &"%"]);
        let second = capture(logger, Severity::Warning, &[&"disk", &91, &"%"]);
        assert_eq!(without_timestamp(&first), without_timestamp(&second));
    }

    #[test]
    fn test_line_timestamp_is_current() {
        let logger = Logger::default();
        let line = capture(logger, Severity::Error, &[&"now"]);
        let stamp = &line[..TIMESTAMP_LEN];

        let parsed = timestamp::parse(stamp).unwrap();
        let drift = (Local::now().naive_local() - parsed).num_seconds().abs();
        assert!(drift <= 2);
        assert_eq!(&line[TIMESTAMP_LEN..TIMESTAMP_LEN + 1], " ");
    }

    type Operation = fn(&Logger, &mut Vec<u8>, &[&dyn Display]);

    fn operations() -> [(Operation, &'static str); 5] {
        [
            (Logger::error_to::<Vec<u8>> as Operation, "ERROR:"),
            (Logger::warning_to::<Vec<u8>> as Operation, "WARNING:"),
            (Logger::debug_to::<Vec<u8>> as Operation, "DEBUG:"),
            (Logger::info_to::<Vec<u8>> as Operation, "INFO:"),
            (Logger::verbose_to::<Vec<u8>> as Operation, "VERBOSE:"),
        ]
    }

    #[test]
    fn test_operations_emit_their_own_tag() {
        let logger = Logger::new(Severity::ALL);
        for (operation, tag) in operations() {
            let mut out: Vec<u8> = Vec::new();
            operation(&logger, &mut out, &[&"value"]);
            let line = String::from_utf8(out).unwrap();

            let found: Vec<String> = Severity::iter_all()
                .map(|s| s.tag())
                .filter(|t| line.contains(t.as_str()))
                .collect();
            assert_eq!(found, vec![tag.to_string()], "line was {:?}", line);
            assert!(line.ends_with("value\n"));
        }
    }

    #[test]
    fn test_operations_at_error_threshold() {
        let logger = Logger::new(Severity::Error);
        for (operation, tag) in operations() {
            let mut out: Vec<u8> = Vec::new();
            operation(&logger, &mut out, &[&"trace"]);
            assert_eq!(!out.is_empty(), tag == "ERROR:", "{}", tag);
        }

        let mut out: Vec<u8> = Vec::new();
        logger.debug_to(&mut out, &[&"trace"]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_info_operation_scenario() {
        let logger = Logger::new(Severity::ALL);
        let mut out: Vec<u8> = Vec::new();
        logger.info_to(&mut out, &[&"Starting", &"server", &8080]);
        let line = String::from_utf8(out).unwrap();

        assert!(line.contains("\x1b[1;33mINFO:\x1b[0m     Starting server 8080\n"));
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            threshold: Severity::Warning,
        };
        let logger = Logger::from_config(&config);
        assert_eq!(logger.threshold(), Severity::Warning);
    }

    #[test]
    fn test_console_uses_default_threshold() {
        assert_eq!(CONSOLE.threshold(), DEFAULT_THRESHOLD);
        assert_eq!(Logger::default(), CONSOLE);
    }
}
