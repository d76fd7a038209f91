//! Severity levels
//!
//! Ordered from most restrictive to most permissive. A threshold is itself a
//! `Severity`; `Verbose` doubles as the "all" sentinel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ANSI reset sequence written after every tag
pub const RESET: &str = "\x1b[0m";

/// Width of the tag column (tag text plus padding)
pub const TAG_WIDTH: usize = 10;

/// Severity of a log line, and the threshold a logger filters against
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Severity {
    /// Failures
    Error,
    /// Recoverable problems
    Warning,
    /// Developer diagnostics
    Debug,
    /// Normal operational messages
    Info,
    /// Everything; also the "all" threshold
    #[serde(rename = "all")]
    Verbose,
}

impl Severity {
    /// Threshold that lets every line through
    pub const ALL: Severity = Severity::Verbose;

    /// Get the display name for this level
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Verbose => "VERBOSE",
        }
    }

    /// Get the bold ANSI color escape used for the tag
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Error => "\x1b[1;31m",
            Severity::Warning => "\x1b[1;35m",
            Severity::Debug => "\x1b[1;34m",
            Severity::Info => "\x1b[1;33m",
            Severity::Verbose => "\x1b[1;37m",
        }
    }

    /// Tag text as written in the line, e.g. `ERROR:`
    pub fn tag(&self) -> String {
        format!("{}:", self.name())
    }

    /// Spaces written after the tag so the message column lines up
    pub fn padding(&self) -> &'static str {
        const SPACES: &str = "          ";
        let used = self.name().len() + 1;
        &SPACES[..TAG_WIDTH.saturating_sub(used)]
    }

    /// Level compared against the threshold when deciding whether to emit
    ///
    /// Verbose lines are gated at `Info`, so they show up whenever info
    /// lines do. `Verbose` still sorts above `Info` as a threshold.
    pub fn gate(&self) -> Severity {
        match self {
            Severity::Verbose => Severity::Info,
            other => *other,
        }
    }

    /// All levels, most restrictive first
    pub fn iter_all() -> impl Iterator<Item = Severity> {
        [
            Severity::Error,
            Severity::Warning,
            Severity::Debug,
            Severity::Info,
            Severity::Verbose,
        ]
        .into_iter()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name a severity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity '{0}' (expected error, warning, debug, info, verbose or all)")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "verbose" | "all" => Ok(Severity::Verbose),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Severity {
    type Error = ParseSeverityError;

    fn try_from(s: String) -> Result<Self, ParseSeverityError> {
        s.parse()
    }
}
