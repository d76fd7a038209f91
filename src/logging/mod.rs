//! Leveled console logging
//!
//! Writes one timestamped, color-tagged line per enabled call to stdout.
//! Lines above the logger's threshold are dropped before any work is done.

mod logger;
mod macros;
pub mod render;
mod severity;
pub mod timestamp;

pub use logger::{Logger, CONSOLE, DEFAULT_THRESHOLD};
pub use severity::{ParseSeverityError, Severity, RESET, TAG_WIDTH};
