//! Line rendering
//!
//! Turns a severity and a list of displayable values into one output line.

use std::fmt::{Display, Write};

use super::severity::{Severity, RESET};

/// Render values in order, separated by a single space
pub fn join_values(args: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (i, value) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing into a String cannot fail
        let _ = write!(out, "{}", value);
    }
    out
}

/// Render a full line: timestamp, colored tag, padding, values, newline
pub fn render_line(timestamp: &str, severity: Severity, args: &[&dyn Display]) -> String {
    let mut line = format!(
        "{} {}{}{}{}",
        timestamp,
        severity.color(),
        severity.tag(),
        RESET,
        severity.padding()
    );
    line.push_str(&join_values(args));
    line.push('\n');
    line
}
