//! Diagnostic output.
//!
//! Everything here goes to stderr: stdout carries the rewritten message and
//! must stay clean. `console` drops the colours when stderr is not a terminal.

use console::style;

use crate::domain::Revision;

/// Format the per-commit progress line.
pub fn format_revision(revision: &Revision) -> String {
    format!("Revision {}", style(revision).bold())
}

/// Format an error line with a red prefix.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red(), message)
}

/// Format a status line with a yellow arrow.
pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

/// Print the revision being rewritten.
///
/// The leading newline separates it from the filter-branch progress counter,
/// which rewrites its own line without terminating it.
pub fn display_revision(revision: &Revision) {
    eprintln!("\n{}", format_revision(revision));
}

/// Print an error message.
pub fn display_error(message: &str) {
    eprintln!("\n{}", format_error(message));
}

/// Print a status message.
pub fn display_status(message: &str) {
    eprintln!("{}", format_status(message));
}
