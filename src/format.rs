//! Final git-style layout: every message opens with `r<revision>`.

use std::fmt;

use crate::domain::{Message, Revision};
use crate::translate::{self, Translation};

/// Which path a message took through the rewrite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing but blank lines above the footer
    Empty,
    /// Replaced from the override table
    Override,
    /// Kept verbatim below a bare `r<revision>` title
    Preserved,
    /// Structured entry collapsed into an inline title
    Titled,
    /// Prose message that only got the revision prefix
    Prose,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Empty => write!(f, "empty message"),
            Outcome::Override => write!(f, "replaced from override table"),
            Outcome::Preserved => write!(f, "structured body preserved"),
            Outcome::Titled => write!(f, "title rewritten"),
            Outcome::Prose => write!(f, "prose title kept"),
        }
    }
}

/// Translate a message body and give it its revision title.
///
/// Expects the footer to be already removed and the body to be non-blank.
pub fn update(mut message: Message, revision: &Revision) -> (Message, Outcome) {
    message.pop_trailing_blank();

    let (mut message, translation) = translate::translate(message, revision);

    if message.is_blank() {
        return (Message::from_lines([revision.marker()]), Outcome::Empty);
    }

    let layout = if message.starts_with_marker() {
        message.prepend(format!("{}\n\n", revision.marker()));
        Outcome::Preserved
    } else {
        if let Some(first) = message.first_line() {
            let title = format!("{}: {}", revision.marker(), strip_period(first));
            message.set_first_line(title);
        }
        Outcome::Titled
    };

    let outcome = match (translation, layout) {
        (Translation::Override, _) => Outcome::Override,
        (Translation::Unchanged, Outcome::Titled) => Outcome::Prose,
        (_, layout) => layout,
    };

    (message, outcome)
}

/// Drop one trailing period (and trailing spaces) from a title line,
/// keeping its line terminator.
pub fn strip_period(line: &str) -> String {
    let body = line.trim_end_matches(['\n', '\r']);
    let terminator = &line[body.len()..];

    let body = body.trim_end();
    let body = match body.strip_suffix('.') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => body,
    };

    format!("{}{}", body, terminator)
}

/// Full rewrite of a message whose footer is already removed
pub fn finalize(message: Message, revision: &Revision) -> (Message, Outcome) {
    if message.is_blank() {
        (Message::from_lines([revision.marker()]), Outcome::Empty)
    } else {
        update(message, revision)
    }
}
