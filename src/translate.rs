//! Message translation: curated overrides first, then automatic collapsing
//! of structured legacy entries into a single prose title.

use regex::Captures;

use crate::domain::{Message, Revision};
use crate::rules::{self, MINORS, PLACEHOLDER, TITLE_RULES};

/// Repeatedly delete the first minor line until none is left or one line remains.
///
/// Patterns are tried in table order and, for each, lines in position order;
/// every deletion restarts the scan.
pub fn remove_minors(mut message: Message) -> Message {
    while message.len() > 1 {
        let found = MINORS.iter().find_map(|minor| {
            message
                .lines()
                .iter()
                .position(|line| minor.is_match(line))
        });

        match found {
            Some(index) => {
                message.remove(index);
            }
            None => break,
        }
    }

    message
}

/// How [`translate`] changed a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Translation {
    /// Content taken from the override table
    Override,
    /// Reduced to one prose title line
    Title,
    /// Left as it was
    Unchanged,
}

/// Run the title rules, or `None` when none of them fires
fn apply_title_rules(line: &str, revision: &Revision) -> Option<String> {
    let subject = format!("{}:{}", revision, line);

    let translated = TITLE_RULES
        .iter()
        .fold(subject.clone(), |text, (pattern, template)| {
            pattern.replace(&text, *template).into_owned()
        });

    if translated == subject {
        return None;
    }

    Some(
        PLACEHOLDER
            .replace_all(&translated, |captures: &Captures| captures[1].to_lowercase())
            .into_owned(),
    )
}

/// Collapse one structured line into prose.
///
/// Every rule runs in order against `"<revision>:<line>"`; if none fires the
/// line is returned as it was.
pub fn translate_title(line: &str, revision: &Revision) -> String {
    apply_title_rules(line, revision).unwrap_or_else(|| line.to_string())
}

/// Apply the override table, or shorten a structured message to its title.
///
/// Anything that cannot be reduced to one prose line is returned untouched,
/// minor lines included.
pub fn translate(mut message: Message, revision: &Revision) -> (Message, Translation) {
    if let Some(lines) = rules::override_for(revision.as_str()) {
        message.replace_with(lines.iter().copied());
        return (message, Translation::Override);
    }

    if message.is_blank() || !message.starts_with_marker() {
        return (message, Translation::Unchanged);
    }

    let majors = remove_minors(message.clone());
    let title = match majors.first_line() {
        Some(line) if majors.len() == 1 => apply_title_rules(line, revision),
        _ => None,
    };

    match title {
        Some(title) => {
            message.replace_with([title]);
            (message, Translation::Title)
        }
        None => (message, Translation::Unchanged),
    }
}
