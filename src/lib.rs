//! Rewrites commit messages of a git-svn migrated history into clean git
//! messages titled `r<revision>`.
//!
//! Meant to run as the message filter of a history rewrite, once per commit:
//!
//! ```text
//! git filter-branch -f --msg-filter svn-msg-rewrite
//! ```

use std::io::Read;

pub mod domain;
pub mod error;
pub mod format;
pub mod rules;
pub mod translate;
pub mod ui;

pub use domain::{Message, Revision};
pub use error::{Result, RewriteError};
pub use format::Outcome;

/// Result of rewriting one commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub revision: Revision,
    pub message: Message,
    pub outcome: Outcome,
}

impl Rewrite {
    /// The text to hand back to the history rewrite
    pub fn render(&self) -> String {
        self.message.render()
    }
}

/// Rewrite one raw commit message, footer included.
///
/// Fails only when the last line is not a git-svn-id footer.
pub fn rewrite(input: &str) -> Result<Rewrite> {
    let mut message = Message::parse(input);
    let revision = Revision::extract(&mut message)?;
    let (message, outcome) = format::finalize(message, &revision);

    Ok(Rewrite {
        revision,
        message,
        outcome,
    })
}

/// Read a whole message from `reader` and rewrite it
pub fn rewrite_from<R: Read>(mut reader: R) -> Result<Rewrite> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    rewrite(&input)
}
