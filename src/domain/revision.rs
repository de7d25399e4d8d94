use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::Message;
use crate::error::{Result, RewriteError};

static FOOTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"git-svn-id.*@(\d+)").expect("Invalid footer regex"));

/// SVN revision number taken from the git-svn-id footer.
///
/// Kept as the original digit string: it is both a lookup key and output text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Revision(String);

impl Revision {
    pub fn new(digits: impl Into<String>) -> Self {
        Revision(digits.into())
    }

    /// Pop the footer off `message` and read the revision out of it.
    ///
    /// The footer is consumed even when it fails to match, but callers abort
    /// in that case so nothing is written.
    pub fn extract(message: &mut Message) -> Result<Self> {
        let footer = message.pop_footer().unwrap_or_default();
        Self::parse_footer(&footer)
    }

    /// Match a single `git-svn-id: <url>@<revision> <uuid>` line
    pub fn parse_footer(footer: &str) -> Result<Self> {
        FOOTER_REGEX
            .captures(footer)
            .and_then(|captures| captures.get(1))
            .map(|digits| Revision::new(digits.as_str()))
            .ok_or_else(|| RewriteError::missing_revision(footer))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `r<revision>` marker every rewritten message opens with
    pub fn marker(&self) -> String {
        format!("r{}", self.0)
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
