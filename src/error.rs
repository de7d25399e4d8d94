use thiserror::Error;

/// Unified error type for svn-msg-rewrite operations
#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("Cannot detect SVN revision in footer: {0:?}")]
    MissingRevision(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in svn-msg-rewrite
pub type Result<T> = std::result::Result<T, RewriteError>;

impl RewriteError {
    /// Create a missing revision error for the offending footer line
    pub fn missing_revision(line: impl Into<String>) -> Self {
        RewriteError::MissingRevision(line.into())
    }
}
