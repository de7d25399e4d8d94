//! User-facing diagnostics for the message filter.

pub mod formatter;

pub use formatter::{
    display_error, display_revision, display_status, format_error, format_revision,
    format_status,
};
