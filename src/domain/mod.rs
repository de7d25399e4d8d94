//! Domain types - the message being rewritten and its SVN revision

pub mod message;
pub mod revision;

pub use message::Message;
pub use revision::Revision;
