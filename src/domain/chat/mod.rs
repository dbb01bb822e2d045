//! Chat domain module
//!
//! The test conversation held against a built workflow, plus the transient
//! status banner the builder shows after a build.

mod conversation;
mod message;
mod status;

pub use conversation::{Conversation, PendingReply, EXECUTION_FAILURE_MESSAGE};
pub use message::{ChatEntry, ChatRole};
pub use status::{StatusBanner, StatusLevel, DEFAULT_STATUS_CLEAR};
