//! Conversation state for the chat panel

use super::message::{ChatEntry, ChatRole};

/// Text recorded when a message could not be answered
pub const EXECUTION_FAILURE_MESSAGE: &str = "Failed to get response from workflow";

/// Ordered chat entries.
///
/// A message in flight is represented by a [`PendingReply`], which borrows
/// the conversation mutably, so no other message can start until it settles.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    entries: Vec<ChatEntry>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record the user's message and open a pending reply for it.
    ///
    /// Returns `None` without recording anything when the message is blank.
    pub fn begin(&mut self, message: &str) -> Option<PendingReply<'_>> {
        if message.trim().is_empty() {
            return None;
        }

        self.entries.push(ChatEntry::user(message));
        Some(PendingReply {
            conversation: self,
            settled: false,
        })
    }

    /// Number of entries with the given role
    pub fn count(&self, role: ChatRole) -> usize {
        self.entries.iter().filter(|e| e.role == role).count()
    }

    pub fn last(&self) -> Option<&ChatEntry> {
        self.entries.last()
    }
}

/// The single outstanding reply of a conversation.
///
/// Settles exactly once: with [`complete`](Self::complete), with
/// [`fail`](Self::fail), or when dropped unsettled (a cancelled or timed-out
/// request), which records the failure entry.
#[derive(Debug)]
pub struct PendingReply<'a> {
    conversation: &'a mut Conversation,
    settled: bool,
}

impl PendingReply<'_> {
    /// Record the reply
    pub fn complete(mut self, reply: impl Into<String>) {
        self.settle(ChatEntry::assistant(reply));
    }

    /// Record a single failure entry
    pub fn fail(mut self) {
        self.settle(ChatEntry::error(EXECUTION_FAILURE_MESSAGE));
    }

    fn settle(&mut self, entry: ChatEntry) {
        if !self.settled {
            self.conversation.entries.push(entry);
            self.settled = true;
        }
    }
}

impl Drop for PendingReply<'_> {
    fn drop(&mut self) {
        self.settle(ChatEntry::error(EXECUTION_FAILURE_MESSAGE));
    }
}
