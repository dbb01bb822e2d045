//! Transient status banner shown after a build

use std::time::{Duration, Instant};

/// How long a success banner stays up
pub const DEFAULT_STATUS_CLEAR: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    Warning,
}

/// Status line of the builder toolbar.
///
/// Warnings stay until replaced; success messages expire after the clear
/// window. Time is passed in by the caller.
#[derive(Debug, Clone)]
pub struct StatusBanner {
    message: Option<(StatusLevel, String)>,
    expires_at: Option<Instant>,
    clear_after: Duration,
}

impl StatusBanner {
    pub fn new(clear_after: Duration) -> Self {
        Self {
            message: None,
            expires_at: None,
            clear_after,
        }
    }

    pub fn show_success(&mut self, message: impl Into<String>, now: Instant) {
        self.message = Some((StatusLevel::Success, message.into()));
        self.expires_at = Some(now + self.clear_after);
    }

    pub fn show_warning(&mut self, message: impl Into<String>) {
        self.message = Some((StatusLevel::Warning, message.into()));
        self.expires_at = None;
    }

    /// The message visible at `now`, if any
    pub fn visible_at(&self, now: Instant) -> Option<(StatusLevel, &str)> {
        if self.expires_at.is_some_and(|deadline| now >= deadline) {
            return None;
        }

        self.message
            .as_ref()
            .map(|(level, text)| (*level, text.as_str()))
    }
}

impl Default for StatusBanner {
    fn default() -> Self {
        Self::new(DEFAULT_STATUS_CLEAR)
    }
}
