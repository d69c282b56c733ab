//! Question entity - represents a poll prompt

use chrono::{DateTime, Duration, Utc};

/// Window, in hours, within which a question counts as recently published
pub const RECENT_WINDOW_HOURS: i64 = 24;

/// Question entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    /// Create a new Question
    pub fn new(id: i64, text: String, pub_date: DateTime<Utc>) -> Self {
        Self { id, text, pub_date }
    }

    /// Check if the question is visible as of `now` (publish date not in the future)
    #[inline]
    pub fn is_published_at(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }

    /// Check if the question is currently published
    #[inline]
    pub fn is_published(&self) -> bool {
        self.is_published_at(Utc::now())
    }

    /// Check if the question was published within the last day as of `now`.
    ///
    /// Future publish dates are never "recent". Used for display and tests,
    /// never for visibility.
    pub fn was_published_recently_at(&self, now: DateTime<Utc>) -> bool {
        let window_start = now - Duration::hours(RECENT_WINDOW_HOURS);
        window_start <= self.pub_date && self.pub_date <= now
    }

    /// Check if the question was published within the last day
    pub fn was_published_recently(&self) -> bool {
        self.was_published_recently_at(Utc::now())
    }
}
