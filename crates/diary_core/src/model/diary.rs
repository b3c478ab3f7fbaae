//! Diary entry domain model.
//!
//! # Responsibility
//! - Define the canonical record behind the list and detail screens.
//! - Provide constructors that assign identity and the default date.
//!
//! # Invariants
//! - `id` is stable and never reused for another entry.
//! - `title` and `body` may be empty.
//! - `date` is Unix epoch milliseconds.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for one diary entry.
pub type DiaryId = Uuid;

/// One diary record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryEntry {
    /// Assigned at creation; never changes.
    pub id: DiaryId,
    pub title: String,
    pub body: String,
    /// Unix epoch milliseconds.
    pub date: i64,
}

impl DiaryEntry {
    /// Creates an empty entry with a generated ID dated now.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4(), now_epoch_ms())
    }

    /// Creates an empty entry with a caller-provided ID and date.
    ///
    /// Used by read paths and tests where identity already exists.
    pub fn with_id(id: DiaryId, date: i64) -> Self {
        Self {
            id,
            title: String::new(),
            body: String::new(),
            date,
        }
    }

    /// Builder-style setter for `title`.
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder-style setter for `body`.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

impl Default for DiaryEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// Current wall-clock time in epoch milliseconds.
///
/// Clocks set before 1970 collapse to `0` instead of failing.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
