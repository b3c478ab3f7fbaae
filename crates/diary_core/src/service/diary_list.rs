//! Presentation-side list state over a `DiaryStore`.
//!
//! # Responsibility
//! - Cache the entries shown by the list screen.
//! - Render rows (title, date, body preview) for display.
//!
//! # Invariants
//! - A failed refresh leaves the cached items untouched.
//! - An entry leaves the cache only after its persisted delete succeeded.

use crate::model::diary::{DiaryEntry, DiaryId};
use crate::repo::diary_repo::DiaryRepository;
use crate::service::diary_store::{DiaryStore, StoreResult};
use once_cell::sync::Lazy;
use regex::Regex;

const PREVIEW_MAX_CHARS: usize = 100;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryRow {
    pub id: DiaryId,
    pub title: String,
    /// Unix epoch milliseconds; formatting is left to the caller.
    pub date: i64,
    /// Single-line body summary, `None` for blank bodies.
    pub preview: Option<String>,
}

impl From<&DiaryEntry> for DiaryRow {
    fn from(entry: &DiaryEntry) -> Self {
        Self {
            id: entry.id,
            title: entry.title.clone(),
            date: entry.date,
            preview: derive_body_preview(&entry.body),
        }
    }
}

/// Cached list of entries backing the list screen.
#[derive(Debug, Default)]
pub struct DiaryListView {
    items: Vec<DiaryEntry>,
}

impl DiaryListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reloads the cache from the store.
    ///
    /// # Errors
    /// Returns `ReadFailure` unchanged; the previous items stay visible.
    pub fn refresh<R: DiaryRepository>(&mut self, store: &DiaryStore<R>) -> StoreResult<()> {
        self.items = store.list()?;
        Ok(())
    }

    /// Deletes the entry at `index` and drops it from the cache.
    ///
    /// Returns `Ok(false)` for an out-of-range index.
    ///
    /// # Errors
    /// Returns `WriteFailure` when the persisted delete fails; the entry then
    /// stays in the cache.
    pub fn remove_at<R: DiaryRepository>(
        &mut self,
        store: &DiaryStore<R>,
        index: usize,
    ) -> StoreResult<bool> {
        let Some(entry) = self.items.get(index) else {
            return Ok(false);
        };

        store.delete(entry.id)?;
        self.items.remove(index);
        Ok(true)
    }

    pub fn items(&self) -> &[DiaryEntry] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&DiaryEntry> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn rows(&self) -> Vec<DiaryRow> {
        self.items.iter().map(DiaryRow::from).collect()
    }
}

/// Derives the single-line list preview from an entry body.
///
/// Whitespace runs collapse to one space and the first 100 chars are kept.
pub fn derive_body_preview(body: &str) -> Option<String> {
    let normalized = WHITESPACE_RE.replace_all(body, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(PREVIEW_MAX_CHARS).collect())
    }
}
