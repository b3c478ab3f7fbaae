//! Diary store use-case service.
//!
//! # Responsibility
//! - Provide list/create/update/delete entry points for presentation callers.
//! - Classify repository failures as read or write failures.
//! - Log every failed mutation; nothing is swallowed.
//!
//! # Invariants
//! - `create` never touches storage; the entry exists only after `save`.
//! - `update` only changes stored entries; it never re-creates a deleted one.
//! - `list` order is `date DESC, id ASC`.
//! - The store remains storage-agnostic.

use crate::model::diary::{DiaryEntry, DiaryId};
use crate::repo::diary_repo::{DiaryRepository, RepoError};
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error kinds surfaced by the diary store.
#[derive(Debug)]
pub enum StoreError {
    /// Listing or loading entries failed.
    ReadFailure(RepoError),
    /// Saving, updating or deleting an entry failed.
    WriteFailure(RepoError),
}

impl StoreError {
    /// Underlying repository error.
    pub fn repo_error(&self) -> &RepoError {
        match self {
            Self::ReadFailure(err) | Self::WriteFailure(err) => err,
        }
    }

    pub fn is_read_failure(&self) -> bool {
        matches!(self, Self::ReadFailure(_))
    }

    pub fn is_write_failure(&self) -> bool {
        matches!(self, Self::WriteFailure(_))
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadFailure(err) => write!(f, "failed to load diary entries: {err}"),
            Self::WriteFailure(err) => write!(f, "failed to write diary entry: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.repo_error())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Diary store facade over a repository implementation.
pub struct DiaryStore<R: DiaryRepository> {
    repo: R,
}

impl<R: DiaryRepository> DiaryStore<R> {
    /// Creates a store over the provided repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every stored entry, newest first.
    pub fn list(&self) -> StoreResult<Vec<DiaryEntry>> {
        match self.repo.fetch_all() {
            Ok(entries) => {
                debug!(
                    "event=diary_list module=store status=ok count={}",
                    entries.len()
                );
                Ok(entries)
            }
            Err(err) => {
                error!("event=diary_list module=store status=error error={err}");
                Err(StoreError::ReadFailure(err))
            }
        }
    }

    /// Loads one entry for the detail flow.
    pub fn get(&self, id: DiaryId) -> StoreResult<Option<DiaryEntry>> {
        self.repo.get_entry(id).map_err(|err| {
            error!("event=diary_get module=store status=error id={id} error={err}");
            StoreError::ReadFailure(err)
        })
    }

    /// Returns a fresh, unsaved entry with a generated ID dated now.
    pub fn create(&self) -> DiaryEntry {
        DiaryEntry::new()
    }

    /// Persists an entry from `create` for the first time.
    ///
    /// Saving an ID that is already stored is a `WriteFailure`.
    pub fn save(&self, entry: &DiaryEntry) -> StoreResult<()> {
        finish_write("diary_save", entry.id, self.repo.insert_entry(entry))
    }

    /// Persists edited `title`, `body` and `date` of a stored entry.
    ///
    /// An entry that is no longer stored (for example deleted while a detail
    /// screen still held it) is `WriteFailure(NotFound)` and is not re-created.
    pub fn update(&self, entry: &DiaryEntry) -> StoreResult<()> {
        finish_write("diary_update", entry.id, self.repo.update_entry(entry))
    }

    /// Permanently deletes one entry.
    ///
    /// Unknown IDs are reported as `WriteFailure(NotFound)`.
    pub fn delete(&self, id: DiaryId) -> StoreResult<()> {
        finish_write("diary_delete", id, self.repo.delete_entry(id))
    }
}

fn finish_write(event: &str, id: DiaryId, result: Result<(), RepoError>) -> StoreResult<()> {
    match result {
        Ok(()) => {
            info!("event={event} module=store status=ok id={id}");
            Ok(())
        }
        Err(err) => {
            error!("event={event} module=store status=error id={id} error={err}");
            Err(StoreError::WriteFailure(err))
        }
    }
}
