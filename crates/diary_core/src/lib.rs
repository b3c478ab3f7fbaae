//! Core domain logic for the diary app.
//! This crate owns diary persistence and the list-screen state rules.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, flush_logging, init_logging, logging_status};
pub use model::diary::{now_epoch_ms, DiaryEntry, DiaryId};
pub use repo::diary_repo::{DiaryRepository, RepoError, RepoResult, SqliteDiaryRepository};
pub use service::diary_list::{derive_body_preview, DiaryListView, DiaryRow};
pub use service::diary_store::{DiaryStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
