//! Domain model for diary entries.
//!
//! # Invariants
//! - Every entry is identified by a stable `DiaryId`.
//! - Deletion is permanent; there are no tombstones.

pub mod diary;
