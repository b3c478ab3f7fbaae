//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the diary persistence boundary.
//! - Isolate SQLite query details from the store and list view.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod diary_repo;
