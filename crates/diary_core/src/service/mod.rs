//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep presentation callers decoupled from storage details.

pub mod diary_list;
pub mod diary_store;
