//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into collection-level APIs.
//! - Keep callers decoupled from storage details.

pub mod item_store;
