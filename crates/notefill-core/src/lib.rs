//! # notefill-core
//!
//! Core types, traits, and abstractions shared by the notefill workspace.
//!
//! This crate provides:
//! - The `Error` enum and `Result` alias used across all crates
//! - Record and field-value models with kind-aware emptiness rules
//! - Block-tree models for the to-do reset workflow
//! - Backend traits (`RecordStore`, `GenerationBackend`, `BlockStore`)
//!   so pipelines can run against fakes in tests
//! - Environment-variable configuration helpers

pub mod blocks;
pub mod config;
pub mod error;
pub mod records;
pub mod traits;

pub use blocks::{Block, BlockKind};
pub use config::{env_or, require_env};
pub use error::{Error, Result};
pub use records::{is_eligible, FieldKind, FieldValue, Record, UNTITLED};
pub use traits::{BlockStore, GenerationBackend, RecordStore};
