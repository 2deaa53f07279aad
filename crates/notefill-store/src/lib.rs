//! # notefill-store
//!
//! Notion-protocol record store client.
//!
//! This crate provides:
//! - `StoreClient`: bearer-authenticated HTTP client implementing the
//!   `RecordStore` and `BlockStore` traits (cursor pagination, partial
//!   page updates, block-tree access)
//! - `props`: wire property JSON to `FieldValue` decoding
//! - `codec`: `FieldKind` to wire update fragment encoding

pub mod client;
pub mod codec;
pub mod props;

pub use client::{StoreClient, DEFAULT_BASE_URL, MAX_PAGE_SIZE, STORE_VERSION};
