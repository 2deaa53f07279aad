//! Backend traits for notefill abstractions.
//!
//! These traits define the interfaces that concrete implementations must
//! satisfy, enabling pluggable backends and testability. Pipelines take
//! them by reference (dependency injection); there are no shared
//! singletons anywhere in the workspace.

use async_trait::async_trait;
use serde_json::{Map, Value as JsonValue};

use crate::blocks::Block;
use crate::error::Result;
use crate::records::Record;

/// Read/write access to a collection of records in the remote store.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch every record in a collection, following the remote's cursor
    /// pagination until exhausted. Order is the remote's order.
    async fn query_all(&self, collection_id: &str) -> Result<Vec<Record>>;

    /// Apply a partial field update to one record. `updates` is keyed by
    /// field display name and carries wire-shaped fragments (see the store
    /// crate's codec). Not transactional.
    async fn update_fields(&self, record_id: &str, updates: Map<String, JsonValue>) -> Result<()>;
}

/// Text generation over a rendered prompt.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate text for a prompt, requesting structured (JSON) output.
    /// One call per batch; never retried.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Get the model name being used.
    fn model_name(&self) -> &str;
}

/// Access to the remote block tree for the to-do reset workflow.
#[async_trait]
pub trait BlockStore: Send + Sync {
    /// List the direct children of a block, in remote order.
    async fn list_children(&self, block_id: &str) -> Result<Vec<Block>>;

    /// Set the checked state of a to-do block.
    async fn set_todo_checked(&self, block_id: &str, checked: bool) -> Result<()>;
}
