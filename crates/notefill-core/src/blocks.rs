//! Block-tree models for the to-do reset workflow.

use serde::{Deserialize, Serialize};

/// What a block is, as far as the reset workflow cares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// A to-do item with its text and checked state.
    Todo { text: String, checked: bool },
    /// Any other block type; traversed for children but never modified.
    Other,
}

/// One node in the remote block tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    pub kind: BlockKind,
    /// Remote flag; children are fetched lazily during traversal.
    pub has_children: bool,
}

impl Block {
    /// A checked to-do block is the only thing the reset workflow rewrites.
    pub fn is_checked_todo(&self) -> bool {
        matches!(self.kind, BlockKind::Todo { checked: true, .. })
    }
}
