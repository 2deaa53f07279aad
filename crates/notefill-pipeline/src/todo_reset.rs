//! Recurring to-do list reset.
//!
//! Walks the block tree under a root page and unchecks every checked to-do
//! item, one sequential write at a time. Traversal uses an explicit
//! worklist rather than recursion, and its order is a contract: depth-first,
//! pre-order, children in remote order.

use tracing::{info, warn};

use notefill_core::{Block, BlockStore, Result};

/// Counts from one reset run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResetSummary {
    /// Blocks visited under the root.
    pub visited: usize,
    /// Checked to-dos successfully unchecked.
    pub unchecked: usize,
    /// Uncheck writes that failed and were logged.
    pub write_failures: usize,
}

/// Visit every block under `root_id` depth-first, pre-order.
///
/// The root itself is not part of the result. Children are fetched lazily
/// and pushed in reverse so the first child is popped first.
pub async fn traverse_preorder(store: &dyn BlockStore, root_id: &str) -> Result<Vec<Block>> {
    let mut order = Vec::new();
    let mut stack = {
        let mut children = store.list_children(root_id).await?;
        children.reverse();
        children
    };

    while let Some(block) = stack.pop() {
        let children = if block.has_children {
            Some(store.list_children(&block.id).await?)
        } else {
            None
        };
        order.push(block);
        if let Some(mut children) = children {
            children.reverse();
            stack.append(&mut children);
        }
    }
    Ok(order)
}

/// Uncheck every checked to-do under `root_id`.
///
/// Write failures are logged and the rest of the tree is still processed;
/// only traversal failures abort.
pub async fn reset_checked_todos(store: &dyn BlockStore, root_id: &str) -> Result<ResetSummary> {
    let blocks = traverse_preorder(store, root_id).await?;
    let mut summary = ResetSummary {
        visited: blocks.len(),
        ..ResetSummary::default()
    };

    for block in blocks.iter().filter(|b| b.is_checked_todo()) {
        match store.set_todo_checked(&block.id, false).await {
            Ok(()) => summary.unchecked += 1,
            Err(e) => {
                warn!(block_id = %block.id, error = %e, "uncheck failed, continuing");
                summary.write_failures += 1;
            }
        }
    }

    info!(
        root_id,
        visited = summary.visited,
        unchecked = summary.unchecked,
        write_failures = summary.write_failures,
        "reset complete"
    );
    Ok(summary)
}
