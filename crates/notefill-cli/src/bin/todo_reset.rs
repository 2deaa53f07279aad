//! Reset the recurring to-do list: uncheck every completed item under the
//! configured page.
//!
//! Environment: `NOTION_API_KEY`, `TODO_PAGE_ID`.

use tracing::info;

use notefill_core::{require_env, Result};
use notefill_pipeline::reset_checked_todos;
use notefill_store::StoreClient;

async fn run() -> Result<()> {
    let page_id = require_env("TODO_PAGE_ID")?;
    let store = StoreClient::from_env()?;

    let summary = reset_checked_todos(&store, &page_id).await?;
    info!(
        visited = summary.visited,
        unchecked = summary.unchecked,
        "todo reset done"
    );
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    notefill_cli::init();
    notefill_cli::finish(run().await);
}
