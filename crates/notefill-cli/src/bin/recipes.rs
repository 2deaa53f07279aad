//! Fill missing ingredient lists and cooking instructions in the recipe
//! database.
//!
//! Environment: `NOTION_API_KEY`, `RECIPES_DATABASE_ID`, optional
//! `OLLAMA_BASE` / `OLLAMA_GEN_MODEL`.

use tracing::info;

use notefill_core::{require_env, Result};
use notefill_gen::OllamaBackend;
use notefill_pipeline::{run_annotation, workflows};
use notefill_store::StoreClient;

async fn run() -> Result<()> {
    let database_id = require_env("RECIPES_DATABASE_ID")?;
    let store = StoreClient::from_env()?;
    let backend = OllamaBackend::from_env();

    let summary = run_annotation(&store, &backend, &workflows::recipes(), &database_id, &[]).await?;
    info!(
        updated = summary.updated,
        skipped = summary.skipped,
        "recipes done"
    );
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    notefill_cli::init();
    notefill_cli::finish(run().await);
}
