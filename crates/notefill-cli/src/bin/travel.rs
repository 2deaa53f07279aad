//! Fill missing descriptions, regions, and ratings in the travel wishlist.
//!
//! Environment: `NOTION_API_KEY`, `TRAVEL_DATABASE_ID`, `HOME_LOCATION`,
//! optional `OLLAMA_BASE` / `OLLAMA_GEN_MODEL`.

use tracing::info;

use notefill_core::{require_env, Result};
use notefill_gen::OllamaBackend;
use notefill_pipeline::{run_annotation, workflows};
use notefill_store::StoreClient;

async fn run() -> Result<()> {
    let database_id = require_env("TRAVEL_DATABASE_ID")?;
    let home = require_env("HOME_LOCATION")?;
    let store = StoreClient::from_env()?;
    let backend = OllamaBackend::from_env();

    let summary = run_annotation(
        &store,
        &backend,
        &workflows::travel(),
        &database_id,
        &[("home", home)],
    )
    .await?;
    info!(
        updated = summary.updated,
        skipped = summary.skipped,
        "travel done"
    );
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    notefill_cli::init();
    notefill_cli::finish(run().await);
}
