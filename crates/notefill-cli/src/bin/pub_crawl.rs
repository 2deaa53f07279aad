//! Order the pub list into a crawl from home and fill missing notes.
//!
//! Environment: `NOTION_API_KEY`, `PUB_CRAWL_DATABASE_ID`, `HOME_LOCATION`,
//! `HOME_LAT`, `HOME_LON`, optional `OLLAMA_BASE` / `OLLAMA_GEN_MODEL`.

use tracing::info;

use notefill_core::{require_env, Result};
use notefill_gen::OllamaBackend;
use notefill_pipeline::{run_annotation, workflows};
use notefill_store::StoreClient;

async fn run() -> Result<()> {
    let database_id = require_env("PUB_CRAWL_DATABASE_ID")?;
    let home_name = require_env("HOME_LOCATION")?;
    let home = notefill_cli::require_home_coords()?;
    let store = StoreClient::from_env()?;
    let backend = OllamaBackend::from_env();

    let summary = run_annotation(
        &store,
        &backend,
        &workflows::pub_crawl(home),
        &database_id,
        &[("home", home_name)],
    )
    .await?;
    info!(
        updated = summary.updated,
        skipped = summary.skipped,
        "pub crawl done"
    );
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    notefill_cli::init();
    notefill_cli::finish(run().await);
}
