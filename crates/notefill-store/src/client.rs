//! HTTP client for the record store.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::{json, Map, Value as JsonValue};
use tracing::{debug, info, warn};

use notefill_core::{Block, BlockStore, Error, Record, RecordStore, Result};

use crate::props::{decode_block, decode_record};

/// Default record store endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";

/// Protocol version header value sent with every request.
pub const STORE_VERSION: &str = "2022-06-28";

/// Maximum page size the query protocol allows. Always requested, to
/// minimize round-trips.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Bearer-authenticated record store client.
///
/// One instance per run, constructed at process start and passed by
/// parameter into the pipelines.
pub struct StoreClient {
    client: Client,
    base_url: String,
    token: String,
}

#[derive(Serialize)]
struct QueryRequest {
    page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_cursor: Option<String>,
}

impl StoreClient {
    /// Create a client with custom configuration.
    pub fn with_config(base_url: String, token: String) -> Self {
        info!("Initializing store client: url={}", base_url);
        Self {
            client: Client::new(),
            base_url,
            token,
        }
    }

    /// Create from environment variables.
    ///
    /// | Variable | Default | Description |
    /// |----------|---------|-------------|
    /// | `NOTION_API_KEY` | (required) | Bearer token |
    /// | `NOTION_BASE_URL` | `https://api.notion.com/v1` | API endpoint |
    pub fn from_env() -> Result<Self> {
        let token = notefill_core::require_env("NOTION_API_KEY")?;
        let base_url = notefill_core::env_or("NOTION_BASE_URL", DEFAULT_BASE_URL);
        Ok(Self::with_config(base_url, token))
    }

    fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.bearer_auth(&self.token)
            .header("Notion-Version", STORE_VERSION)
    }

    /// POST the query endpoint for one page of results.
    async fn query_page(
        &self,
        collection_id: &str,
        cursor: Option<String>,
    ) -> Result<JsonValue> {
        let request = QueryRequest {
            page_size: MAX_PAGE_SIZE,
            start_cursor: cursor,
        };
        let response = self
            .auth(
                self.client
                    .post(format!("{}/databases/{}/query", self.base_url, collection_id)),
            )
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::RemoteQuery(format!("query request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RemoteQuery(format!(
                "query returned {}: {}",
                status, body
            )));
        }

        response
            .json::<JsonValue>()
            .await
            .map_err(|e| Error::RemoteQuery(format!("query body unreadable: {}", e)))
    }

    /// GET one page of block children.
    async fn children_page(&self, block_id: &str, cursor: Option<String>) -> Result<JsonValue> {
        let mut url = format!(
            "{}/blocks/{}/children?page_size={}",
            self.base_url, block_id, MAX_PAGE_SIZE
        );
        if let Some(cursor) = cursor {
            url.push_str(&format!("&start_cursor={}", cursor));
        }
        let response = self
            .auth(self.client.get(url))
            .send()
            .await
            .map_err(|e| Error::RemoteQuery(format!("children request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RemoteQuery(format!(
                "children returned {}: {}",
                status, body
            )));
        }

        response
            .json::<JsonValue>()
            .await
            .map_err(|e| Error::RemoteQuery(format!("children body unreadable: {}", e)))
    }
}

/// Pull `results` out of a paginated response body, plus the continuation
/// cursor when `has_more` is set.
fn page_results(body: &JsonValue) -> Result<(&Vec<JsonValue>, Option<String>)> {
    let results = body
        .get("results")
        .and_then(JsonValue::as_array)
        .ok_or_else(|| Error::RemoteQuery("response missing 'results' array".to_string()))?;
    let has_more = body
        .get("has_more")
        .and_then(JsonValue::as_bool)
        .unwrap_or(false);
    let cursor = if has_more {
        body.get("next_cursor")
            .and_then(JsonValue::as_str)
            .map(str::to_string)
    } else {
        None
    };
    Ok((results, cursor))
}

#[async_trait]
impl RecordStore for StoreClient {
    async fn query_all(&self, collection_id: &str) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0u32;

        loop {
            let body = self.query_page(collection_id, cursor.take()).await?;
            let (results, next) = page_results(&body)?;
            for page in results {
                records.push(decode_record(page)?);
            }
            pages += 1;
            match next {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        debug!(
            collection_id,
            pages,
            record_count = records.len(),
            "query complete"
        );
        Ok(records)
    }

    async fn update_fields(&self, record_id: &str, updates: Map<String, JsonValue>) -> Result<()> {
        let response = self
            .auth(
                self.client
                    .patch(format!("{}/pages/{}", self.base_url, record_id)),
            )
            .json(&json!({ "properties": updates }))
            .send()
            .await
            .map_err(|e| Error::RecordWrite(format!("page {}: {}", record_id, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(record_id, %status, "update rejected");
            return Err(Error::RecordWrite(format!(
                "page {}: status {}: {}",
                record_id, status, body
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl BlockStore for StoreClient {
    async fn list_children(&self, block_id: &str) -> Result<Vec<Block>> {
        let mut blocks = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let body = self.children_page(block_id, cursor.take()).await?;
            let (results, next) = page_results(&body)?;
            for block in results {
                blocks.push(decode_block(block)?);
            }
            match next {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }
        Ok(blocks)
    }

    async fn set_todo_checked(&self, block_id: &str, checked: bool) -> Result<()> {
        let response = self
            .auth(
                self.client
                    .patch(format!("{}/blocks/{}", self.base_url, block_id)),
            )
            .json(&json!({"to_do": {"checked": checked}}))
            .send()
            .await
            .map_err(|e| Error::RecordWrite(format!("block {}: {}", block_id, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RecordWrite(format!(
                "block {}: status {}: {}",
                block_id, status, body
            )));
        }
        Ok(())
    }
}
