//! The batch annotation pipeline.
//!
//! A single linear pass with no back-edges:
//! collect names → build prompt → generate → parse/validate → per record,
//! compute the still-empty update subset → write or skip.
//!
//! Correlation between request and response is positional: entry `k` of the
//! response array annotates the k-th eligible record. Nothing in the
//! protocol enforces that the model preserves order or count, so a short
//! response is handled explicitly: one warning, missing tail entries mean
//! "nothing to update" for those records, never an error.
//!
//! Per-record write failures are logged and skipped; only batch-level
//! failures (query, generation, parse, shape) abort the run. Because only
//! still-empty fields are ever written, a rerun after a mid-batch crash is
//! safe: already-annotated records produce empty update sets and are
//! skipped.

use serde_json::Map;
use tracing::{debug, info, warn};

use notefill_core::{is_eligible, FieldKind, GenerationBackend, Record, RecordStore, Result};
use notefill_store::codec;

use crate::prompt::PromptTemplate;
use crate::response::parse_json;
use crate::schema::{validate_items, FieldSpec};

/// Maps one annotation result field to one remote record field.
#[derive(Debug, Clone)]
pub struct FieldMapping {
    /// Remote field display name.
    pub property: String,
    /// Key in the annotation result object.
    pub result_key: String,
    /// Target field kind, selects the codec.
    pub kind: FieldKind,
}

impl FieldMapping {
    pub fn new(
        property: impl Into<String>,
        result_key: impl Into<String>,
        kind: FieldKind,
    ) -> Self {
        Self {
            property: property.into(),
            result_key: result_key.into(),
            kind,
        }
    }
}

/// Reorders eligible records before name collection (pub crawl routing).
pub type Arrange = Box<dyn Fn(Vec<Record>) -> Vec<Record> + Send + Sync>;

/// Static configuration for one annotation workflow.
pub struct AnnotationWorkflow {
    /// Workflow name, for logging only.
    pub name: &'static str,
    /// Field holding the record display name.
    pub name_field: String,
    /// A record is eligible when at least one of these is empty.
    pub required_fields: Vec<String>,
    /// Prompt template with `{records}` and context placeholders.
    pub template: PromptTemplate,
    /// Top-level array key expected in the response.
    pub items_key: String,
    /// Required fields of each response element.
    pub schema: Vec<FieldSpec>,
    /// Result field to remote field translations.
    pub mappings: Vec<FieldMapping>,
    /// Optional reordering of eligible records before prompting.
    pub arrange: Option<Arrange>,
}

/// Counts from one pipeline run, for logging and tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Records fetched from the collection.
    pub total: usize,
    /// Records with at least one required field empty.
    pub eligible: usize,
    /// Result objects the response supplied for eligible records.
    pub annotated: usize,
    /// Records written.
    pub updated: usize,
    /// Records skipped with an empty update set.
    pub skipped: usize,
    /// Per-record writes that failed and were logged.
    pub write_failures: usize,
    /// Response count differed from request count.
    pub count_mismatch: bool,
}

/// Run one batch annotation pass over a collection.
///
/// `context` pairs fill the workflow template's named placeholders.
pub async fn run_annotation(
    store: &dyn RecordStore,
    backend: &dyn GenerationBackend,
    workflow: &AnnotationWorkflow,
    collection_id: &str,
    context: &[(&str, String)],
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    let records = store.query_all(collection_id).await?;
    summary.total = records.len();

    let mut eligible: Vec<Record> = records
        .into_iter()
        .filter(|r| is_eligible(r, &workflow.required_fields))
        .collect();
    if let Some(arrange) = &workflow.arrange {
        eligible = arrange(eligible);
    }
    summary.eligible = eligible.len();

    info!(
        workflow = workflow.name,
        total = summary.total,
        eligible = summary.eligible,
        "collected records"
    );
    if eligible.is_empty() {
        return Ok(summary);
    }

    let names: Vec<String> = eligible
        .iter()
        .map(|r| r.display_name(&workflow.name_field))
        .collect();
    let prompt = workflow.template.render(&names, context);
    debug!(prompt_len = prompt.len(), model = backend.model_name(), "prompt rendered");

    let raw = backend.generate(&prompt).await?;
    let decoded = parse_json(&raw)?;
    let items = validate_items(&decoded, &workflow.items_key, &workflow.schema)?;

    if items.len() != eligible.len() {
        summary.count_mismatch = true;
        warn!(
            workflow = workflow.name,
            requested = eligible.len(),
            returned = items.len(),
            "annotation count mismatch, missing entries are skipped"
        );
    }

    for (i, record) in eligible.iter().enumerate() {
        let Some(item) = items.get(i) else {
            continue;
        };
        summary.annotated += 1;

        let mut updates = Map::new();
        for mapping in &workflow.mappings {
            if !record.field_is_empty(&mapping.property) {
                continue;
            }
            let Some(value) = item.get(&mapping.result_key) else {
                continue;
            };
            if let Some(fragment) = codec::update_fragment(mapping.kind, value) {
                updates.insert(mapping.property.clone(), fragment);
            }
        }

        if updates.is_empty() {
            debug!(record_id = %record.id, "nothing to update, skipping");
            summary.skipped += 1;
            continue;
        }

        match store.update_fields(&record.id, updates).await {
            Ok(()) => summary.updated += 1,
            Err(e) => {
                warn!(record_id = %record.id, error = %e, "record write failed, continuing");
                summary.write_failures += 1;
            }
        }
    }

    info!(
        workflow = workflow.name,
        updated = summary.updated,
        skipped = summary.skipped,
        write_failures = summary.write_failures,
        "run complete"
    );
    Ok(summary)
}
