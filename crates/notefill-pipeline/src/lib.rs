//! # notefill-pipeline
//!
//! The batch annotation pipeline and its collaborators.
//!
//! This crate provides:
//! - `prompt`: template rendering with a numbered, order-preserving record list
//! - `schema`: one reusable structural validator over field-kind descriptors
//! - `response`: code-fence stripping and JSON parsing of model output
//! - `annotate`: the fetch → filter → prompt → generate → validate → write pass
//! - `route`: greedy nearest-neighbor ordering for the pub crawl workflow
//! - `todo_reset`: worklist-based block-tree traversal for recurring to-do lists
//! - `workflows`: static per-workflow configuration

pub mod annotate;
pub mod prompt;
pub mod response;
pub mod route;
pub mod schema;
pub mod todo_reset;
pub mod workflows;

pub use annotate::{run_annotation, AnnotationWorkflow, FieldMapping, RunSummary};
pub use prompt::PromptTemplate;
pub use response::{parse_json, strip_code_fence};
pub use route::{crawl_order, haversine_km, nearest_neighbor_route, Waypoint};
pub use schema::{validate_items, FieldSpec, ValueKind};
pub use todo_reset::{reset_checked_todos, traverse_preorder, ResetSummary};
