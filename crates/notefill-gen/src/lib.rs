//! # notefill-gen
//!
//! Text generation backend for the annotation workflows.
//!
//! One implementation: the Ollama chat API, asked for strict JSON output.
//! The backend makes exactly one call per batch and never retries; a
//! failure here aborts the whole run.

pub mod ollama;

pub use ollama::{OllamaBackend, DEFAULT_GEN_MODEL, DEFAULT_OLLAMA_URL, GEN_TIMEOUT_SECS};
