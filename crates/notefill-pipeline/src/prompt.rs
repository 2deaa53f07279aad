//! Prompt template rendering.
//!
//! Templates carry a `{records}` placeholder that gets replaced with a
//! numbered list of record display names, 1-based, in input order. The
//! response array is later zipped back to records by that position, so the
//! order guarantee here is a correctness invariant, not a formatting nicety.
//! Additional `{key}` placeholders are filled from per-run context values.

/// Placeholder for the numbered record list.
pub const RECORDS_PLACEHOLDER: &str = "{records}";

/// A prompt template with named placeholders.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Render the template.
    ///
    /// `names` become the numbered `{records}` list, entry `k` holding the
    /// k-th input name verbatim. `context` pairs fill `{key}` placeholders.
    pub fn render(&self, names: &[String], context: &[(&str, String)]) -> String {
        let list = names
            .iter()
            .enumerate()
            .map(|(i, name)| format!("{}. {}", i + 1, name))
            .collect::<Vec<_>>()
            .join("\n");

        let mut rendered = self.template.replace(RECORDS_PLACEHOLDER, &list);
        for (key, value) in context {
            rendered = rendered.replace(&format!("{{{}}}", key), value);
        }
        rendered
    }
}
