//! Rust constants: one `vocab.rs` module.

use anyhow::{Context, Result};
use dymo_ontology::{ExportValue, Generation};

use crate::emit::SourceFile;
use crate::uri_to_term;

/// Renders `vocab.rs` with the URI constants, `URI_TO_TERM` and both contexts.
///
/// # Errors
///
/// Returns an error if a context cannot be serialized.
pub fn vocab(generation: &Generation) -> Result<String> {
    let mut f = SourceFile::new("//!", "Vocabulary of the dymo ontologies.");

    for entry in generation.context.exports().entries() {
        match &entry.value {
            ExportValue::Scalar(value) => {
                f.doc_comment(&format!("`{value}`"));
                f.line(&format!("pub const {}: &str = {value:?};", entry.name));
            }
            ExportValue::ListLiteral(values) => {
                let items: Vec<String> = values.iter().map(|v| format!("{v:?}")).collect();
                f.line(&format!(
                    "pub const {}: &[&str] = &[{}];",
                    entry.name,
                    items.join(", ")
                ));
            }
        }
    }
    f.blank();

    f.doc_comment("Full URI to JSON-LD context term, in declaration order.");
    f.line("pub const URI_TO_TERM: &[(&str, &str)] = &[");
    if let serde_json::Value::Object(dict) = uri_to_term(generation) {
        for (uri, term) in &dict {
            if let Some(term) = term.as_str() {
                f.line(&format!("    ({uri:?}, {term:?}),"));
            }
        }
    }
    f.line("];");
    f.blank();

    let full = serde_json::to_string_pretty(&generation.full_context())
        .context("Failed to serialize the full context")?;
    let simple = serde_json::to_string_pretty(&generation.simple_context())
        .context("Failed to serialize the simple context")?;
    f.doc_comment("The full JSON-LD context.");
    f.line(&format!("pub const DYMO_CONTEXT: &str = {};", raw_string(&full)));
    f.blank();
    f.doc_comment("The simple JSON-LD context.");
    f.line(&format!(
        "pub const DYMO_SIMPLE_CONTEXT: &str = {};",
        raw_string(&simple)
    ));

    Ok(f.finish())
}

/// Wraps `s` in a raw string literal with enough `#`s to hold it.
fn raw_string(s: &str) -> String {
    let mut longest = 0;
    let mut run = None;
    for c in s.chars() {
        run = match (c, run) {
            ('"', _) => Some(0),
            ('#', Some(n)) => Some(n + 1),
            _ => None,
        };
        if let Some(n) = run {
            longest = longest.max(n);
        }
    }
    let hashes = "#".repeat(longest + 1);
    format!("r{hashes}\"{s}\"{hashes}")
}
