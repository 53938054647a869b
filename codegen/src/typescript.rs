//! TypeScript constants: `uris.ts`, `terms.ts` and `contexts.ts`.

use anyhow::{Context, Result};
use dymo_ontology::{ExportValue, Generation};

use crate::emit::SourceFile;
use crate::uri_to_term;

/// Renders `uris.ts`: one `export const` per export table entry.
///
/// # Errors
///
/// Returns an error if a value cannot be encoded as a string literal.
pub fn uris(generation: &Generation) -> Result<String> {
    let mut f = SourceFile::new("//", "URI constants of the dymo ontologies.");
    for entry in generation.context.exports().entries() {
        let line = match &entry.value {
            ExportValue::Scalar(value) => {
                format!("export const {}: string = {};", entry.name, string_literal(value)?)
            }
            ExportValue::ListLiteral(values) => {
                let items = values
                    .iter()
                    .map(|v| string_literal(v))
                    .collect::<Result<Vec<_>>>()?;
                format!(
                    "export const {}: string[] = [{}];",
                    entry.name,
                    items.join(", ")
                )
            }
        };
        f.line(&line);
    }
    Ok(f.finish())
}

/// Renders `terms.ts`: the `URI_TO_TERM` dictionary.
///
/// # Errors
///
/// Returns an error if the dictionary cannot be serialized.
pub fn terms(generation: &Generation) -> Result<String> {
    let dict = serde_json::to_string(&uri_to_term(generation))
        .context("Failed to serialize URI_TO_TERM")?;
    let mut f = SourceFile::new("//", "Full URI to JSON-LD context term.");
    f.line(&format!("export const URI_TO_TERM: Record<string, string> = {dict};"));
    Ok(f.finish())
}

/// Renders `contexts.ts`: `DYMO_CONTEXT` and `DYMO_SIMPLE_CONTEXT`.
///
/// # Errors
///
/// Returns an error if a context cannot be serialized.
pub fn contexts(generation: &Generation) -> Result<String> {
    let full = serde_json::to_string_pretty(&generation.full_context())
        .context("Failed to serialize the full context")?;
    let simple = serde_json::to_string_pretty(&generation.simple_context())
        .context("Failed to serialize the simple context")?;
    let mut f = SourceFile::new("//", "JSON-LD contexts of the dymo ontologies.");
    f.line(&format!("export const DYMO_CONTEXT = {full};"));
    f.blank();
    f.line(&format!("export const DYMO_SIMPLE_CONTEXT = {simple};"));
    Ok(f.finish())
}

// JSON string syntax is valid TypeScript string syntax.
fn string_literal(s: &str) -> Result<String> {
    serde_json::to_string(s).context("Failed to encode string literal")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generation() -> Generation {
        dymo_ontology::generate().expect("ontologies are consistent")
    }

    #[test]
    fn uris_start_with_the_preamble() {
        let text = uris(&generation()).expect("renders");
        let consts: Vec<&str> = text
            .lines()
            .filter(|l| l.starts_with("export const "))
            .collect();
        assert_eq!(
            consts[0],
            "export const CONTEXT_URI: string = \"http://tiny.cc/dymo-context/\";"
        );
        assert!(consts.contains(
            &"export const VAR_NAME: string = \"http://tiny.cc/expression-ontology#varName\";"
        ));
        assert!(consts.contains(
            &"export const PLAYBACK_RATE: string = \"http://tiny.cc/dymo-ontology#PlaybackRate\";"
        ));
    }

    #[test]
    fn list_exports_render_as_arrays() {
        let mut g = generation();
        g.context
            .exports_mut()
            .add(
                "DYMO_TYPES",
                ExportValue::ListLiteral(vec!["a".to_owned(), "b".to_owned()]),
            )
            .expect("new name");
        let text = uris(&g).expect("renders");
        assert!(text.contains("export const DYMO_TYPES: string[] = [\"a\", \"b\"];"));
    }

    #[test]
    fn terms_include_structured_and_bare_terms() {
        let text = terms(&generation()).expect("renders");
        assert!(text.contains(r#""http://tiny.cc/dymo-ontology#hasParameterType":"paramType""#));
        assert!(text.contains(r#""http://tiny.cc/expression-ontology#Expression":"Expression""#));
    }

    #[test]
    fn contexts_declare_both_constants() {
        let text = contexts(&generation()).expect("renders");
        assert!(text.contains("export const DYMO_CONTEXT = {"));
        assert!(text.contains("export const DYMO_SIMPLE_CONTEXT = {"));
        assert!(text.contains("\"@base\": \"http://tiny.cc/dymo-context/\""));
    }
}
