//! JSON-LD context documents.
//!
//! A context document is `{"@context": {"@base": …, <prefixes>, <terms>}}`.
//! Key order is the insertion order of the prefix table and the context
//! builder (`serde_json` is built with `preserve_order`).

use serde_json::{json, Map, Value};

use crate::context::{ContextEntry, ContextValue};
use crate::prefixes::PrefixTable;

/// Builds the JSON value of a context document.
#[must_use]
pub fn to_context(entries: &[ContextEntry], base: &str, prefixes: PrefixTable) -> Value {
    let mut ctx = Map::new();
    ctx.insert("@base".to_owned(), json!(base));
    for (prefix, ns) in prefixes.entries() {
        ctx.insert((*prefix).to_owned(), json!(ns));
    }
    for entry in entries {
        ctx.insert(entry.term.clone(), value_to_json(&entry.value));
    }
    json!({ "@context": Value::Object(ctx) })
}

/// Pretty-printed context document.
///
/// # Errors
///
/// Propagates `serde_json` serialization errors.
pub fn to_context_string(
    entries: &[ContextEntry],
    base: &str,
    prefixes: PrefixTable,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&to_context(entries, base, prefixes))
}

fn value_to_json(value: &ContextValue) -> Value {
    match value {
        ContextValue::Name(id) => json!(id),
        ContextValue::Typed {
            id,
            type_annotation,
        } => json!({ "@id": id, "@type": type_annotation.as_str() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ContextBuilder;
    use crate::model::TypeAnnotation;
    use crate::prefixes::CONTEXT_BASE;

    fn builder() -> ContextBuilder {
        let mut b = ContextBuilder::new(PrefixTable::default());
        b.add_term("rdf", "value", None, None).expect("add");
        b.add_term("dy", "paramType", Some("hasParameterType"), Some(TypeAnnotation::Vocab))
            .expect("add");
        b
    }

    #[test]
    fn keys_keep_insertion_order() {
        let b = builder();
        let doc = to_context(b.full(), CONTEXT_BASE, PrefixTable::default());
        let keys: Vec<&str> = doc["@context"]
            .as_object()
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default();
        assert_eq!(keys[0], "@base");
        assert_eq!(keys[1], "rdf");
        assert_eq!(keys[11], "ex");
        assert_eq!(&keys[12..], ["value", "paramType"]);
    }

    #[test]
    fn full_and_simple_differ_only_in_typed_terms() {
        let b = builder();
        let full = to_context(b.full(), CONTEXT_BASE, PrefixTable::default());
        let simple = to_context(b.simple(), CONTEXT_BASE, PrefixTable::default());
        assert_eq!(full["@context"]["@base"], json!(CONTEXT_BASE));
        assert_eq!(full["@context"]["value"], json!("rdf:value"));
        assert_eq!(
            full["@context"]["paramType"],
            json!({ "@id": "dy:hasParameterType", "@type": "@vocab" })
        );
        assert_eq!(simple["@context"]["paramType"], json!("dy:hasParameterType"));
    }

    #[test]
    fn string_form_is_valid_json() {
        let b = builder();
        let text = to_context_string(b.full(), CONTEXT_BASE, PrefixTable::default())
            .expect("serializes");
        let parsed: Value = serde_json::from_str(&text).expect("parses back");
        assert_eq!(parsed, to_context(b.full(), CONTEXT_BASE, PrefixTable::default()));
    }
}
