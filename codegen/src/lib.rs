//! Dymo artifact generator.
//!
//! Turns a [`Generation`] into the files of a build: Turtle and N-Triples
//! documents per ontology, the two JSON-LD context documents, and a
//! constants module in either TypeScript or Rust. [`write::write_all`]
//! writes the resulting [`Artifact`]s as one scoped batch.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod emit;
pub mod rust;
pub mod typescript;
pub mod write;

use std::path::PathBuf;

use anyhow::{Context, Result};
use dymo_ontology::Generation;
use serde_json::{Map, Value};

pub use write::{write_all, Artifact, WriteReport};

/// Target language of the constants module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// `uris.ts`, `terms.ts`, `contexts.ts`.
    #[default]
    TypeScript,
    /// A single `vocab.rs`.
    Rust,
}

/// Where a build puts its files.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Directory for the ontology documents and the JSON-LD contexts.
    pub ontologies_dir: PathBuf,
    /// Directory for the constants module.
    pub globals_dir: PathBuf,
    /// Language of the constants module.
    pub dialect: Dialect,
    /// Whether to write `.nt` siblings next to the `.n3` documents.
    pub ntriples: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            ontologies_dir: PathBuf::from("ontologies"),
            globals_dir: PathBuf::from("src/globals"),
            dialect: Dialect::TypeScript,
            ntriples: true,
        }
    }
}

/// The `URI_TO_TERM` dictionary: every registered URI mapped to its term.
#[must_use]
pub fn uri_to_term(generation: &Generation) -> Value {
    let dict: Map<String, Value> = generation
        .context
        .registry()
        .entries()
        .iter()
        .map(|e| (e.full_uri.clone(), Value::String(e.term.clone())))
        .collect();
    Value::Object(dict)
}

/// Renders the constants module files as `(file name, contents)` pairs.
///
/// # Errors
///
/// Returns an error if a context or the dictionary cannot be serialized.
pub fn constants(generation: &Generation, dialect: Dialect) -> Result<Vec<(&'static str, String)>> {
    Ok(match dialect {
        Dialect::TypeScript => vec![
            ("uris.ts", typescript::uris(generation)?),
            ("terms.ts", typescript::terms(generation)?),
            ("contexts.ts", typescript::contexts(generation)?),
        ],
        Dialect::Rust => vec![("vocab.rs", rust::vocab(generation)?)],
    })
}

/// Renders every artifact of a build, in write order.
///
/// # Errors
///
/// Returns an error if a context document or constants file cannot be rendered.
pub fn artifacts(generation: &Generation, layout: &Layout) -> Result<Vec<Artifact>> {
    let mut out = Vec::new();

    for built in &generation.ontologies {
        let stem = built.source.file_stem;
        out.push(Artifact::new(
            layout.ontologies_dir.join(format!("{stem}.n3")),
            generation.turtle(built),
        ));
        if layout.ntriples {
            out.push(Artifact::new(
                layout.ontologies_dir.join(format!("{stem}.nt")),
                generation.ntriples(built),
            ));
        }
    }

    let full = serde_json::to_string_pretty(&generation.full_context())
        .context("Failed to serialize the full context")?;
    let simple = serde_json::to_string_pretty(&generation.simple_context())
        .context("Failed to serialize the simple context")?;
    out.push(Artifact::new(layout.ontologies_dir.join("dymo-context.json"), full));
    out.push(Artifact::new(
        layout.ontologies_dir.join("dymo-context-simple.json"),
        simple,
    ));

    for (name, contents) in constants(generation, layout.dialect)? {
        out.push(Artifact::new(layout.globals_dir.join(name), contents));
    }

    Ok(out)
}
