//! Dynamic Music Object ontologies generated from typed Rust declarations.
//!
//! The `dymo-ontology` crate declares the expression, dymo and mobile audio
//! ontologies through a [`GenerationContext`], which keeps the term
//! registry, the JSON-LD contexts and the exported URI constants in step
//! with the emitted triples. Serializers produce Turtle, N-Triples and
//! JSON-LD context documents.
//!
//! # Entry Point
//!
//! ```
//! let generation = dymo_ontology::generate().expect("ontologies are consistent");
//! assert_eq!(generation.ontologies.len(), 3);
//! ```
//!
//! # Serialization
//!
//! ```
//! let generation = dymo_ontology::generate().expect("ontologies are consistent");
//! let turtle = generation.turtle(&generation.ontologies[0]);
//! let context = generation.full_context();
//! assert!(turtle.starts_with("@prefix rdf:"));
//! assert!(context["@context"]["@base"].is_string());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod context;
pub mod emitter;
pub mod error;
pub mod exports;
pub mod generation;
pub mod model;
pub mod ontologies;
pub mod prefixes;
pub mod registry;
pub mod serializer;

use serde_json::Value;

pub use context::{ContextBuilder, ContextEntry, ContextValue};
pub use emitter::{ActiveNamespace, OntologyGraph, TripleEmitter};
pub use error::{GenerationError, Result};
pub use exports::{ExportEntry, ExportTable};
pub use generation::{BuiltOntology, GenerationContext, OntologySource};
pub use model::{
    curie, ExportValue, Literal, LiteralValue, Node, PropertyKind, Reference, TermDefinition,
    Triple, TypeAnnotation,
};
pub use prefixes::{PrefixTable, CONTEXT_BASE, PREFIXES};
pub use registry::{constant_name, RegistryEntry, TermRegistry};

/// The result of one generation run.
#[derive(Debug)]
pub struct Generation {
    /// Every ontology in build order.
    pub ontologies: Vec<BuiltOntology>,
    /// Registry, contexts and exports accumulated across the run.
    pub context: GenerationContext,
}

impl Generation {
    /// Turtle document of one built ontology.
    #[must_use]
    pub fn turtle(&self, ontology: &BuiltOntology) -> String {
        serializer::turtle::to_turtle(&ontology.graph, self.context.prefixes())
    }

    /// N-Triples document of one built ontology.
    #[must_use]
    pub fn ntriples(&self, ontology: &BuiltOntology) -> String {
        serializer::ntriples::to_ntriples(&ontology.graph)
    }

    /// The full JSON-LD context, with `@type` coercions.
    #[must_use]
    pub fn full_context(&self) -> Value {
        let builder = self.context.context();
        serializer::jsonld::to_context(builder.full(), CONTEXT_BASE, builder.prefixes())
    }

    /// The simple JSON-LD context, names only.
    #[must_use]
    pub fn simple_context(&self) -> Value {
        let builder = self.context.context();
        serializer::jsonld::to_context(builder.simple(), CONTEXT_BASE, builder.prefixes())
    }

    /// Total number of triples across all ontologies.
    #[must_use]
    pub fn triple_count(&self) -> usize {
        self.ontologies.iter().map(|o| o.graph.len()).sum()
    }
}

/// Builds all three ontologies with the default prefix table.
///
/// The context and export preamble is added first; the ontologies follow in
/// [`ontologies::all`] order and share one registry, so later ontologies
/// can refer to terms of earlier ones.
///
/// # Errors
///
/// Returns the first [`GenerationError`] raised by any declaration.
pub fn generate() -> Result<Generation> {
    generate_with(GenerationContext::default(), &ontologies::all())
}

/// Builds `sources` in order on top of `context`.
///
/// # Errors
///
/// Returns the first [`GenerationError`] raised by the preamble or any
/// declaration.
pub fn generate_with(
    mut context: GenerationContext,
    sources: &[OntologySource],
) -> Result<Generation> {
    context.add_preamble()?;
    let ontologies = sources
        .iter()
        .map(|source| context.build(*source))
        .collect::<Result<Vec<_>>>()?;
    Ok(Generation {
        ontologies,
        context,
    })
}
