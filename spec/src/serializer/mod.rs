//! Serializers for the generated artifacts.
//!
//! - **Turtle** ([`turtle`]): the `.n3` ontology documents
//! - **N-Triples** ([`ntriples`]): the `.nt` siblings, one absolute triple per line
//! - **JSON-LD** ([`jsonld`]): the full and simple context documents

pub mod jsonld;
pub mod ntriples;
pub mod turtle;
