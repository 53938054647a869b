//! N-Triples serializer for one ontology graph.
//!
//! One triple per line with absolute IRIs. List cells are written as
//! `_:bN` blank nodes, numbered per graph.

use crate::emitter::OntologyGraph;
use crate::model::{Literal, Node};

use super::turtle::quote;

/// Serializes `graph` to an N-Triples document.
#[must_use]
pub fn to_ntriples(graph: &OntologyGraph) -> String {
    let mut out = String::with_capacity(128 * 1024);
    for t in &graph.triples {
        out.push_str(&term(&t.subject));
        out.push_str(" <");
        out.push_str(&t.predicate);
        out.push_str("> ");
        out.push_str(&term(&t.object));
        out.push_str(" .\n");
    }
    out
}

fn term(node: &Node) -> String {
    match node {
        Node::Iri(iri) => format!("<{iri}>"),
        Node::Blank(b) => format!("_:b{}", b.0),
        Node::Literal(lit) => literal(lit),
    }
}

fn literal(lit: &Literal) -> String {
    match lit.datatype {
        Some(datatype) => format!("{}^^<{datatype}>", quote(&lit.value)),
        None => quote(&lit.value),
    }
}
