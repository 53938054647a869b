//! Triple emission scoped to one ontology namespace.
//!
//! The emitter collects triples and RDF collections for the ontology being
//! built and hands them over as an [`OntologyGraph`] on
//! [`finalize`](TripleEmitter::finalize). Serializers in
//! [`crate::serializer`] turn the graph into text.

use std::collections::{BTreeMap, HashSet};

use crate::error::Result;
use crate::model::{iris, BlankNode, Node, Triple};
use crate::prefixes::PrefixTable;

/// The active namespace of an emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveNamespace {
    /// Short prefix (e.g. `"dy"`).
    pub prefix: &'static str,
    /// Namespace IRI the prefix maps to.
    pub iri: &'static str,
}

/// All triples emitted for one ontology.
#[derive(Debug, Clone, Default)]
pub struct OntologyGraph {
    /// Namespace the triples were emitted under, if any was set.
    pub namespace: Option<ActiveNamespace>,
    /// Triples in emission order, list cells included.
    pub triples: Vec<Triple>,
    /// Ordered members of each list, keyed by the list's head cell.
    pub lists: BTreeMap<BlankNode, Vec<Node>>,
    /// Every blank node that is a list cell.
    pub list_cells: HashSet<BlankNode>,
}

impl OntologyGraph {
    /// Number of triples, list cells included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns `true` if nothing was emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Triples whose subject is the given IRI, in emission order.
    pub fn about<'a>(&'a self, subject: &'a str) -> impl Iterator<Item = &'a Triple> + 'a {
        self.triples
            .iter()
            .filter(move |t| t.subject.as_iri() == Some(subject))
    }

    /// Returns `true` if `(subject, predicate, object)` was emitted with an
    /// IRI object.
    #[must_use]
    pub fn contains_iri(&self, subject: &str, predicate: &str, object: &str) -> bool {
        self.about(subject)
            .any(|t| t.predicate == predicate && t.object.as_iri() == Some(object))
    }

    /// Walks the `rdf:first` / `rdf:rest` chain starting at `head`.
    ///
    /// Returns the members in order, or `None` if the chain is broken or does
    /// not end in `rdf:nil`.
    #[must_use]
    pub fn walk_list(&self, head: &Node) -> Option<Vec<Node>> {
        let mut members = Vec::new();
        let mut cursor = head.clone();
        let mut visited = HashSet::new();
        loop {
            match cursor {
                Node::Iri(ref iri) if iri == iris::RDF_NIL => return Some(members),
                Node::Blank(b) if visited.insert(b) => {
                    let first = self.object_of(&cursor, iris::RDF_FIRST)?;
                    let rest = self.object_of(&cursor, iris::RDF_REST)?;
                    members.push(first);
                    cursor = rest;
                }
                _ => return None,
            }
        }
    }

    fn object_of(&self, subject: &Node, predicate: &str) -> Option<Node> {
        self.triples
            .iter()
            .find(|t| &t.subject == subject && t.predicate == predicate)
            .map(|t| t.object.clone())
    }
}

/// Accumulates triples for the ontology currently being built.
#[derive(Debug)]
pub struct TripleEmitter {
    prefixes: PrefixTable,
    graph: OntologyGraph,
    next_blank: usize,
}

impl TripleEmitter {
    /// Creates an emitter with no active namespace.
    #[must_use]
    pub fn new(prefixes: PrefixTable) -> Self {
        Self {
            prefixes,
            graph: OntologyGraph::default(),
            next_blank: 0,
        }
    }

    /// Discards in-flight triples and activates the namespace of `prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::UnknownPrefix`](crate::GenerationError::UnknownPrefix)
    /// if `prefix` is not in the prefix table.
    pub fn reset(&mut self, prefix: &str) -> Result<ActiveNamespace> {
        let (prefix, iri) = self.prefixes.entry(prefix)?;
        let namespace = ActiveNamespace { prefix, iri };
        self.graph = OntologyGraph {
            namespace: Some(namespace),
            ..OntologyGraph::default()
        };
        self.next_blank = 0;
        Ok(namespace)
    }

    /// The active namespace, if [`reset`](Self::reset) has been called.
    #[must_use]
    pub fn namespace(&self) -> Option<ActiveNamespace> {
        self.graph.namespace
    }

    /// Records one triple.
    pub fn emit(&mut self, subject: Node, predicate: impl Into<String>, object: Node) {
        self.graph.triples.push(Triple {
            subject,
            predicate: predicate.into(),
            object,
        });
    }

    /// Encodes `items` as an RDF collection and returns its head.
    ///
    /// Each item gets one blank cell with `rdf:first` pointing at the item and
    /// `rdf:rest` pointing at the next cell; the last cell's `rdf:rest` is
    /// `rdf:nil`. The empty list is `rdf:nil` itself.
    pub fn emit_list(&mut self, items: Vec<Node>) -> Node {
        if items.is_empty() {
            return Node::iri(iris::RDF_NIL);
        }
        let cells: Vec<BlankNode> = (0..items.len()).map(|_| self.fresh_blank()).collect();
        for (i, item) in items.iter().enumerate() {
            let cell = cells[i];
            let rest = cells
                .get(i + 1)
                .map_or_else(|| Node::iri(iris::RDF_NIL), |next| Node::Blank(*next));
            self.emit(Node::Blank(cell), iris::RDF_FIRST, item.clone());
            self.emit(Node::Blank(cell), iris::RDF_REST, rest);
            self.graph.list_cells.insert(cell);
        }
        let head = cells[0];
        self.graph.lists.insert(head, items);
        Node::Blank(head)
    }

    /// Hands over everything emitted since the last reset.
    ///
    /// The emitter keeps its namespace but holds no triples afterwards.
    pub fn finalize(&mut self) -> OntologyGraph {
        let namespace = self.graph.namespace;
        self.next_blank = 0;
        std::mem::replace(
            &mut self.graph,
            OntologyGraph {
                namespace,
                ..OntologyGraph::default()
            },
        )
    }

    fn fresh_blank(&mut self) -> BlankNode {
        let b = BlankNode(self.next_blank);
        self.next_blank += 1;
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emitter() -> TripleEmitter {
        let mut e = TripleEmitter::new(PrefixTable::default());
        e.reset("ex").expect("ex is a known prefix");
        e
    }

    #[test]
    fn list_of_three_has_three_cells_ending_in_nil() {
        let mut e = emitter();
        let items = vec![Node::iri("urn:a"), Node::iri("urn:b"), Node::iri("urn:c")];
        let head = e.emit_list(items.clone());
        let graph = e.finalize();

        assert_eq!(graph.list_cells.len(), 3);
        assert_eq!(graph.len(), 6);
        let firsts = graph
            .triples
            .iter()
            .filter(|t| t.predicate == iris::RDF_FIRST)
            .count();
        assert_eq!(firsts, 3);
        let nils = graph
            .triples
            .iter()
            .filter(|t| t.predicate == iris::RDF_REST && t.object.as_iri() == Some(iris::RDF_NIL))
            .count();
        assert_eq!(nils, 1);
        assert_eq!(graph.walk_list(&head), Some(items));
    }

    #[test]
    fn empty_list_is_nil() {
        let mut e = emitter();
        let head = e.emit_list(Vec::new());
        assert_eq!(head, Node::iri(iris::RDF_NIL));
        let graph = e.finalize();
        assert!(graph.is_empty());
        assert!(graph.list_cells.is_empty());
        assert_eq!(graph.walk_list(&head), Some(Vec::new()));
    }

    #[test]
    fn reset_discards_in_flight_triples() {
        let mut e = emitter();
        e.emit(Node::iri("urn:s"), "urn:p", Node::iri("urn:o"));
        let ns = e.reset("dy").expect("dy is a known prefix");
        assert_eq!(ns.prefix, "dy");
        assert_eq!(ns.iri, "http://tiny.cc/dymo-ontology#");
        assert!(e.finalize().is_empty());
    }

    #[test]
    fn reset_rejects_unknown_prefix() {
        let mut e = TripleEmitter::new(PrefixTable::default());
        assert!(e.reset("zz").is_err());
        assert_eq!(e.namespace(), None);
    }

    #[test]
    fn finalize_reflects_every_prior_emit() {
        let mut e = emitter();
        e.emit(Node::iri("urn:s"), "urn:p", Node::iri("urn:o"));
        let head = e.emit_list(vec![Node::iri("urn:x")]);
        e.emit(Node::iri("urn:s"), "urn:q", head);
        let graph = e.finalize();
        assert_eq!(graph.len(), 4);
        assert!(graph.contains_iri("urn:s", "urn:p", "urn:o"));
        assert!(e.finalize().is_empty());
    }
}
