//! Turtle serializer for one ontology graph.
//!
//! Subjects are written in the order they were first emitted, each with its
//! predicates grouped (`;`) and repeated objects joined (`,`). RDF lists are
//! written inline as `( … )`, so list cells never appear as subjects.

use std::collections::HashMap;

use crate::emitter::OntologyGraph;
use crate::model::{iris, BlankNode, Literal, Node, Triple};
use crate::prefixes::PrefixTable;

/// Serializes `graph` to a Turtle document.
#[must_use]
pub fn to_turtle(graph: &OntologyGraph, prefixes: PrefixTable) -> String {
    let mut out = String::with_capacity(64 * 1024);

    for (prefix, ns) in prefixes.entries() {
        out.push_str(&format!("@prefix {prefix}: <{ns}> .\n"));
    }

    let writer = Writer { graph, prefixes };
    for (subject, triples) in group_by_subject(graph) {
        out.push('\n');
        out.push_str(&writer.node(subject));
        for (i, (predicate, objects)) in group_by_predicate(&triples).into_iter().enumerate() {
            out.push_str(if i == 0 { "\n    " } else { " ;\n    " });
            out.push_str(&writer.predicate(predicate));
            out.push(' ');
            let objects: Vec<String> = objects.into_iter().map(|o| writer.node(o)).collect();
            out.push_str(&objects.join(" , "));
        }
        out.push_str(" .\n");
    }

    out
}

struct Writer<'a> {
    graph: &'a OntologyGraph,
    prefixes: PrefixTable,
}

impl Writer<'_> {
    fn iri(&self, iri: &str) -> String {
        self.prefixes
            .compact(iri)
            .unwrap_or_else(|| format!("<{iri}>"))
    }

    fn predicate(&self, predicate: &str) -> String {
        if predicate == iris::RDF_TYPE {
            "a".to_owned()
        } else {
            self.iri(predicate)
        }
    }

    fn node(&self, node: &Node) -> String {
        match node {
            Node::Iri(iri) => self.iri(iri),
            Node::Blank(b) => match self.graph.lists.get(b) {
                Some(members) => {
                    let members: Vec<String> = members.iter().map(|m| self.node(m)).collect();
                    format!("( {} )", members.join(" "))
                }
                None => blank_label(*b),
            },
            Node::Literal(lit) => self.literal(lit),
        }
    }

    fn literal(&self, lit: &Literal) -> String {
        let quoted = quote(&lit.value);
        match lit.datatype {
            Some(datatype) => format!("{quoted}^^{}", self.iri(datatype)),
            None => quoted,
        }
    }
}

fn blank_label(b: BlankNode) -> String {
    format!("_:b{}", b.0)
}

/// Escapes a string into a double-quoted Turtle literal.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

// Subjects in first-emission order, list cells excluded.
fn group_by_subject(graph: &OntologyGraph) -> Vec<(&Node, Vec<&Triple>)> {
    let mut order: Vec<(&Node, Vec<&Triple>)> = Vec::new();
    let mut index: HashMap<&Node, usize> = HashMap::new();
    for t in &graph.triples {
        if let Node::Blank(b) = &t.subject {
            if graph.list_cells.contains(b) {
                continue;
            }
        }
        let slot = *index.entry(&t.subject).or_insert_with(|| {
            order.push((&t.subject, Vec::new()));
            order.len() - 1
        });
        order[slot].1.push(t);
    }
    order
}

fn group_by_predicate<'a>(triples: &[&'a Triple]) -> Vec<(&'a str, Vec<&'a Node>)> {
    let mut groups: Vec<(&'a str, Vec<&'a Node>)> = Vec::new();
    for t in triples {
        match groups.iter_mut().find(|(p, _)| *p == t.predicate) {
            Some((_, objects)) => objects.push(&t.object),
            None => groups.push((t.predicate.as_str(), vec![&t.object])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::TripleEmitter;

    fn graph() -> OntologyGraph {
        let mut e = TripleEmitter::new(PrefixTable::default());
        e.reset("ex").expect("known prefix");
        let f = Node::iri("http://tiny.cc/expression-ontology#Function");
        e.emit(f.clone(), iris::RDF_TYPE, Node::iri(iris::OWL_CLASS));
        let head = e.emit_list(vec![
            Node::iri("http://tiny.cc/expression-ontology#Accessor"),
            Node::iri("http://tiny.cc/expression-ontology#NamedFunction"),
        ]);
        e.emit(f.clone(), iris::OWL_UNION_OF, head);
        e.emit(
            f,
            iris::RDFS_COMMENT,
            Node::Literal(Literal::plain("say \"hi\"")),
        );
        e.finalize()
    }

    #[test]
    fn starts_with_every_prefix() {
        let ttl = to_turtle(&graph(), PrefixTable::default());
        for (prefix, ns) in PrefixTable::default().entries() {
            assert!(
                ttl.contains(&format!("@prefix {prefix}: <{ns}> .")),
                "Missing prefix declaration for '{prefix}'"
            );
        }
    }

    #[test]
    fn lists_are_inline_and_cells_are_hidden() {
        let ttl = to_turtle(&graph(), PrefixTable::default());
        assert!(ttl.contains("owl:unionOf ( ex:Accessor ex:NamedFunction )"));
        assert!(!ttl.contains("_:b"));
        assert!(!ttl.contains("rdf:first"));
    }

    #[test]
    fn subject_block_uses_a_and_escapes_literals() {
        let ttl = to_turtle(&graph(), PrefixTable::default());
        assert!(ttl.contains("ex:Function\n    a owl:Class ;"));
        assert!(ttl.contains(r#"rdfs:comment "say \"hi\"" ."#));
    }

    #[test]
    fn repeated_predicates_share_one_line() {
        let mut e = TripleEmitter::new(PrefixTable::default());
        e.reset("dy").expect("known prefix");
        let p = Node::iri("http://tiny.cc/dymo-ontology#hasBehavior");
        e.emit(p.clone(), iris::RDF_TYPE, Node::iri(iris::OWL_OBJECT_PROPERTY));
        e.emit(p, iris::RDF_TYPE, Node::iri(iris::OWL_FUNCTIONAL_PROPERTY));
        let ttl = to_turtle(&e.finalize(), PrefixTable::default());
        assert!(ttl.contains("a owl:ObjectProperty , owl:FunctionalProperty ."));
    }

    #[test]
    fn typed_literals_use_compact_datatypes() {
        let mut e = TripleEmitter::new(PrefixTable::default());
        e.reset("dy").expect("known prefix");
        e.emit(
            Node::iri("http://tiny.cc/dymo-ontology#Filter"),
            "http://tiny.cc/dymo-ontology#hasStandardValue",
            Node::Literal(Literal::typed("20000", iris::XSD_INTEGER)),
        );
        let ttl = to_turtle(&e.finalize(), PrefixTable::default());
        assert!(ttl.contains("dy:hasStandardValue \"20000\"^^xsd:integer ."));
    }
}
