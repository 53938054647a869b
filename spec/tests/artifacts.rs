//! Parses every generated artifact with an independent RDF / JSON stack.

use dymo_ontology::{generate, Generation};
use sophia_api::graph::Graph;
use sophia_api::source::TripleSource;
use sophia_inmem::graph::FastGraph;

fn generation() -> Generation {
    generate().expect("ontologies are consistent")
}

fn parse_turtle(text: &str) -> FastGraph {
    sophia_turtle::parser::turtle::parse_str(text)
        .collect_triples()
        .expect("valid Turtle")
}

fn parse_ntriples(text: &str) -> FastGraph {
    sophia_turtle::parser::nt::parse_str(text)
        .collect_triples()
        .expect("valid N-Triples")
}

#[test]
fn turtle_and_ntriples_agree_on_triple_count() {
    let g = generation();
    for built in &g.ontologies {
        let ttl = parse_turtle(&g.turtle(built));
        let nt = parse_ntriples(&g.ntriples(built));
        let ttl_count = ttl.triples().count();
        assert_eq!(
            ttl_count,
            nt.triples().count(),
            "Triple count mismatch for '{}'",
            built.source.file_stem
        );
        assert_eq!(
            ttl_count,
            built.graph.len(),
            "Serialized triples differ from emitted triples for '{}'",
            built.source.file_stem
        );
    }
}

#[test]
fn union_lists_survive_turtle_round_trip() {
    let g = generation();
    let expression = &g.ontologies[0];
    let ttl = g.turtle(expression);
    assert!(ttl.contains("ex:Function\n    a owl:Class ;\n    owl:unionOf ( ex:PropertyFunction ex:NamedFunction ex:Accessor ) ."));

    // Three cells, each with rdf:first and rdf:rest, plus the rest of the graph.
    let nt = g.ntriples(expression);
    let cells = nt
        .lines()
        .filter(|l| l.contains("<http://www.w3.org/1999/02/22-rdf-syntax-ns#first>"))
        .count();
    assert_eq!(cells, 3);
}

#[test]
fn contexts_are_valid_json_with_matching_terms() {
    let g = generation();
    let full: serde_json::Value =
        serde_json::from_str(&serde_json::to_string_pretty(&g.full_context()).expect("serializes"))
            .expect("valid JSON");
    let simple: serde_json::Value = serde_json::from_str(
        &serde_json::to_string_pretty(&g.simple_context()).expect("serializes"),
    )
    .expect("valid JSON");

    let full_keys: Vec<&String> = full["@context"]
        .as_object()
        .expect("context object")
        .keys()
        .collect();
    let simple_keys: Vec<&String> = simple["@context"]
        .as_object()
        .expect("context object")
        .keys()
        .collect();
    assert_eq!(full_keys, simple_keys);
    assert_eq!(full["@context"]["@base"], "http://tiny.cc/dymo-context/");
    assert!(full["@context"]["hasDymo"].is_null());
    assert_eq!(
        full["@context"]["dymo"],
        serde_json::json!({ "@id": "mb:hasDymo", "@type": "@id" })
    );
    assert_eq!(simple["@context"]["dymo"], "mb:hasDymo");
    assert_eq!(full["@context"]["parts"], "ch:hasPart");
}

#[test]
fn cross_ontology_references_resolve_to_absolute_iris() {
    let g = generation();
    let mobile = &g.ontologies[2];
    let nt = g.ntriples(mobile);
    assert!(nt.contains(
        "<http://tiny.cc/mobile-audio-ontology#hasDymo> <http://www.w3.org/2000/01/rdf-schema#range> <http://tiny.cc/dymo-ontology#Dymo> ."
    ));
    assert!(nt.contains(
        "<http://tiny.cc/mobile-audio-ontology#Rendering> <http://www.w3.org/2000/01/rdf-schema#subClassOf> <http://purl.org/ontology/studio/multitrack#MultitrackProject> ."
    ));
}
