//! Renders a full build into a scratch directory and reads it back.

use std::fs;

use dymo_codegen::{artifacts, write_all, Dialect, Layout};

fn layout(root: &std::path::Path, dialect: Dialect) -> Layout {
    Layout {
        ontologies_dir: root.join("ontologies"),
        globals_dir: root.join("src/globals"),
        dialect,
        ntriples: true,
    }
}

#[test]
fn full_build_lands_on_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let generation = dymo_ontology::generate().expect("ontologies are consistent");
    let files = artifacts(&generation, &layout(dir.path(), Dialect::TypeScript)).expect("renders");

    let report = write_all(&files);
    assert!(report.is_success());
    assert_eq!(report.written.len(), files.len());

    for artifact in &files {
        let on_disk = fs::read_to_string(&artifact.path).expect("written");
        assert_eq!(on_disk, artifact.contents, "{}", artifact.path.display());
    }

    for name in ["dymo-context.json", "dymo-context-simple.json"] {
        let text = fs::read_to_string(dir.path().join("ontologies").join(name)).expect("context");
        let doc: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
        assert!(doc["@context"]["@base"].is_string());
    }

    let terms = fs::read_to_string(dir.path().join("src/globals/terms.ts")).expect("terms.ts");
    assert!(terms.contains("URI_TO_TERM"));
}

#[test]
fn unwritable_target_is_reported_per_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    // A regular file where the globals directory should go.
    fs::create_dir_all(dir.path().join("src")).expect("src");
    fs::write(dir.path().join("src/globals"), "").expect("blocker");

    let generation = dymo_ontology::generate().expect("ontologies are consistent");
    let files = artifacts(&generation, &layout(dir.path(), Dialect::Rust)).expect("renders");
    let report = write_all(&files);

    assert!(!report.is_success());
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, dir.path().join("src/globals/vocab.rs"));
    // Ontology documents and contexts still land.
    assert_eq!(report.written.len(), files.len() - 1);
    assert!(dir.path().join("ontologies/dymo-ontology.n3").is_file());
}
