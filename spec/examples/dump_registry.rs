//! Builds the ontologies and prints the registry and a context preview.
//!
//! Run with: `cargo run --example dump_registry -p dymo-ontology`

fn main() {
    let generation = match dymo_ontology::generate() {
        Ok(generation) => generation,
        Err(e) => {
            eprintln!("Generation failed: {e}");
            std::process::exit(1);
        }
    };

    println!("Dymo ontologies");
    println!("  Ontologies:    {}", generation.ontologies.len());
    println!("  Triples:       {}", generation.triple_count());
    println!("  Terms:         {}", generation.context.registry().len());
    println!("  Exports:       {}", generation.context.exports().entries().len());
    println!();

    for built in &generation.ontologies {
        println!(
            "  {:4} {:45} {:>4} triples",
            built.source.prefix,
            built.source.file_stem,
            built.graph.len(),
        );
    }

    println!();

    for entry in generation.context.registry().entries() {
        println!("  {:24} {:24} {}", entry.short_name, entry.term, entry.full_uri);
    }

    println!();

    // Full context (first 200 chars).
    let json_str = serde_json::to_string_pretty(&generation.full_context())
        .unwrap_or_else(|e| format!("JSON error: {e}"));
    println!("Context output ({} bytes):", json_str.len());
    let preview_end = json_str
        .char_indices()
        .nth(200)
        .map_or(json_str.len(), |(i, _)| i);
    println!("{}...", &json_str[..preview_end]);
}
