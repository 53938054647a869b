//! `dymo-build` — Generates the dymo ontologies and writes every artifact.
//!
//! **Outputs:**
//! - `<ontologies>/{expression,dymo,mobile-audio}-ontology.n3` — Turtle
//! - `<ontologies>/*.nt` — N-Triples (unless `--no-ntriples`)
//! - `<ontologies>/dymo-context.json`, `dymo-context-simple.json` — JSON-LD contexts
//! - `<globals>/uris.ts`, `terms.ts`, `contexts.ts` — or `vocab.rs` with `--dialect rust`
//!
//! **Usage:**
//! ```
//! dymo-build [--ontologies <dir>] [--globals <dir>] [--dialect typescript|rust] [--no-ntriples]
//! ```
//!
//! Set `RUST_LOG=debug` to log every declaration.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use dymo_codegen::{Dialect, Layout};

/// Constants module language.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum DialectArg {
    /// `uris.ts`, `terms.ts`, `contexts.ts`.
    Typescript,
    /// `vocab.rs`.
    Rust,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Typescript => Dialect::TypeScript,
            DialectArg::Rust => Dialect::Rust,
        }
    }
}

/// Build the dymo ontology artifacts.
#[derive(Parser)]
#[command(name = "dymo-build", about = "Build dymo ontologies, contexts and constants")]
struct Args {
    /// Output directory for ontology documents and contexts.
    #[arg(long, default_value = "ontologies")]
    ontologies: PathBuf,

    /// Output directory for the constants module.
    #[arg(long, default_value = "src/globals")]
    globals: PathBuf,

    /// Language of the constants module.
    #[arg(long, value_enum, default_value_t = DialectArg::Typescript)]
    dialect: DialectArg,

    /// Skip the N-Triples siblings of the ontology documents.
    #[arg(long)]
    no_ntriples: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let layout = Layout {
        ontologies_dir: args.ontologies,
        globals_dir: args.globals,
        dialect: args.dialect.into(),
        ntriples: !args.no_ntriples,
    };

    let generation = dymo_ontology::generate().context("Ontology generation failed")?;

    // Print summary
    println!(
        "Dymo ontologies: {} ontologies, {} triples, {} terms, {} exports",
        generation.ontologies.len(),
        generation.triple_count(),
        generation.context.registry().len(),
        generation.context.exports().entries().len()
    );

    let artifacts = dymo_codegen::artifacts(&generation, &layout)?;
    let report = dymo_codegen::write_all(&artifacts);

    for path in &report.written {
        println!("  Written: {}", path.display());
    }
    for (path, e) in &report.failed {
        eprintln!("  FAILED:  {}: {e:#}", path.display());
    }
    if !report.is_success() {
        bail!(
            "{} of {} artifacts failed to write",
            report.failed.len(),
            artifacts.len()
        );
    }

    println!("Build complete.");
    Ok(())
}
