//! `specgen` — Validates a vocabulary record document and generates its
//! documentation pages and OWL graph.
//!
//! **Outputs:**
//! - `<out>/<namespace>/{Classes,Properties,Vocabularies}/<name>.md` — Markdown pages
//! - `<out>/tst.ttl` — Turtle graph (file name set by `graph_file` in the config)
//!
//! Nothing is written when validation records an error.
//!
//! **Usage:**
//! ```
//! specgen <input.json> [--out <path>] [--config <file>] [--table] [--refs]
//!         [--format turtle|ntriples] [--no-docs] [--no-graph] [--verbose]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use specgen_docs::{render_pages, write_pages, RenderOptions};
use specgen_model::record::SpecDocument;
use specgen_model::{gen_rdf, Config, Diagnostics, GraphFormat, Spec};
use tracing_subscriber::EnvFilter;

/// Graph serialization selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Turtle 1.1.
    Turtle,
    /// N-Triples.
    Ntriples,
}

impl From<Format> for GraphFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Turtle => GraphFormat::Turtle,
            Format::Ntriples => GraphFormat::NTriples,
        }
    }
}

/// Generate documentation and an OWL graph from vocabulary records.
#[derive(Parser)]
#[command(
    name = "specgen",
    version,
    about = "Generate Markdown documentation and an OWL graph from vocabulary records"
)]
struct Args {
    /// JSON record document to load.
    input: PathBuf,

    /// Output directory for generated artifacts.
    #[arg(long, default_value = "out")]
    out: PathBuf,

    /// TOML configuration (identifier prefix, defaults, graph file name).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Render class properties as a table.
    #[arg(long)]
    table: bool,

    /// Add a References section to property pages.
    #[arg(long)]
    refs: bool,

    /// Graph serialization format.
    #[arg(long, value_enum, default_value = "turtle")]
    format: Format,

    /// Skip the Markdown pages.
    #[arg(long)]
    no_docs: bool,

    /// Skip the graph.
    #[arg(long)]
    no_graph: bool,

    /// Log construction progress.
    #[arg(long, short)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let document = SpecDocument::load(&args.input)?;

    let mut diag = Diagnostics::new();
    let spec = Spec::from_document(config, document, &mut diag);

    println!(
        "{}: {} namespaces, {} classes, {} properties, {} vocabularies",
        args.input.display(),
        spec.namespaces().count(),
        spec.class_count(),
        spec.property_count(),
        spec.vocab_count()
    );

    // Render everything in memory first so a tainted run writes nothing.
    let options = RenderOptions {
        table: args.table,
        refs: args.refs,
    };
    let pages = (!args.no_docs)
        .then(|| render_pages(&spec, &diag, &options))
        .transpose();
    let format = GraphFormat::from(args.format);
    let graph = (!args.no_graph)
        .then(|| gen_rdf(&spec, &diag, format))
        .transpose();

    let (pages, graph) = match (pages, graph) {
        (Ok(pages), Ok(graph)) => (pages, graph),
        (Err(err), _) | (_, Err(err)) if err.is_tainted() => {
            bail!(
                "{} validation error(s) in {}; no artifacts written",
                diag.error_count(),
                args.input.display()
            )
        }
        (Err(err), _) | (_, Err(err)) => return Err(err.into()),
    };

    if let Some(pages) = pages {
        write_pages(&args.out, &pages)?;
        println!("  Written: {} pages under {}", pages.len(), args.out.display());
    }

    if let Some(text) = graph {
        let path = graph_path(&args.out, &spec.config().graph_file, format);
        specgen_docs::writer::write_text(&path, &text)
            .with_context(|| format!("Failed to write graph for {}", args.input.display()))?;
        tracing::info!(path = %path.display(), "wrote graph");
        println!("  Written: {}", path.display());
    }

    println!("Generation complete.");
    Ok(())
}

fn graph_path(out: &Path, graph_file: &str, format: GraphFormat) -> PathBuf {
    out.join(graph_file).with_extension(format.extension())
}
