//! Documentation generator for validated vocabulary specs.
//!
//! Produces one Markdown page per class, property, and vocabulary of a
//! [`Spec`]. Pages are rendered in memory first; nothing is written unless
//! the run is free of validation errors.
//!
//! # Entry Points
//!
//! ```no_run
//! use std::path::Path;
//! use specgen_docs::{generate, RenderOptions};
//! use specgen_model::{Config, Diagnostics, Spec};
//! use specgen_model::record::SpecDocument;
//!
//! let mut diag = Diagnostics::new();
//! let document = SpecDocument::load(Path::new("spec.json")).expect("readable records");
//! let spec = Spec::from_document(Config::default(), document, &mut diag);
//! generate(&spec, &diag, Path::new("out"), &RenderOptions::default())
//!     .expect("Documentation generation failed");
//! ```
//!
//! # Structure
//!
//! ```text
//! out/
//!   core/
//!     Classes/Widget.md
//!     Properties/hasPart.md
//!     Vocabularies/Color.md
//!   software/
//!     ...
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod renderer;
pub mod writer;

use std::path::{Path, PathBuf};

use anyhow::Result;
use specgen_model::{Diagnostics, Entity, EntityKind, Spec, SpecError};

pub use renderer::RenderOptions;

/// A rendered page and where it goes, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Relative path, `<namespace>/<Section>/<name>.md`.
    pub path: PathBuf,
    /// Markdown text.
    pub content: String,
}

/// Renders every page of `spec` in registration and declaration order.
///
/// # Errors
///
/// Returns [`SpecError::Tainted`] if `diag` holds an error; no page is
/// rendered in that case.
pub fn render_pages(
    spec: &Spec,
    diag: &Diagnostics,
    options: &RenderOptions,
) -> Result<Vec<Page>, SpecError> {
    if diag.has_error() {
        tracing::warn!("Error parsing the spec. Aborting the dump_md...");
        return Err(SpecError::Tainted {
            step: "dump_md",
            errors: diag.error_count(),
        });
    }

    let mut pages = Vec::new();
    for namespace in spec.namespaces() {
        for class in namespace.classes.values() {
            pages.push(Page {
                path: page_path(class),
                content: renderer::render_class(class, options),
            });
        }
        for property in namespace.properties.values() {
            pages.push(Page {
                path: page_path(property),
                content: renderer::render_property(
                    property,
                    spec.references_to(property.name()),
                    options,
                ),
            });
        }
        for vocab in namespace.vocabs.values() {
            pages.push(Page {
                path: page_path(vocab),
                content: renderer::render_vocab(vocab),
            });
        }
    }
    Ok(pages)
}

/// Writes rendered pages under `out_dir`.
///
/// # Errors
///
/// Returns an error if any directory or file cannot be written.
pub fn write_pages(out_dir: &Path, pages: &[Page]) -> Result<()> {
    for page in pages {
        writer::write_text(&out_dir.join(&page.path), &page.content)?;
    }
    tracing::info!(pages = pages.len(), out = %out_dir.display(), "wrote documentation");
    Ok(())
}

/// Renders and writes all documentation pages. Returns the number of
/// pages written.
///
/// # Errors
///
/// Returns an error if the run is tainted or any file cannot be written.
pub fn generate(
    spec: &Spec,
    diag: &Diagnostics,
    out_dir: &Path,
    options: &RenderOptions,
) -> Result<usize> {
    let pages = render_pages(spec, diag, options)?;
    write_pages(out_dir, &pages)?;
    Ok(pages.len())
}

fn page_path<E: Entity>(entity: &E) -> PathBuf {
    let decl = entity.declaration();
    section_dir(&decl.namespace, E::KIND).join(format!("{}.md", decl.name))
}

/// Directory of one namespace's pages of a given kind, relative to the
/// output directory.
#[must_use]
pub fn section_dir(namespace: &str, kind: EntityKind) -> PathBuf {
    Path::new(namespace).join(kind.section())
}
