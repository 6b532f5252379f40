//! Vocabulary specification model and graph generator.
//!
//! The `specgen-model` crate turns raw declaration records (namespaces of
//! classes, properties, and vocabularies) into a validated [`Spec`], and
//! lowers that model into an OWL-style triple graph serialized as Turtle or
//! N-Triples.
//!
//! # Entry Point
//!
//! ```
//! use specgen_model::record::{ClassRecord, NamespaceRecord, SpecDocument};
//! use specgen_model::{Config, Diagnostics, GraphFormat, Spec};
//!
//! let document = SpecDocument {
//!     namespaces: vec![NamespaceRecord {
//!         name: "core".to_owned(),
//!         classes: vec![ClassRecord { name: "Widget".to_owned(), ..Default::default() }],
//!         ..Default::default()
//!     }],
//! };
//!
//! let mut diag = Diagnostics::new();
//! let spec = Spec::from_document(Config::default(), document, &mut diag);
//! let turtle = specgen_model::gen_rdf(&spec, &diag, GraphFormat::Turtle).unwrap();
//! assert!(turtle.contains("<https://spdx.org/rdf/v3/core#Widget>"));
//! ```
//!
//! # Validation
//!
//! Duplicate declarations never abort construction. They are recorded in
//! [`Diagnostics`]; [`gen_rdf`] and the documentation renderer refuse to run
//! once an error has been recorded.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod diagnostics;
pub mod emitter;
pub mod error;
pub mod graph;
pub mod iri;
pub mod model;
pub mod record;
pub mod registry;
pub mod serializer;

pub use config::Config;
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use emitter::{build_graph, gen_rdf};
pub use error::SpecError;
pub use graph::{Graph, Triple};
pub use iri::resolve;
pub use model::{
    merge_defaults, Attributes, Class, Declaration, Entity, EntityKind, FieldMap, Metadata,
    Property, PropertyKind, Vocab,
};
pub use registry::{Namespace, Spec};
pub use serializer::GraphFormat;
