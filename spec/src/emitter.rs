//! Lowers a [`Spec`] into a triple graph and serializes it.

use crate::diagnostics::Diagnostics;
use crate::error::SpecError;
use crate::graph::Graph;
use crate::model::Entity;
use crate::registry::Spec;
use crate::serializer::GraphFormat;

/// Builds the graph for `spec`.
///
/// Namespaces are walked in registration order; within each, classes, then
/// properties, then vocabularies, each in declaration order.
#[must_use]
pub fn build_graph(spec: &Spec) -> Graph {
    let mut graph = Graph::with_standard_prefixes();
    let id_prefix = spec.config().id_prefix.as_str();

    for namespace in spec.namespaces() {
        for class in namespace.classes.values() {
            class.emit(&mut graph, id_prefix);
        }
        for property in namespace.properties.values() {
            property.emit(&mut graph, id_prefix);
        }
        for vocab in namespace.vocabs.values() {
            vocab.emit(&mut graph, id_prefix);
        }
    }

    graph
}

/// Builds and serializes the graph, unless `diag` holds an error.
///
/// # Errors
///
/// Returns [`SpecError::Tainted`] if any error was recorded while building
/// `spec` or the graph; nothing is serialized in that case.
pub fn gen_rdf(spec: &Spec, diag: &Diagnostics, format: GraphFormat) -> Result<String, SpecError> {
    let graph = build_graph(spec);

    if diag.has_error() {
        tracing::warn!("Error parsing the spec. Aborting the gen_rdf...");
        return Err(SpecError::Tainted {
            step: "gen_rdf",
            errors: diag.error_count(),
        });
    }

    tracing::debug!(triples = graph.len(), ?format, "serializing graph");
    Ok(format.serialize(&graph))
}
