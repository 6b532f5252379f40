//! N-Triples serializer.
//!
//! One triple per line, absolute IRIs, assertion order. Prefix bindings are
//! not part of the format and are dropped.

use crate::graph::Graph;

use super::iri_ref;

/// Serializes `graph` to an N-Triples string.
#[must_use]
pub fn to_ntriples(graph: &Graph) -> String {
    let mut out = String::with_capacity(128 * graph.len());
    for t in graph.triples() {
        out.push_str(&iri_ref(&t.subject));
        out.push(' ');
        out.push_str(&iri_ref(&t.predicate));
        out.push(' ');
        out.push_str(&iri_ref(&t.object));
        out.push_str(" .\n");
    }
    out
}
