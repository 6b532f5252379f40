//! Serializers for the emitted graph.
//!
//! Two formats are supported:
//! - **Turtle** ([`turtle`]): the default artifact, prefixed and grouped by subject
//! - **N-Triples** ([`ntriples`]): one absolute triple per line, diff-friendly

pub mod ntriples;
pub mod turtle;

use crate::graph::Graph;

/// Output format for the graph artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GraphFormat {
    /// Turtle 1.1.
    #[default]
    Turtle,
    /// N-Triples.
    NTriples,
}

impl GraphFormat {
    /// Serializes `graph` in this format.
    #[must_use]
    pub fn serialize(self, graph: &Graph) -> String {
        match self {
            GraphFormat::Turtle => turtle::to_turtle(graph),
            GraphFormat::NTriples => ntriples::to_ntriples(graph),
        }
    }

    /// Conventional file extension, without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            GraphFormat::Turtle => "ttl",
            GraphFormat::NTriples => "nt",
        }
    }
}

/// Writes `iri` as an `IRIREF`, percent-encoding characters that may not
/// appear in an IRI.
pub(crate) fn iri_ref(iri: &str) -> String {
    let mut out = String::with_capacity(iri.len() + 2);
    out.push('<');
    for c in iri.chars() {
        match c {
            '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\'
            | '\u{0}'..='\u{20}'
            | '\u{7F}' => {
                out.push_str(&format!("%{:02X}", c as u32));
            }
            _ => out.push(c),
        }
    }
    out.push('>');
    out
}
