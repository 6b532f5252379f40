//! In-memory triple set with prefix bindings.
//!
//! Triples keep the order in which they were first asserted so that
//! serializing the same graph twice yields identical bytes. Asserting a
//! triple that is already present is a no-op.

use std::collections::HashSet;

use crate::iri::iris;

/// One `(subject, predicate, object)` assertion. All three terms are IRIs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject IRI.
    pub subject: String,
    /// Predicate IRI.
    pub predicate: String,
    /// Object IRI.
    pub object: String,
}

/// An ordered set of triples plus the prefixes used to abbreviate them.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    prefixes: Vec<(String, String)>,
    triples: Vec<Triple>,
    seen: HashSet<Triple>,
}

impl Graph {
    /// Creates an empty graph with no prefix bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph bound to `owl`, `rdf`, `rdfs`, `xsd`, and the
    /// vocabulary-status namespace (`ns0`).
    #[must_use]
    pub fn with_standard_prefixes() -> Self {
        let mut graph = Self::new();
        graph.bind("owl", iris::OWL);
        graph.bind("rdf", iris::RDF);
        graph.bind("rdfs", iris::RDFS);
        graph.bind("xsd", iris::XSD);
        graph.bind("ns0", iris::VOCAB_STATUS);
        graph
    }

    /// Binds `prefix` to `namespace`, replacing an earlier binding of the
    /// same prefix.
    pub fn bind(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        let prefix = prefix.into();
        let namespace = namespace.into();
        match self.prefixes.iter_mut().find(|(p, _)| *p == prefix) {
            Some(binding) => binding.1 = namespace,
            None => self.prefixes.push((prefix, namespace)),
        }
    }

    /// Asserts a triple. Returns false if it was already present.
    pub fn add(
        &mut self,
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> bool {
        let triple = Triple {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        };
        if self.seen.contains(&triple) {
            return false;
        }
        self.seen.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    /// True if the exact triple has been asserted.
    #[must_use]
    pub fn contains(&self, subject: &str, predicate: &str, object: &str) -> bool {
        self.seen.contains(&Triple {
            subject: subject.to_owned(),
            predicate: predicate.to_owned(),
            object: object.to_owned(),
        })
    }

    /// Triples in assertion order.
    #[must_use]
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// All triples with the given subject, in assertion order.
    pub fn about<'a>(&'a self, subject: &'a str) -> impl Iterator<Item = &'a Triple> + 'a {
        self.triples.iter().filter(move |t| t.subject == subject)
    }

    /// Prefix bindings in binding order.
    #[must_use]
    pub fn prefixes(&self) -> &[(String, String)] {
        &self.prefixes
    }

    /// Number of distinct triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// True if no triple has been asserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Abbreviates `iri` as `prefix:local` if a bound namespace covers it
    /// and the remainder is a plain local name.
    #[must_use]
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.prefixes.iter().find_map(|(prefix, namespace)| {
            iri.strip_prefix(namespace.as_str())
                .filter(|local| is_plain_local_name(local))
                .map(|local| format!("{prefix}:{local}"))
        })
    }
}

fn is_plain_local_name(local: &str) -> bool {
    let mut chars = local.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_triples_collapse() {
        let mut graph = Graph::new();
        assert!(graph.add("s", "p", "o"));
        assert!(!graph.add("s", "p", "o"));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn contains_matches_whole_triples() {
        let mut graph = Graph::new();
        graph.add("s", "p", "o");
        graph.add("s", "p", "o2");
        assert!(graph.contains("s", "p", "o"));
        assert!(graph.contains("s", "p", "o2"));
        assert!(!graph.contains("s", "o", "p"));
        assert!(!graph.contains("s", "p", "o3"));
    }

    #[test]
    fn standard_prefixes_are_bound_in_order() {
        let graph = Graph::with_standard_prefixes();
        let names: Vec<&str> = graph.prefixes().iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(names, vec!["owl", "rdf", "rdfs", "xsd", "ns0"]);
    }

    #[test]
    fn rebinding_replaces_namespace() {
        let mut graph = Graph::new();
        graph.bind("ex", "https://a/");
        graph.bind("ex", "https://b/");
        assert_eq!(graph.prefixes(), &[("ex".to_owned(), "https://b/".to_owned())]);
    }

    #[test]
    fn compacts_only_plain_local_names() {
        let graph = Graph::with_standard_prefixes();
        assert_eq!(graph.compact(iris::OWL_CLASS).as_deref(), Some("owl:Class"));
        assert_eq!(graph.compact(iris::RDF_TYPE).as_deref(), Some("rdf:type"));
        assert_eq!(graph.compact("http://www.w3.org/2002/07/owl#a/b"), None);
        assert_eq!(graph.compact("https://spdx.org/rdf/v3/core#Widget"), None);
    }
}
