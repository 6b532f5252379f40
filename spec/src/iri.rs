//! Identifier construction and short-form reference resolution.

/// Standard IRI constants used by the graph emitter and serializers.
pub mod iris {
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// W3C vocabulary status namespace.
    pub const VOCAB_STATUS: &str = "http://www.w3.org/2003/06/sw-vocab-status/ns#";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdfs:subClassOf`.
    pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    /// `rdfs:domain`.
    pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
    /// `rdfs:range`.
    pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
    /// `owl:Class`.
    pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    /// `owl:ObjectProperty`.
    pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    /// `owl:DatatypeProperty`.
    pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
}

/// Builds the identifier of an entity declared in `namespace`.
#[must_use]
pub fn entity_id(prefix: &str, namespace: &str, name: &str) -> String {
    format!("{prefix}{namespace}#{name}")
}

/// Resolves a short-form `reference` against `context_namespace`.
///
/// - `name` resolves inside the context namespace,
/// - `ns:name` names its namespace explicitly,
/// - anything with two or more colons is taken as already qualified and
///   returned unchanged.
#[must_use]
pub fn resolve(prefix: &str, reference: &str, context_namespace: &str) -> String {
    let segments: Vec<&str> = reference.split(':').collect();
    match segments.as_slice() {
        [name] => entity_id(prefix, context_namespace, name),
        [namespace, name] => entity_id(prefix, namespace, name),
        _ => reference.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "https://spdx.org/rdf/v3/";

    #[test]
    fn bare_name_uses_context_namespace() {
        assert_eq!(
            resolve(PREFIX, "Widget", "core"),
            "https://spdx.org/rdf/v3/core#Widget"
        );
    }

    #[test]
    fn qualified_name_overrides_context() {
        for ctx in ["core", "software", ""] {
            assert_eq!(
                resolve(PREFIX, "base:Thing", ctx),
                "https://spdx.org/rdf/v3/base#Thing"
            );
        }
    }

    #[test]
    fn two_or_more_colons_pass_through() {
        let iri = "http://example.org:8080/vocab#Widget";
        assert_eq!(resolve(PREFIX, iri, "other"), iri);
        assert_eq!(resolve(PREFIX, "a:b:c", "core"), "a:b:c");
    }

    #[test]
    fn single_colon_iri_is_treated_as_namespace_override() {
        // Only the colon count matters; a scheme-only IRI is not special.
        assert_eq!(
            resolve(PREFIX, "urn:x", "core"),
            "https://spdx.org/rdf/v3/urn#x"
        );
        assert_eq!(
            resolve(PREFIX, "https://example.org/x", "core"),
            "https://spdx.org/rdf/v3/https#//example.org/x"
        );
    }

    #[test]
    fn degenerate_references_still_build_strings() {
        assert_eq!(resolve(PREFIX, "", "core"), "https://spdx.org/rdf/v3/core#");
        assert_eq!(resolve(PREFIX, ":Thing", "core"), "https://spdx.org/rdf/v3/#Thing");
    }

    #[test]
    fn resolution_is_repeatable() {
        let first = resolve(PREFIX, "xsd:string", "core");
        let second = resolve(PREFIX, "xsd:string", "core");
        assert_eq!(first, second);
    }
}
