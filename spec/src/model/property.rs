//! Declared properties.

use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::graph::Graph;
use crate::iri::{iris, resolve};
use crate::record::PropertyRecord;

use super::{Declaration, Entity, EntityKind};

/// Whether a property is emitted as an object or a datatype property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// `owl:ObjectProperty`.
    Object,
    /// `owl:DatatypeProperty`.
    Datatype,
}

impl PropertyKind {
    /// The OWL class IRI asserted as the property's `rdf:type`.
    #[must_use]
    pub fn owl_type(self) -> &'static str {
        match self {
            PropertyKind::Object => iris::OWL_OBJECT_PROPERTY,
            PropertyKind::Datatype => iris::OWL_DATATYPE_PROPERTY,
        }
    }
}

/// An OWL property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Shared declaration fields.
    pub declaration: Declaration,
}

impl Property {
    /// Builds a property from its record.
    pub fn new(config: &Config, diag: &mut Diagnostics, namespace: &str, record: PropertyRecord) -> Self {
        let PropertyRecord {
            name,
            summary,
            description,
            metadata,
        } = record;
        let declaration = Declaration::build(
            config,
            diag,
            namespace,
            name,
            summary,
            description,
            metadata,
        );
        tracing::debug!(property = %declaration.qualified_name(), "building property");
        Self { declaration }
    }

    /// Object unless `Nature` is declared with no values.
    ///
    /// Any non-empty `Nature`, whatever it says, selects
    /// [`PropertyKind::Object`]; an absent `Nature` does too. Only an
    /// explicitly empty `Nature` line yields [`PropertyKind::Datatype`].
    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        match self.declaration.metadata.get("Nature") {
            Some(values) if values.is_empty() => PropertyKind::Datatype,
            _ => PropertyKind::Object,
        }
    }

    /// Domain references exactly as declared.
    #[must_use]
    pub fn domain(&self) -> &[String] {
        self.declaration.metadata.values_of("Domain")
    }

    /// Range references exactly as declared.
    #[must_use]
    pub fn range(&self) -> &[String] {
        self.declaration.metadata.values_of("Range")
    }
}

impl Entity for Property {
    const KIND: EntityKind = EntityKind::Property;

    fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    fn emit(&self, graph: &mut Graph, id_prefix: &str) {
        let id = self.id();
        let namespace = &self.declaration.namespace;
        graph.add(id, iris::RDF_TYPE, self.kind().owl_type());
        for value in self.range() {
            graph.add(id, iris::RDFS_RANGE, resolve(id_prefix, value, namespace));
        }
        for value in self.domain() {
            graph.add(id, iris::RDFS_DOMAIN, resolve(id_prefix, value, namespace));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ValuesLine;

    fn property(metadata: Vec<ValuesLine>) -> Property {
        let mut diag = Diagnostics::new();
        Property::new(
            &Config::without_defaults("https://ex.org/"),
            &mut diag,
            "core",
            PropertyRecord {
                name: "hasPart".to_owned(),
                metadata,
                ..PropertyRecord::default()
            },
        )
    }

    #[test]
    fn nature_absent_is_object() {
        assert_eq!(property(vec![]).kind(), PropertyKind::Object);
    }

    #[test]
    fn any_nature_value_is_object() {
        let p = property(vec![ValuesLine::new("Nature", ["DataProperty"])]);
        assert_eq!(p.kind(), PropertyKind::Object);
        let p = property(vec![ValuesLine::new("Nature", ["false"])]);
        assert_eq!(p.kind(), PropertyKind::Object);
    }

    #[test]
    fn empty_nature_is_datatype() {
        let p = property(vec![ValuesLine::new("Nature", Vec::<String>::new())]);
        assert_eq!(p.kind(), PropertyKind::Datatype);
    }

    #[test]
    fn emits_range_then_domain() {
        let p = property(vec![
            ValuesLine::new("Domain", ["Widget"]),
            ValuesLine::new("Range", ["core:Gadget", "xsd:string"]),
        ]);
        let mut graph = Graph::new();
        p.emit(&mut graph, "https://ex.org/");

        let id = "https://ex.org/core#hasPart";
        let predicates: Vec<&str> = graph.about(id).map(|t| t.predicate.as_str()).collect();
        assert_eq!(
            predicates,
            vec![iris::RDF_TYPE, iris::RDFS_RANGE, iris::RDFS_RANGE, iris::RDFS_DOMAIN]
        );
        assert!(graph.contains(id, iris::RDFS_DOMAIN, "https://ex.org/core#Widget"));
        assert!(graph.contains(id, iris::RDFS_RANGE, "https://ex.org/core#Gadget"));
        // Datatype references are resolved like any other short form.
        assert!(graph.contains(id, iris::RDFS_RANGE, "https://ex.org/xsd#string"));
    }
}
