//! Declared classes and their property-usage blocks.

use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::graph::Graph;
use crate::iri::{iris, resolve};
use crate::record::{ClassRecord, PropertyUsageRecord};
use crate::registry::Spec;

use super::{merge_defaults, Attributes, Declaration, Entity, EntityKind, FieldMap};

/// An OWL class together with the properties it declares usage of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    /// Shared declaration fields.
    pub declaration: Declaration,
    /// Property name → attributes, defaults merged, declaration order.
    pub properties: FieldMap<Attributes>,
}

impl Class {
    /// Builds a class and records its property usages in `spec`'s reverse
    /// index.
    pub fn new(
        spec: &mut Spec,
        diag: &mut Diagnostics,
        namespace: &str,
        record: ClassRecord,
    ) -> Self {
        let class = Self::build(spec.config(), diag, namespace, record);
        let qualified = class.declaration.qualified_name();
        for property in class.properties.keys() {
            spec.record_property_use(property, &qualified);
        }
        class
    }

    fn build(config: &Config, diag: &mut Diagnostics, namespace: &str, record: ClassRecord) -> Self {
        let ClassRecord {
            name,
            summary,
            description,
            metadata,
            properties,
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
        tracing::debug!(class = %declaration.qualified_name(), "building class");

        let mut usages = FieldMap::new();
        for usage in properties {
            let (name, attributes) = extract_usage(&declaration, config, diag, usage);
            if usages.contains_key(&name) {
                diag.error(
                    declaration.qualified_name(),
                    format!("Data property '{name}' already exists"),
                );
                continue;
            }
            usages.insert(name, attributes);
        }

        Self {
            declaration,
            properties: usages,
        }
    }

    /// Superclass references exactly as declared.
    #[must_use]
    pub fn superclasses(&self) -> &[String] {
        self.declaration.metadata.values_of("SubclassOf")
    }
}

fn extract_usage(
    owner: &Declaration,
    config: &Config,
    diag: &mut Diagnostics,
    usage: PropertyUsageRecord,
) -> (String, Attributes) {
    let mut attributes = Attributes::new();
    for line in usage.values {
        if attributes.contains_key(&line.name) {
            diag.error(
                owner.qualified_name(),
                format!(
                    "Attribute key '{}' already exists in data property '{}'",
                    line.name, usage.name
                ),
            );
            continue;
        }
        attributes.insert(line.name, line.values);
    }
    merge_defaults(&mut attributes, &config.property_defaults);
    (usage.name, attributes)
}

impl Entity for Class {
    const KIND: EntityKind = EntityKind::Class;

    fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    fn emit(&self, graph: &mut Graph, id_prefix: &str) {
        let id = self.id();
        graph.add(id, iris::RDF_TYPE, iris::OWL_CLASS);
        for parent in self.superclasses() {
            graph.add(
                id,
                iris::RDFS_SUBCLASS_OF,
                resolve(id_prefix, parent, &self.declaration.namespace),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ValuesLine;

    fn usage(name: &str, lines: Vec<ValuesLine>) -> PropertyUsageRecord {
        PropertyUsageRecord {
            name: name.to_owned(),
            values: lines,
        }
    }

    #[test]
    fn usage_attributes_get_defaults() {
        let mut spec = Spec::new(Config::default());
        let mut diag = Diagnostics::new();
        let class = Class::new(
            &mut spec,
            &mut diag,
            "core",
            ClassRecord {
                name: "Widget".to_owned(),
                properties: vec![usage(
                    "label",
                    vec![
                        ValuesLine::new("type", ["xsd:string"]),
                        ValuesLine::new("maxCount", ["1"]),
                    ],
                )],
                ..ClassRecord::default()
            },
        );

        let attrs = class.properties.get("label").expect("label usage");
        assert_eq!(
            attrs.keys().collect::<Vec<_>>(),
            vec!["type", "maxCount", "minCount"]
        );
        assert_eq!(attrs.values_of("maxCount"), ["1"]);
        assert_eq!(attrs.values_of("minCount"), ["0"]);
        assert!(!diag.has_error());
    }

    #[test]
    fn duplicate_attribute_and_usage_are_errors() {
        let mut spec = Spec::new(Config::default());
        let mut diag = Diagnostics::new();
        let class = Class::new(
            &mut spec,
            &mut diag,
            "core",
            ClassRecord {
                name: "Widget".to_owned(),
                properties: vec![
                    usage(
                        "label",
                        vec![
                            ValuesLine::new("type", ["xsd:string"]),
                            ValuesLine::new("type", ["xsd:anyURI"]),
                        ],
                    ),
                    usage("label", vec![ValuesLine::new("type", ["xsd:integer"])]),
                ],
                ..ClassRecord::default()
            },
        );

        assert_eq!(diag.error_count(), 2);
        assert_eq!(class.properties.len(), 1);
        let attrs = class.properties.get("label").expect("label usage");
        assert_eq!(attrs.values_of("type"), ["xsd:string"]);
        // One class, one distinct property: one reverse-index entry.
        assert_eq!(spec.references_to("label"), ["core:Widget"]);
    }

    #[test]
    fn emits_class_and_resolved_superclasses() {
        let mut spec = Spec::new(Config::without_defaults("https://ex.org/"));
        let mut diag = Diagnostics::new();
        let class = Class::new(
            &mut spec,
            &mut diag,
            "core",
            ClassRecord {
                name: "Widget".to_owned(),
                metadata: vec![ValuesLine::new("SubclassOf", ["Element", "base:Thing"])],
                ..ClassRecord::default()
            },
        );

        let mut graph = Graph::new();
        class.emit(&mut graph, "https://ex.org/");

        let id = "https://ex.org/core#Widget";
        assert_eq!(graph.len(), 3);
        assert!(graph.contains(id, iris::RDF_TYPE, iris::OWL_CLASS));
        assert!(graph.contains(id, iris::RDFS_SUBCLASS_OF, "https://ex.org/core#Element"));
        assert!(graph.contains(id, iris::RDFS_SUBCLASS_OF, "https://ex.org/base#Thing"));
    }
}
