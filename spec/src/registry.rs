//! The namespace registry: owns every namespace and entity of one run.

use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::model::{Class, Entity, FieldMap, Property, Vocab};
use crate::record::{NamespaceRecord, SpecDocument};

/// A named group of classes, properties, and vocabularies.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    /// Namespace name, as used in identifiers.
    pub name: String,
    /// Classes by name, declaration order.
    pub classes: FieldMap<Class>,
    /// Properties by name, declaration order.
    pub properties: FieldMap<Property>,
    /// Vocabularies by name, declaration order.
    pub vocabs: FieldMap<Vocab>,
}

/// A validated vocabulary specification.
///
/// Holds the configuration it was built with, every registered namespace,
/// and the reverse index from property name to the classes using it.
#[derive(Debug)]
pub struct Spec {
    config: Config,
    namespaces: FieldMap<Namespace>,
    dataprop_refs: FieldMap<Vec<String>>,
}

impl Spec {
    /// Creates an empty registry.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            namespaces: FieldMap::new(),
            dataprop_refs: FieldMap::new(),
        }
    }

    /// Builds a registry from a whole record document.
    ///
    /// `diag` is reset first; after this returns it holds every finding of
    /// the run.
    pub fn from_document(config: Config, document: SpecDocument, diag: &mut Diagnostics) -> Self {
        diag.reset();
        let mut spec = Self::new(config);
        for namespace in document.namespaces {
            spec.add_namespace_record(namespace, diag);
        }
        spec
    }

    /// The configuration this registry was built with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds every entity of `record` and registers them as one namespace.
    pub fn add_namespace_record(&mut self, record: NamespaceRecord, diag: &mut Diagnostics) {
        let NamespaceRecord {
            name,
            classes,
            properties,
            vocabs,
        } = record;

        let classes: Vec<Class> = classes
            .into_iter()
            .map(|r| Class::new(self, diag, &name, r))
            .collect();
        let properties: Vec<Property> = properties
            .into_iter()
            .map(|r| Property::new(&self.config, diag, &name, r))
            .collect();
        let vocabs: Vec<Vocab> = vocabs
            .into_iter()
            .map(|r| Vocab::new(&self.config, diag, &name, r))
            .collect();

        self.add_namespace(name, classes, properties, vocabs, diag);
    }

    /// Registers a namespace from already-built entities.
    ///
    /// A repeated entity name within a kind, or a repeated namespace name, is
    /// reported as an error; the later declaration replaces the earlier one.
    pub fn add_namespace(
        &mut self,
        name: impl Into<String>,
        classes: Vec<Class>,
        properties: Vec<Property>,
        vocabs: Vec<Vocab>,
        diag: &mut Diagnostics,
    ) {
        let name = name.into();
        let namespace = Namespace {
            classes: collect_members(&name, classes, diag),
            properties: collect_members(&name, properties, diag),
            vocabs: collect_members(&name, vocabs, diag),
            name: name.clone(),
        };

        tracing::debug!(
            namespace = %name,
            classes = namespace.classes.len(),
            properties = namespace.properties.len(),
            vocabs = namespace.vocabs.len(),
            "registered namespace"
        );

        if self.namespaces.insert(name.clone(), namespace).is_some() {
            diag.error(name.clone(), format!("Namespace with name: {name} already exists"));
        }
    }

    /// Namespaces in registration order.
    pub fn namespaces(&self) -> impl Iterator<Item = &Namespace> {
        self.namespaces.values()
    }

    /// Looks up a namespace by name.
    #[must_use]
    pub fn namespace(&self, name: &str) -> Option<&Namespace> {
        self.namespaces.get(name)
    }

    /// The reverse index: property name → `namespace:class` of every class
    /// using it, in construction order.
    #[must_use]
    pub fn dataprop_refs(&self) -> &FieldMap<Vec<String>> {
        &self.dataprop_refs
    }

    /// Classes using the property `name`, or an empty slice.
    #[must_use]
    pub fn references_to(&self, name: &str) -> &[String] {
        self.dataprop_refs.values_of(name)
    }

    pub(crate) fn record_property_use(&mut self, property: &str, class: &str) {
        match self.dataprop_refs.get_mut(property) {
            Some(refs) => refs.push(class.to_owned()),
            None => {
                self.dataprop_refs.insert(property, vec![class.to_owned()]);
            }
        }
    }

    /// Total number of registered classes.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.namespaces().map(|n| n.classes.len()).sum()
    }

    /// Total number of registered properties.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.namespaces().map(|n| n.properties.len()).sum()
    }

    /// Total number of registered vocabularies.
    #[must_use]
    pub fn vocab_count(&self) -> usize {
        self.namespaces().map(|n| n.vocabs.len()).sum()
    }
}

fn collect_members<E: Entity>(namespace: &str, entities: Vec<E>, diag: &mut Diagnostics) -> FieldMap<E> {
    let mut members = FieldMap::new();
    for entity in entities {
        let name = entity.name().to_owned();
        if members.insert(name.clone(), entity).is_some() {
            diag.error(
                namespace,
                format!("Duplicate `{}` object found: '{namespace}:{name}'", E::KIND.label()),
            );
        }
    }
    members
}
