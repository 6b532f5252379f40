//! Core model types: the three entity kinds and their shared declaration.
//!
//! Every entity is built from its raw record in one pass: the synthetic `id`
//! metadata entry comes first, declared metadata follows (first declaration
//! of a key wins, repeats are reported), then configured defaults fill the
//! gaps. References to other entities stay as written until the graph is
//! emitted.

mod class;
mod fields;
mod property;
mod vocab;

pub use class::Class;
pub use fields::{merge_defaults, Attributes, FieldMap, Metadata};
pub use property::{Property, PropertyKind};
pub use vocab::Vocab;

use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::graph::Graph;
use crate::iri::entity_id;
use crate::record::ValuesLine;

/// Metadata key holding an entity's own identifier.
pub const ID_KEY: &str = "id";

/// The three kinds of declared entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// An OWL class.
    Class,
    /// An OWL object or datatype property.
    Property,
    /// A closed enumeration of named values.
    Vocab,
}

impl EntityKind {
    /// Directory name used for this kind's documentation pages.
    #[must_use]
    pub fn section(self) -> &'static str {
        match self {
            EntityKind::Class => "Classes",
            EntityKind::Property => "Properties",
            EntityKind::Vocab => "Vocabularies",
        }
    }

    /// Label used in diagnostics.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Class => "Class",
            EntityKind::Property => "Property",
            EntityKind::Vocab => "Vocab",
        }
    }
}

/// Fields shared by every entity kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Owning namespace.
    pub namespace: String,
    /// Entity name, unique per kind within the namespace.
    pub name: String,
    /// One-line summary.
    pub summary: String,
    /// Free-form description.
    pub description: String,
    /// Metadata with `id` first and defaults merged.
    pub metadata: Metadata,
}

impl Declaration {
    pub(crate) fn build(
        config: &Config,
        diag: &mut Diagnostics,
        namespace: &str,
        name: String,
        summary: String,
        description: String,
        lines: Vec<ValuesLine>,
    ) -> Self {
        let mut decl = Self {
            namespace: namespace.to_owned(),
            name,
            summary,
            description,
            metadata: Metadata::new(),
        };
        if !is_file_safe(&decl.name) {
            diag.error(
                decl.qualified_name(),
                format!("Name '{}' cannot be used as a page file name", decl.name),
            );
        }
        decl.metadata.insert(
            ID_KEY,
            vec![entity_id(&config.id_prefix, namespace, &decl.name)],
        );

        for line in lines {
            if decl.metadata.contains_key(&line.name) {
                diag.error(
                    decl.qualified_name(),
                    format!("Metadata key '{}' already exists", line.name),
                );
                continue;
            }
            decl.metadata.insert(line.name, line.values);
        }

        merge_defaults(&mut decl.metadata, &config.metadata_defaults);
        decl
    }

    /// The fully-qualified identifier, `<prefix><namespace>#<name>`.
    #[must_use]
    pub fn id(&self) -> &str {
        self.metadata
            .values_of(ID_KEY)
            .first()
            .map_or("", String::as_str)
    }

    /// `namespace:name`, the form used in diagnostics and the reverse index.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.namespace, self.name)
    }
}

/// A name becomes a documentation file name; it must stay a single path
/// component.
fn is_file_safe(name: &str) -> bool {
    !matches!(name, "." | "..") && !name.contains(['/', '\\'])
}

/// Behaviour common to classes, properties, and vocabularies.
pub trait Entity {
    /// Which kind of entity this is.
    const KIND: EntityKind;

    /// The shared declaration fields.
    fn declaration(&self) -> &Declaration;

    /// Adds this entity's triples to `graph`, resolving references with
    /// `id_prefix`.
    fn emit(&self, graph: &mut Graph, id_prefix: &str);

    /// Entity name.
    fn name(&self) -> &str {
        &self.declaration().name
    }

    /// Fully-qualified identifier.
    fn id(&self) -> &str {
        self.declaration().id()
    }
}
