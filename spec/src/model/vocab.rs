//! Declared vocabularies (closed enumerations).

use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::graph::Graph;
use crate::iri::iris;
use crate::record::VocabRecord;

use super::{Declaration, Entity, EntityKind, FieldMap};

/// A named, closed set of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocab {
    /// Shared declaration fields.
    pub declaration: Declaration,
    /// Entry name → entry text, declaration order.
    pub entries: FieldMap<String>,
}

impl Vocab {
    /// Builds a vocabulary from its record.
    pub fn new(config: &Config, diag: &mut Diagnostics, namespace: &str, record: VocabRecord) -> Self {
        let VocabRecord {
            name,
            summary,
            description,
            metadata,
            entries,
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
        tracing::debug!(vocab = %declaration.qualified_name(), "building vocabulary");

        if entries.is_empty() {
            diag.warn(declaration.qualified_name(), "Vocabulary has no entries");
        }

        let mut map = FieldMap::new();
        for entry in entries {
            if map.contains_key(&entry.name) {
                diag.error(
                    declaration.qualified_name(),
                    format!("Entry '{}' already exists", entry.name),
                );
                continue;
            }
            map.insert(entry.name, entry.value);
        }

        Self {
            declaration,
            entries: map,
        }
    }
}

impl Entity for Vocab {
    const KIND: EntityKind = EntityKind::Vocab;

    fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    // Entries stay documentation-only.
    fn emit(&self, graph: &mut Graph, _id_prefix: &str) {
        graph.add(self.id(), iris::RDF_TYPE, iris::OWL_CLASS);
    }
}
