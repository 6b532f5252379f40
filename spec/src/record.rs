//! Raw declaration records, as handed over by the upstream spec parser.
//!
//! Records are plain data: nothing here is validated. The JSON shape is
//!
//! ```json
//! { "namespaces": [ { "name": "core",
//!     "classes":    [ { "name": "Widget", "metadata": [], "properties": [] } ],
//!     "properties": [ { "name": "hasPart", "metadata": [] } ],
//!     "vocabs":     [ { "name": "Color", "metadata": [], "entries": [] } ] } ] }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::SpecError;

/// A `name: value value ...` line (metadata or property attribute).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ValuesLine {
    /// Key being declared.
    pub name: String,
    /// Declared values.
    #[serde(default)]
    pub values: Vec<String>,
}

impl ValuesLine {
    /// Convenience constructor.
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// A `name: value` vocabulary entry line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EntryLine {
    /// Entry name.
    pub name: String,
    /// Entry text.
    #[serde(default)]
    pub value: String,
}

/// A class-level declaration that the class uses a property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PropertyUsageRecord {
    /// Name of the property used.
    pub name: String,
    /// Attribute lines (`type`, `minCount`, `maxCount`, ...).
    #[serde(default)]
    pub values: Vec<ValuesLine>,
}

/// A declared class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClassRecord {
    /// Class name.
    pub name: String,
    /// One-line summary.
    pub summary: String,
    /// Free-form description.
    pub description: String,
    /// Metadata lines in declaration order.
    pub metadata: Vec<ValuesLine>,
    /// Property-usage blocks in declaration order.
    pub properties: Vec<PropertyUsageRecord>,
}

/// A declared property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PropertyRecord {
    /// Property name.
    pub name: String,
    /// One-line summary.
    pub summary: String,
    /// Free-form description.
    pub description: String,
    /// Metadata lines in declaration order.
    pub metadata: Vec<ValuesLine>,
}

/// A declared vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VocabRecord {
    /// Vocabulary name.
    pub name: String,
    /// One-line summary.
    pub summary: String,
    /// Free-form description.
    pub description: String,
    /// Metadata lines in declaration order.
    pub metadata: Vec<ValuesLine>,
    /// Entry lines in declaration order.
    pub entries: Vec<EntryLine>,
}

/// Everything declared under one namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NamespaceRecord {
    /// Namespace name.
    pub name: String,
    /// Declared classes.
    pub classes: Vec<ClassRecord>,
    /// Declared properties.
    pub properties: Vec<PropertyRecord>,
    /// Declared vocabularies.
    pub vocabs: Vec<VocabRecord>,
}

/// The whole input: namespaces in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SpecDocument {
    /// Namespaces in registration order.
    pub namespaces: Vec<NamespaceRecord>,
}

impl SpecDocument {
    /// Parses a record document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::Json`] if the text does not match the record shape.
    pub fn from_json_str(text: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON record document.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::Read`] if the file cannot be read, or
    /// [`SpecError::Json`] if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, SpecError> {
        let text = std::fs::read_to_string(path).map_err(|source| SpecError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
