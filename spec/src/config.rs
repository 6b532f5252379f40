//! Generator configuration: identifier prefix and default fields.
//!
//! Loaded from a TOML file; every field is optional and falls back to the
//! built-in value.
//!
//! ```toml
//! id_prefix = "https://spdx.org/rdf/v3/"
//! graph_file = "tst.ttl"
//!
//! [metadata_defaults]
//! Instantiability = ["Concrete"]
//! Status = ["Stable"]
//!
//! [property_defaults]
//! minCount = ["0"]
//! maxCount = ["*"]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::SpecError;
use crate::model::{Attributes, Metadata};

/// Default identifier prefix.
pub const DEFAULT_ID_PREFIX: &str = "https://spdx.org/rdf/v3/";

/// Default graph artifact file name.
pub const DEFAULT_GRAPH_FILE: &str = "tst.ttl";

/// Settings consumed by the model and the artifact steps.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Prepended to `<namespace>#<name>` to form identifiers.
    pub id_prefix: String,
    /// Metadata keys every entity receives unless it declares them.
    pub metadata_defaults: Metadata,
    /// Attributes every class property-usage receives unless declared.
    pub property_defaults: Attributes,
    /// File name of the graph artifact inside the output directory.
    pub graph_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_owned(),
            metadata_defaults: [
                ("Instantiability", vec!["Concrete".to_owned()]),
                ("Status", vec!["Stable".to_owned()]),
            ]
            .into_iter()
            .collect(),
            property_defaults: [
                ("minCount", vec!["0".to_owned()]),
                ("maxCount", vec!["*".to_owned()]),
            ]
            .into_iter()
            .collect(),
            graph_file: DEFAULT_GRAPH_FILE.to_owned(),
        }
    }
}

impl Config {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::Config`] if the text is not valid TOML or has
    /// fields of the wrong shape.
    pub fn from_toml_str(text: &str) -> Result<Self, SpecError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::Read`] if the file cannot be read, or
    /// [`SpecError::Config`] if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, SpecError> {
        let text = std::fs::read_to_string(path).map_err(|source| SpecError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Same configuration with no default fields; handy for tests and for
    /// callers that want the bare model.
    #[must_use]
    pub fn without_defaults(id_prefix: impl Into<String>) -> Self {
        Self {
            id_prefix: id_prefix.into(),
            metadata_defaults: Metadata::new(),
            property_defaults: Attributes::new(),
            graph_file: DEFAULT_GRAPH_FILE.to_owned(),
        }
    }
}
