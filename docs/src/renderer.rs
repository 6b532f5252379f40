//! Renders one Markdown page per entity.
//!
//! Every page opens with the generator comment, the entity name, its summary,
//! description, and metadata. Classes add their property-usage block,
//! vocabularies their entries, and properties (optionally) the classes that
//! use them.

use specgen_model::{Class, Declaration, Property, Vocab};

/// Generator line written at the top of every page.
pub const GENERATOR: &str = concat!("specgen v", env!("CARGO_PKG_VERSION"));

/// Attribute columns of the class property table.
pub const TABLE_COLUMNS: [&str; 3] = ["type", "minCount", "maxCount"];

/// Placeholder for an attribute a property usage does not carry.
const MISSING: &str = "NA";

/// Page layout switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render class properties as a table instead of nested lists.
    pub table: bool,
    /// Add a `References` section to property pages.
    pub refs: bool,
}

/// Renders a class page.
pub fn render_class(class: &Class, options: &RenderOptions) -> String {
    let mut out = String::new();
    push_common(&mut out, &class.declaration);
    out.push('\n');

    out.push_str("## Properties\n\n");
    if options.table {
        let mut header = vec!["property"];
        header.extend(TABLE_COLUMNS);
        out.push_str(&format!("|{}|\n", header.join("|")));
        out.push_str(&format!("|{}\n", "---|".repeat(header.len())));

        for (name, attributes) in class.properties.iter() {
            out.push('|');
            out.push_str(name);
            for column in TABLE_COLUMNS {
                let cell = match attributes.get(column) {
                    Some(values) => values.join(" "),
                    None => MISSING.to_owned(),
                };
                out.push('|');
                out.push_str(&cell);
            }
            out.push_str("|\n");
        }
    } else {
        for (name, attributes) in class.properties.iter() {
            out.push_str(&format!("- {name}\n"));
            for (key, values) in attributes.iter() {
                out.push_str(&format!("  - {key}: {}\n", values.join(" ")));
            }
            out.push('\n');
        }
    }

    out
}

/// Renders a property page. `references` are the classes using the
/// property, listed only when `options.refs` is set.
pub fn render_property(
    property: &Property,
    references: &[String],
    options: &RenderOptions,
) -> String {
    let mut out = String::new();
    push_common(&mut out, &property.declaration);
    out.push('\n');

    if options.refs {
        out.push_str("## References\n\n");
        for class in references {
            out.push_str(&format!("- {class}\n"));
        }
    }

    out
}

/// Renders a vocabulary page.
pub fn render_vocab(vocab: &Vocab) -> String {
    let mut out = String::new();
    push_common(&mut out, &vocab.declaration);
    out.push('\n');

    out.push_str("## Entries\n\n");
    for (name, value) in vocab.entries.iter() {
        out.push_str(&format!("- {name}: {value}\n"));
    }

    out
}

fn push_common(out: &mut String, decl: &Declaration) {
    out.push_str(&format!("<!-- Auto generated markdown by {GENERATOR} -->\n\n"));
    out.push_str(&format!("# {}\n\n", decl.name));

    out.push_str("## Summary\n\n");
    out.push_str(&format!("{}\n\n", decl.summary));

    out.push_str("## Description\n\n");
    out.push_str(&format!("{}\n\n", decl.description));

    out.push_str("## Metadata\n\n");
    for (key, values) in decl.metadata.iter() {
        out.push_str(&format!("- {key}: {}\n", values.join(" ")));
    }
}
