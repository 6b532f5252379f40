//! Demonstrates building a spec from records and serializing its graph.
//!
//! Run with: `cargo run --example dump_graph -p specgen-model`

use specgen_model::record::{
    ClassRecord, NamespaceRecord, PropertyRecord, PropertyUsageRecord, SpecDocument, ValuesLine,
};
use specgen_model::{gen_rdf, Config, Diagnostics, GraphFormat, Spec};

fn main() {
    let document = SpecDocument {
        namespaces: vec![NamespaceRecord {
            name: "core".to_owned(),
            classes: vec![ClassRecord {
                name: "Widget".to_owned(),
                metadata: vec![ValuesLine::new("SubclassOf", ["Element"])],
                properties: vec![PropertyUsageRecord {
                    name: "hasPart".to_owned(),
                    values: vec![ValuesLine::new("type", ["Widget"])],
                }],
                ..ClassRecord::default()
            }],
            properties: vec![PropertyRecord {
                name: "hasPart".to_owned(),
                metadata: vec![
                    ValuesLine::new("Domain", ["Widget"]),
                    ValuesLine::new("Range", ["Widget"]),
                ],
                ..PropertyRecord::default()
            }],
            ..NamespaceRecord::default()
        }],
    };

    let mut diag = Diagnostics::new();
    let spec = Spec::from_document(Config::default(), document, &mut diag);

    println!("Spec");
    println!("  Namespaces:   {}", spec.namespaces().count());
    println!("  Classes:      {}", spec.class_count());
    println!("  Properties:   {}", spec.property_count());
    println!("  Vocabularies: {}", spec.vocab_count());
    println!();

    for (property, classes) in spec.dataprop_refs().iter() {
        println!("  {property:12} used by {}", classes.join(", "));
    }
    println!();

    for format in [GraphFormat::Turtle, GraphFormat::NTriples] {
        match gen_rdf(&spec, &diag, format) {
            Ok(text) => println!("{} output ({} bytes):\n{text}", format.extension(), text.len()),
            Err(e) => println!("{} output unavailable: {e}", format.extension()),
        }
    }
}
