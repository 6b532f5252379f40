//! End-to-end scenarios: records in, validated spec and serialized graph out.

use sophia_api::prelude::*;
use sophia_inmem::graph::LightGraph;
use sophia_turtle::parser::{nt, turtle};

use specgen_model::iri::iris;
use specgen_model::record::SpecDocument;
use specgen_model::{build_graph, gen_rdf, Config, Diagnostics, Entity, GraphFormat, Spec};

const PREFIX: &str = "https://spdx.org/rdf/v3/";

fn load(json: &str) -> (Spec, Diagnostics) {
    let document = SpecDocument::from_json_str(json).expect("valid record document");
    let mut diag = Diagnostics::new();
    let spec = Spec::from_document(Config::default(), document, &mut diag);
    (spec, diag)
}

fn id(namespace: &str, name: &str) -> String {
    format!("{PREFIX}{namespace}#{name}")
}

const SAMPLE: &str = r#"{
  "namespaces": [
    {
      "name": "core",
      "classes": [
        { "name": "Widget", "summary": "A widget.",
          "metadata": [ { "name": "SubclassOf", "values": ["base:Thing"] } ],
          "properties": [ { "name": "label", "values": [ { "name": "type", "values": ["xsd:string"] } ] } ] },
        { "name": "Gadget",
          "properties": [ { "name": "label", "values": [] }, { "name": "hasPart", "values": [] } ] }
      ],
      "properties": [
        { "name": "hasPart",
          "metadata": [ { "name": "Domain", "values": ["Widget"] },
                        { "name": "Range", "values": ["core:Gadget"] } ] },
        { "name": "label",
          "metadata": [ { "name": "Nature", "values": [] },
                        { "name": "Range", "values": ["xsd:string"] } ] }
      ],
      "vocabs": [
        { "name": "Color", "entries": [ { "name": "red", "value": "The color red." } ] }
      ]
    },
    {
      "name": "base",
      "classes": [ { "name": "Thing" } ]
    }
  ]
}"#;

/// A class with nothing declared gets exactly one triple.
#[test]
fn scenario_a_bare_class() {
    let (spec, diag) = load(r#"{"namespaces": [{"name": "core", "classes": [{"name": "Widget"}]}]}"#);
    assert!(!diag.has_error());

    let graph = build_graph(&spec);
    let widget = id("core", "Widget");
    let about: Vec<_> = graph.about(&widget).collect();
    assert_eq!(about.len(), 1);
    assert_eq!(about[0].predicate, iris::RDF_TYPE);
    assert_eq!(about[0].object, iris::OWL_CLASS);

    let class = spec
        .namespace("core")
        .and_then(|ns| ns.classes.get("Widget"))
        .expect("Widget registered");
    assert_eq!(
        class.declaration.metadata.keys().collect::<Vec<_>>(),
        vec!["id", "Instantiability", "Status"]
    );
    assert_eq!(class.id(), widget);
}

#[test]
fn scenario_b_qualified_superclass() {
    let (spec, diag) = load(SAMPLE);
    assert!(!diag.has_error());
    let graph = build_graph(&spec);
    assert!(graph.contains(&id("core", "Widget"), iris::RDFS_SUBCLASS_OF, &id("base", "Thing")));
}

#[test]
fn scenario_c_domain_and_range() {
    let (spec, _) = load(SAMPLE);
    let graph = build_graph(&spec);
    let has_part = id("core", "hasPart");
    assert!(graph.contains(&has_part, iris::RDFS_DOMAIN, &id("core", "Widget")));
    assert!(graph.contains(&has_part, iris::RDFS_RANGE, &id("core", "Gadget")));
    assert!(graph.contains(&has_part, iris::RDF_TYPE, iris::OWL_OBJECT_PROPERTY));

    // An empty `Nature` line is the only way to get a datatype property.
    let label = id("core", "label");
    assert!(graph.contains(&label, iris::RDF_TYPE, iris::OWL_DATATYPE_PROPERTY));
    assert!(graph.contains(&label, iris::RDFS_RANGE, &id("xsd", "string")));
}

#[test]
fn scenario_d_reverse_index_in_declaration_order() {
    let (spec, _) = load(SAMPLE);
    assert_eq!(spec.references_to("label"), ["core:Widget", "core:Gadget"]);
    assert_eq!(spec.references_to("hasPart"), ["core:Gadget"]);
    let keys: Vec<&str> = spec.dataprop_refs().keys().collect();
    assert_eq!(keys, vec!["label", "hasPart"]);
}

#[test]
fn emission_is_idempotent() {
    let (spec, diag) = load(SAMPLE);
    let first = gen_rdf(&spec, &diag, GraphFormat::Turtle).expect("clean run");
    let second = gen_rdf(&spec, &diag, GraphFormat::Turtle).expect("clean run");
    assert_eq!(first, second);

    let (again, again_diag) = load(SAMPLE);
    let third = gen_rdf(&again, &again_diag, GraphFormat::Turtle).expect("clean run");
    assert_eq!(first, third);
}

#[test]
fn turtle_output_parses_back() {
    let (spec, diag) = load(SAMPLE);
    let expected = build_graph(&spec).len();
    let ttl = gen_rdf(&spec, &diag, GraphFormat::Turtle).expect("clean run");

    let parsed: LightGraph = turtle::parse_str(&ttl)
        .collect_triples()
        .expect("generated Turtle must parse");
    assert_eq!(parsed.triples().count(), expected);
}

#[test]
fn ntriples_output_parses_back() {
    let (spec, diag) = load(SAMPLE);
    let expected = build_graph(&spec).len();
    let text = gen_rdf(&spec, &diag, GraphFormat::NTriples).expect("clean run");

    let parsed: LightGraph = nt::parse_str(&text)
        .collect_triples()
        .expect("generated N-Triples must parse");
    assert_eq!(parsed.triples().count(), expected);
}

#[test]
fn names_with_spaces_still_parse() {
    let (spec, diag) = load(
        r#"{"namespaces": [{"name": "core",
            "classes": [{"name": "My Widget", "metadata": [{"name": "SubclassOf", "values": ["Base \"Thing\""]}]}],
            "properties": [{"name": "has part", "metadata": [{"name": "Domain", "values": ["My Widget"]}]}]
        }]}"#,
    );
    assert!(!diag.has_error());
    let expected = build_graph(&spec).len();

    let ttl = gen_rdf(&spec, &diag, GraphFormat::Turtle).expect("clean run");
    assert!(ttl.contains("<https://spdx.org/rdf/v3/core#My%20Widget>"));
    assert!(ttl.contains("<https://spdx.org/rdf/v3/core#Base%20%22Thing%22>"));
    let parsed: LightGraph = turtle::parse_str(&ttl)
        .collect_triples()
        .expect("percent-encoded Turtle must parse");
    assert_eq!(parsed.triples().count(), expected);

    let text = gen_rdf(&spec, &diag, GraphFormat::NTriples).expect("clean run");
    let parsed: LightGraph = nt::parse_str(&text)
        .collect_triples()
        .expect("percent-encoded N-Triples must parse");
    assert_eq!(parsed.triples().count(), expected);
}

#[test]
fn any_duplicate_blocks_the_graph() {
    let (spec, diag) = load(
        r#"{"namespaces": [{"name": "core", "classes": [
            {"name": "Widget", "metadata": [
                {"name": "Status", "values": ["Stable"]},
                {"name": "Status", "values": ["Deprecated"]}
            ]}
        ]}]}"#,
    );
    assert!(diag.has_error());

    let class = spec
        .namespace("core")
        .and_then(|ns| ns.classes.get("Widget"))
        .expect("construction continues past the duplicate");
    assert_eq!(class.declaration.metadata.values_of("Status"), ["Stable"]);

    let err = gen_rdf(&spec, &diag, GraphFormat::Turtle).expect_err("tainted run");
    assert!(err.is_tainted());
}

#[test]
fn duplicate_namespace_keeps_last_declaration() {
    let (spec, diag) = load(
        r#"{"namespaces": [
            {"name": "core", "classes": [{"name": "Widget", "properties": [{"name": "label"}]}]},
            {"name": "core", "classes": [{"name": "Gadget"}]}
        ]}"#,
    );
    assert_eq!(diag.error_count(), 1);
    let graph = build_graph(&spec);
    assert!(graph.contains(&id("core", "Gadget"), iris::RDF_TYPE, iris::OWL_CLASS));
    assert!(graph.about(&id("core", "Widget")).next().is_none());
    // The reverse index is never pruned, even for replaced declarations.
    assert_eq!(spec.references_to("label"), ["core:Widget"]);
}
