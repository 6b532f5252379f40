//! Turtle 1.1 serializer.
//!
//! Writes every prefix binding, then one block per subject in first-assertion
//! order. Within a block, predicates keep first-assertion order and share
//! objects with `,`.

use crate::graph::Graph;
use crate::iri::iris;
use crate::model::FieldMap;

use super::iri_ref;

/// Serializes `graph` to a Turtle string.
#[must_use]
pub fn to_turtle(graph: &Graph) -> String {
    let mut out = String::with_capacity(64 * graph.len() + 512);

    // Prefix declarations
    let width = graph
        .prefixes()
        .iter()
        .map(|(prefix, _)| prefix.len() + 1)
        .max()
        .unwrap_or(0);
    for (prefix, namespace) in graph.prefixes() {
        out.push_str(&format!(
            "@prefix {:<width$} <{}> .\n",
            format!("{prefix}:"),
            namespace
        ));
    }
    out.push('\n');

    for (subject, predicates) in group_by_subject(graph).iter() {
        out.push_str(&term(graph, subject));
        for (i, (predicate, objects)) in predicates.iter().enumerate() {
            out.push_str(if i == 0 { "\n  " } else { " ;\n  " });
            if predicate == iris::RDF_TYPE {
                out.push('a');
            } else {
                out.push_str(&term(graph, predicate));
            }
            out.push(' ');
            let rendered: Vec<String> = objects.iter().map(|o| term(graph, o)).collect();
            out.push_str(&rendered.join(" , "));
        }
        out.push_str(" .\n\n");
    }

    out
}

fn group_by_subject(graph: &Graph) -> FieldMap<FieldMap<Vec<&str>>> {
    let mut subjects: FieldMap<FieldMap<Vec<&str>>> = FieldMap::new();
    for triple in graph.triples() {
        if !subjects.contains_key(&triple.subject) {
            subjects.insert(triple.subject.as_str(), FieldMap::new());
        }
        let Some(predicates) = subjects.get_mut(&triple.subject) else {
            continue;
        };
        match predicates.get_mut(&triple.predicate) {
            Some(objects) => objects.push(&triple.object),
            None => {
                predicates.insert(triple.predicate.as_str(), vec![triple.object.as_str()]);
            }
        }
    }
    subjects
}

fn term(graph: &Graph, iri: &str) -> String {
    graph.compact(iri).unwrap_or_else(|| iri_ref(iri))
}
