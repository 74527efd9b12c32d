use oxigraph::model::vocab::{rdf, xsd};
use oxigraph::model::{Literal, NamedNode, Subject, Term};
use rescs_jsonld::{expand, to_quads};
use serde_json::json;

#[test]
fn nodes_types_and_literals() {
    let doc = json!({
        "@context": { "ex": "http://example.org/" },
        "@id": "ex:a",
        "@type": "ex:Thing",
        "ex:flag": true,
        "ex:count": 3,
        "ex:ratio": 0.5,
        "ex:name": "a"
    });
    let quads = to_quads(&expand(&doc).unwrap()).unwrap();
    assert_eq!(quads.len(), 5);

    let subject = Subject::from(NamedNode::new_unchecked("http://example.org/a"));
    assert!(quads.iter().all(|q| q.subject == subject));
    assert!(quads.iter().any(|q| q.predicate == rdf::TYPE
        && q.object == Term::from(NamedNode::new_unchecked("http://example.org/Thing"))));

    let object_of = |p: &str| {
        quads.iter().find(|q| q.predicate.as_str() == p).map(|q| q.object.clone()).unwrap()
    };
    assert_eq!(object_of("http://example.org/flag"), Term::from(Literal::from(true)));
    assert_eq!(
        object_of("http://example.org/count"),
        Term::from(Literal::new_typed_literal("3", xsd::INTEGER))
    );
    assert_eq!(object_of("http://example.org/ratio"), Term::from(Literal::from(0.5_f64)));
    assert_eq!(object_of("http://example.org/name"), Term::from(Literal::new_simple_literal("a")));
}

#[test]
fn lists_become_first_rest_chains() {
    let doc = json!({
        "@context": { "ex": "http://example.org/" },
        "@id": "ex:a",
        "ex:items": { "@list": [{ "@id": "ex:x" }, { "@id": "ex:y" }] }
    });
    let quads = to_quads(&expand(&doc).unwrap()).unwrap();

    assert_eq!(quads.iter().filter(|q| q.predicate == rdf::FIRST).count(), 2);
    assert_eq!(quads.iter().filter(|q| q.predicate == rdf::REST).count(), 2);
    assert!(quads.iter().any(|q| q.predicate == rdf::REST && q.object == Term::from(rdf::NIL.into_owned())));
}

#[test]
fn blank_nodes_are_fresh_per_call() {
    let doc = json!({
        "@context": { "ex": "http://example.org/" },
        "ex:p": { "ex:q": "nested" }
    });
    let nodes = expand(&doc).unwrap();
    let first = to_quads(&nodes).unwrap();
    let second = to_quads(&nodes).unwrap();

    assert_eq!(first.len(), 2);
    assert_ne!(first[0].subject, second[0].subject);
}

#[test]
fn relative_identifiers_produce_nothing() {
    let doc = json!({ "@context": { "ex": "http://example.org/" }, "@id": "relative", "ex:p": "x" });
    assert!(to_quads(&expand(&doc).unwrap()).unwrap().is_empty());
}
