use rescs_jsonld::{JsonLdError, expand, node};
use serde_json::json;

const SH: &str = "http://www.w3.org/ns/shacl#";

fn shape_document() -> serde_json::Value {
    json!({
        "@context": {
            "sh": SH,
            "schema": "http://schema.org/",
            "xsd": "http://www.w3.org/2001/XMLSchema#",
            "nxv": "https://bluebrain.github.io/nexus/vocabulary/",
            "shapes": { "@id": "nxv:shapes", "@type": "@id" },
            "targetClass": { "@id": "sh:targetClass", "@type": "@id" },
            "and": { "@id": "sh:and", "@container": "@list" }
        },
        "@id": "http://rescs.org/dash/person",
        "@type": "nxv:Schema",
        "shapes": [{
            "@id": "http://rescs.org/dash/person/PersonShape",
            "@type": "sh:NodeShape",
            "targetClass": "schema:Person",
            "and": [
                { "@id": "http://rescs.org/dash/thing/ThingShape" },
                { "sh:property": [{ "sh:path": { "@id": "schema:givenName" }, "sh:datatype": { "@id": "xsd:string" } }] }
            ]
        }]
    })
}

#[test]
fn expands_terms_and_coercions() {
    let nodes = expand(&shape_document()).unwrap();
    assert_eq!(nodes.len(), 1);

    let schema = &nodes[0];
    assert_eq!(node::id(schema), Some("http://rescs.org/dash/person"));
    assert!(node::has_type(schema, "https://bluebrain.github.io/nexus/vocabulary/Schema"));

    let shapes = node::values(schema, "https://bluebrain.github.io/nexus/vocabulary/shapes");
    assert_eq!(shapes.len(), 1);
    let shape = &shapes[0];
    assert!(node::has_type(shape, &format!("{SH}NodeShape")));
    assert_eq!(node::first_id(shape, &format!("{SH}targetClass")), Some("http://schema.org/Person"));

    let conjuncts = node::list(shape, &format!("{SH}and")).unwrap();
    assert_eq!(conjuncts.len(), 2);
    assert_eq!(node::id(&conjuncts[0]), Some("http://rescs.org/dash/thing/ThingShape"));

    let props = node::values(&conjuncts[1], &format!("{SH}property"));
    assert_eq!(node::first_id(&props[0], &format!("{SH}path")), Some("http://schema.org/givenName"));
}

#[test]
fn graph_wrapper_is_unwrapped_and_bare_ids_dropped() {
    let doc = json!({
        "@context": { "ex": "http://example.org/" },
        "@graph": [
            { "@id": "ex:a", "ex:p": "value" },
            { "@id": "ex:only-id" },
            "free-floating"
        ]
    });
    let nodes = expand(&doc).unwrap();
    assert_eq!(nodes, vec![json!({
        "@id": "http://example.org/a",
        "http://example.org/p": [{ "@value": "value" }]
    })]);
}

#[test]
fn unmapped_keys_are_dropped() {
    let doc = json!({
        "@context": { "ex": "http://example.org/" },
        "@id": "ex:a",
        "label": "no mapping",
        "ex:kept": true
    });
    let nodes = expand(&doc).unwrap();
    assert!(nodes[0].get("label").is_none());
    assert_eq!(nodes[0]["http://example.org/kept"], json!([{ "@value": true }]));
}

#[test]
fn typed_terms_and_value_objects() {
    let doc = json!({
        "@context": {
            "xsd": "http://www.w3.org/2001/XMLSchema#",
            "age": { "@id": "http://schema.org/age", "@type": "xsd:integer" },
            "id": "@id"
        },
        "id": "http://example.org/p",
        "age": "42",
        "http://schema.org/name": { "@value": "Ada", "@language": "EN" }
    });
    let nodes = expand(&doc).unwrap();
    let person = &nodes[0];
    assert_eq!(node::id(person), Some("http://example.org/p"));
    assert_eq!(
        person["http://schema.org/age"],
        json!([{ "@value": "42", "@type": "http://www.w3.org/2001/XMLSchema#integer" }])
    );
    assert_eq!(person["http://schema.org/name"], json!([{ "@value": "Ada", "@language": "en" }]));
}

#[test]
fn nested_contexts_apply_to_their_subtree() {
    let doc = json!({
        "@context": { "ex": "http://example.org/" },
        "@id": "ex:outer",
        "ex:child": {
            "@context": { "@vocab": "http://schema.org/" },
            "name": "inner"
        }
    });
    let nodes = expand(&doc).unwrap();
    let child = &nodes[0]["http://example.org/child"][0];
    assert_eq!(child["http://schema.org/name"], json!([{ "@value": "inner" }]));
}

#[test]
fn remote_context_is_an_error() {
    let doc = json!({ "@context": "https://bluebrain.github.io/nexus/contexts/shacl-20170720.json" });
    assert!(matches!(expand(&doc), Err(JsonLdError::RemoteContext { .. })));
}
