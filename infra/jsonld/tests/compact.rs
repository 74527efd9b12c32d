use rescs_jsonld::{Context, compact, expand};
use serde_json::json;

fn output_context() -> Context {
    Context::from_prefixes([
        ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
        ("sh", "http://www.w3.org/ns/shacl#"),
        ("schema", "http://schema.org/"),
        ("rescs", "http://rescs.org/"),
    ])
}

#[test]
fn single_node_is_the_document() {
    let nodes = vec![json!({
        "@id": "http://rescs.org/dash/thing/ThingShape",
        "@type": ["http://www.w3.org/ns/shacl#NodeShape"],
        "http://www.w3.org/ns/shacl#targetClass": [{ "@id": "http://schema.org/Thing" }],
        "http://www.w3.org/ns/shacl#closed": [{ "@value": true }]
    })];

    let doc = compact(&nodes, &output_context());
    assert_eq!(doc["@context"]["sh"], "http://www.w3.org/ns/shacl#");
    assert_eq!(doc["@id"], "rescs:dash/thing/ThingShape");
    assert_eq!(doc["@type"], "sh:NodeShape");
    assert_eq!(doc["sh:targetClass"], json!({ "@id": "schema:Thing" }));
    assert_eq!(doc["sh:closed"], json!(true));
}

#[test]
fn several_nodes_go_into_graph_and_lists_are_kept() {
    let nodes = vec![
        json!({
            "@id": "http://rescs.org/A",
            "http://www.w3.org/ns/shacl#ignoredProperties": [{ "@list": [
                { "@id": "http://www.w3.org/1999/02/22-rdf-syntax-ns#type" }
            ] }]
        }),
        json!({
            "@id": "http://rescs.org/B",
            "http://www.w3.org/ns/shacl#property": []
        }),
    ];

    let doc = compact(&nodes, &output_context());
    let graph = doc["@graph"].as_array().unwrap();
    assert_eq!(graph.len(), 2);
    assert_eq!(graph[0]["sh:ignoredProperties"], json!({ "@list": [{ "@id": "rdf:type" }] }));
    assert_eq!(graph[1]["sh:property"], json!([]));
}

#[test]
fn typed_literals_keep_their_type() {
    let nodes = vec![json!({
        "@id": "http://rescs.org/p",
        "http://schema.org/age": [{ "@value": "42", "@type": "http://www.w3.org/2001/XMLSchema#integer" }],
        "http://schema.org/name": [{ "@value": "Ada" }, { "@value": "Lovelace" }]
    })];
    let ctx = Context::from_prefixes([
        ("schema", "http://schema.org/"),
        ("xsd", "http://www.w3.org/2001/XMLSchema#"),
    ]);

    let doc = compact(&nodes, &ctx);
    assert_eq!(doc["schema:age"], json!({ "@value": "42", "@type": "xsd:integer" }));
    assert_eq!(doc["schema:name"], json!(["Ada", "Lovelace"]));
}

#[test]
fn empty_context_produces_expanded_iris() {
    let doc = json!({
        "@context": { "ex": "http://example.org/" },
        "@graph": [{ "@id": "ex:a", "ex:p": "1" }, { "@id": "ex:b", "ex:p": "2" }]
    });
    let nodes = expand(&doc).unwrap();
    let out = compact(&nodes, &Context::default());

    assert!(out.get("@context").is_none());
    assert_eq!(out["@graph"][1], json!({ "@id": "http://example.org/b", "http://example.org/p": "2" }));
}

#[test]
fn compacted_output_expands_back_to_the_same_nodes() {
    let doc = json!({
        "@context": { "sh": "http://www.w3.org/ns/shacl#", "schema": "http://schema.org/" },
        "@id": "schema:PersonShape",
        "@type": "sh:NodeShape",
        "sh:and": { "@list": [{ "@id": "schema:ThingShape" }] }
    });
    let nodes = expand(&doc).unwrap();
    let again = expand(&compact(&nodes, &output_context())).unwrap();
    assert_eq!(again, nodes);
}
