//! Derivation of `rdf:Property` definitions from property shapes.

use crate::error::{Result, ShapesError};
use crate::shape::NodeShape;
use rescs_domain::vocab::{rdf, rdfs, schema, sh};
use rescs_jsonld::node;
use serde_json::{Map, Value, json};
use tracing::trace;

/// Range of a property shape: its `sh:datatype`, else `sh:class`, else `sh:nodeKind`.
///
/// # Errors
/// [`ShapesError::UnknownRange`] when none of them is present.
pub fn determine_property_range(prop: &Value) -> Result<Vec<Value>> {
    [sh::DATATYPE, sh::CLASS, sh::NODE_KIND]
        .into_iter()
        .find_map(|key| prop.get(key).and_then(Value::as_array))
        .cloned()
        .ok_or_else(|| ShapesError::UnknownRange { property: describe(prop), context: None })
}

/// Builds the `rdf:Property` node for `prop` on the shape targeting `target_class`.
///
/// With `sh:or`, the range is the concatenation of the ranges of the list members.
///
/// # Errors
/// [`ShapesError::MissingProperty`] without a `sh:path` IRI, a `sh:name` or a
/// `sh:description`, or any range error.
pub fn generate_property_def(prop: &Value, target_class: &str) -> Result<Value> {
    let path = node::first_id(prop, sh::PATH).ok_or_else(|| ShapesError::MissingProperty {
        node: describe(prop),
        property: "sh:path",
        context: None,
    })?;

    let mut def = Map::new();
    def.insert("@id".to_owned(), Value::String(path.to_owned()));
    def.insert("@type".to_owned(), json!([rdf::PROPERTY]));
    def.insert(schema::DOMAIN_INCLUDES.to_owned(), json!([{ "@id": target_class }]));

    for (from, to, property) in
        [(sh::NAME, rdfs::LABEL, "sh:name"), (sh::DESCRIPTION, rdfs::COMMENT, "sh:description")]
    {
        let values = prop.get(from).ok_or_else(|| ShapesError::MissingProperty {
            node: path.to_owned(),
            property,
            context: None,
        })?;
        def.insert(to.to_owned(), values.clone());
    }

    let range = match node::list(prop, sh::OR) {
        Some(members) => {
            let mut range = Vec::new();
            for member in members {
                range.extend(determine_property_range(member)?);
            }
            range
        },
        None => determine_property_range(prop)?,
    };
    def.insert(schema::RANGE_INCLUDES.to_owned(), Value::Array(range));

    Ok(Value::Object(def))
}

/// One definition per property shape.
///
/// # Errors
/// See [`generate_property_def`].
pub fn analyse_property_shapes(props: &[Value], target_class: &str) -> Result<Vec<Value>> {
    props.iter().map(|prop| generate_property_def(prop, target_class)).collect()
}

/// Property definitions for every node shape of `graph`.
///
/// The `schema:Thing` shape contributes its own `sh:property`; every other
/// shape contributes the properties of the second member of its `sh:and`.
///
/// # Errors
/// [`ShapesError::MissingConjunction`] for a non-Thing shape without `sh:and`,
/// or any error of [`analyse_property_shapes`].
pub fn generate_property_defs_from_shapes(graph: &[Value]) -> Result<Vec<Value>> {
    let mut properties = Vec::new();
    for shape in graph.iter().filter_map(NodeShape::from_node) {
        let target_class = shape.target_class()?;

        let props = if shape.targets_thing() {
            shape.properties()
        } else {
            if shape.conjuncts().is_none() {
                return Err(ShapesError::MissingConjunction { shape: shape.label(), context: None });
            }
            shape.local_properties().unwrap_or_default()
        };

        trace!(shape = %shape.label(), count = props.len(), "Deriving property definitions");
        properties.extend(analyse_property_shapes(props, target_class)?);
    }
    Ok(properties)
}

fn describe(prop: &Value) -> String {
    node::first_id(prop, sh::PATH).map_or_else(|| prop.to_string(), str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rescs_domain::vocab::xsd;

    fn name_shape() -> Value {
        json!({
            (sh::PATH): [{ "@id": "http://schema.org/name" }],
            (sh::NAME): [{ "@value": "name" }],
            (sh::DESCRIPTION): [{ "@value": "The name of the item." }],
            (sh::DATATYPE): [{ "@id": xsd::STRING }]
        })
    }

    #[test]
    fn range_prefers_datatype_then_class_then_node_kind() {
        let both = json!({
            (sh::CLASS): [{ "@id": "http://schema.org/Person" }],
            (sh::NODE_KIND): [{ "@id": "http://www.w3.org/ns/shacl#IRI" }]
        });
        assert_eq!(determine_property_range(&both).unwrap(), vec![json!({ "@id": "http://schema.org/Person" })]);
        assert_eq!(determine_property_range(&name_shape()).unwrap(), vec![json!({ "@id": xsd::STRING })]);

        let kind = json!({ (sh::NODE_KIND): [{ "@id": "http://www.w3.org/ns/shacl#IRI" }] });
        assert_eq!(determine_property_range(&kind).unwrap()[0]["@id"], "http://www.w3.org/ns/shacl#IRI");
    }

    #[test]
    fn range_without_constraint_fails() {
        let prop = json!({ (sh::PATH): [{ "@id": "http://schema.org/about" }] });
        let err = determine_property_range(&prop).unwrap_err();
        assert!(matches!(err, ShapesError::UnknownRange { ref property, .. } if property == "http://schema.org/about"));
    }

    #[test]
    fn property_def_carries_domain_label_comment_and_range() {
        let def = generate_property_def(&name_shape(), schema::THING).unwrap();
        assert_eq!(def["@id"], "http://schema.org/name");
        assert_eq!(def["@type"], json!([rdf::PROPERTY]));
        assert_eq!(def[schema::DOMAIN_INCLUDES], json!([{ "@id": schema::THING }]));
        assert_eq!(def[rdfs::LABEL], json!([{ "@value": "name" }]));
        assert_eq!(def[rdfs::COMMENT][0]["@value"], "The name of the item.");
        assert_eq!(def[schema::RANGE_INCLUDES], json!([{ "@id": xsd::STRING }]));
    }

    #[test]
    fn or_list_concatenates_member_ranges() {
        let prop = json!({
            (sh::PATH): [{ "@id": "http://schema.org/funder" }],
            (sh::NAME): [{ "@value": "funder" }],
            (sh::DESCRIPTION): [{ "@value": "A person or organization that supports a thing." }],
            (sh::OR): [{ "@list": [
                { (sh::CLASS): [{ "@id": "http://schema.org/Person" }] },
                { (sh::CLASS): [{ "@id": "http://schema.org/Organization" }] }
            ] }]
        });
        let def = generate_property_def(&prop, "http://schema.org/Project").unwrap();
        assert_eq!(
            def[schema::RANGE_INCLUDES],
            json!([{ "@id": "http://schema.org/Person" }, { "@id": "http://schema.org/Organization" }])
        );
        assert_eq!(def[rdfs::LABEL], json!([{ "@value": "funder" }]));
    }

    #[test]
    fn or_member_without_range_fails() {
        let prop = json!({
            (sh::PATH): [{ "@id": "http://schema.org/funder" }],
            (sh::NAME): [{ "@value": "funder" }],
            (sh::DESCRIPTION): [{ "@value": "A person or organization that supports a thing." }],
            (sh::OR): [{ "@list": [{ (sh::CLASS): [{ "@id": "http://schema.org/Person" }] }, {}] }]
        });
        assert!(matches!(generate_property_def(&prop, schema::THING), Err(ShapesError::UnknownRange { .. })));
    }

    #[test]
    fn missing_path_is_reported() {
        let prop = json!({ (sh::DATATYPE): [{ "@id": xsd::STRING }] });
        let err = generate_property_def(&prop, schema::THING).unwrap_err();
        assert!(matches!(err, ShapesError::MissingProperty { property: "sh:path", .. }));
    }

    #[test]
    fn missing_name_or_description_is_reported() {
        for (key, expected) in [(sh::NAME, "sh:name"), (sh::DESCRIPTION, "sh:description")] {
            let mut prop = name_shape();
            prop.as_object_mut().unwrap().remove(key);
            let err = generate_property_def(&prop, schema::THING).unwrap_err();
            assert!(
                matches!(err, ShapesError::MissingProperty { ref node, property, .. }
                    if node == "http://schema.org/name" && property == expected),
                "{err}"
            );
        }
    }

    #[test]
    fn non_thing_shape_without_conjunction_fails() {
        let graph = vec![json!({
            "@id": "http://rescs.org/dash/person/PersonShape",
            "@type": [sh::NODE_SHAPE],
            (sh::TARGET_CLASS): [{ "@id": "http://schema.org/Person" }],
            (sh::PROPERTY): [name_shape()]
        })];
        let err = generate_property_defs_from_shapes(&graph).unwrap_err();
        assert!(matches!(err, ShapesError::MissingConjunction { .. }));
    }

    #[test]
    fn shapes_contribute_own_or_local_properties() {
        let given_name = json!({
            (sh::PATH): [{ "@id": "http://schema.org/givenName" }],
            (sh::NAME): [{ "@value": "given name" }],
            (sh::DESCRIPTION): [{ "@value": "Given name of a person." }],
            (sh::DATATYPE): [{ "@id": xsd::STRING }]
        });
        let graph = vec![
            json!({
                "@id": "http://rescs.org/dash/thing/ThingShape",
                "@type": [sh::NODE_SHAPE],
                (sh::TARGET_CLASS): [{ "@id": schema::THING }],
                (sh::PROPERTY): [name_shape()]
            }),
            json!({
                "@id": "http://schema.org/Person",
                "@type": ["http://www.w3.org/2002/07/owl#Class"]
            }),
            json!({
                "@id": "http://rescs.org/dash/person/PersonShape",
                "@type": [sh::NODE_SHAPE],
                (sh::TARGET_CLASS): [{ "@id": "http://schema.org/Person" }],
                (sh::AND): [{ "@list": [
                    { "@id": "http://rescs.org/dash/thing/ThingShape" },
                    { (sh::PROPERTY): [given_name] }
                ] }]
            }),
            json!({
                "@id": "http://rescs.org/dash/event/EventShape",
                "@type": [sh::NODE_SHAPE],
                (sh::TARGET_CLASS): [{ "@id": "http://schema.org/Event" }],
                (sh::AND): [{ "@list": [{ "@id": "http://rescs.org/dash/thing/ThingShape" }] }]
            }),
        ];

        let defs = generate_property_defs_from_shapes(&graph).unwrap();
        let ids: Vec<_> = defs.iter().map(|d| d["@id"].as_str().unwrap()).collect();
        assert_eq!(ids, ["http://schema.org/name", "http://schema.org/givenName"]);
        assert_eq!(defs[1][schema::DOMAIN_INCLUDES][0]["@id"], "http://schema.org/Person");
    }
}
