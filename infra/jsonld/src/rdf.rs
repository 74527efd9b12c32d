use crate::error::Result;
use crate::keyword::{GRAPH, ID, LANGUAGE, LIST, TYPE, VALUE, is_keyword};
use fxhash::FxHashMap;
use oxigraph::model::vocab::{rdf, xsd};
use oxigraph::model::{BlankNode, GraphName, Literal, NamedNode, NamedOrBlankNode, Quad, Term};
use serde_json::{Map, Number, Value};
use tracing::trace;

/// Converts expanded node objects into quads of the default graph.
///
/// Nodes without `@id` become fresh blank nodes; `_:` labels are mapped to
/// fresh blank nodes per call, so two calls never share blank nodes.
/// Relative IRIs produce no statements.
///
/// # Errors
/// Fails on malformed datatype IRIs and language tags.
pub fn to_quads(nodes: &[Value]) -> Result<Vec<Quad>> {
    let mut writer = QuadWriter::default();
    for node in nodes {
        if let Value::Object(map) = node {
            writer.node(map)?;
        }
    }
    Ok(writer.quads)
}

#[derive(Default)]
struct QuadWriter {
    quads: Vec<Quad>,
    blank_nodes: FxHashMap<String, BlankNode>,
}

impl QuadWriter {
    fn push(&mut self, subject: &NamedOrBlankNode, predicate: NamedNode, object: Term) {
        self.quads.push(Quad::new(subject.clone(), predicate, object, GraphName::DefaultGraph));
    }

    fn subject(&mut self, id: Option<&str>) -> Option<NamedOrBlankNode> {
        match id {
            None => Some(BlankNode::default().into()),
            Some(label) if label.starts_with("_:") => {
                Some(self.blank_nodes.entry(label.to_owned()).or_default().clone().into())
            },
            Some(iri) => NamedNode::new(iri).ok().map(Into::into),
        }
    }

    fn node(&mut self, map: &Map<String, Value>) -> Result<Option<NamedOrBlankNode>> {
        let Some(subject) = self.subject(map.get(ID).and_then(Value::as_str)) else {
            trace!(id = ?map.get(ID), "Skipping node with a relative identifier");
            return Ok(None);
        };

        for (key, value) in map {
            match key.as_str() {
                TYPE => {
                    for class in as_slice(value).iter().filter_map(Value::as_str) {
                        if let Ok(class) = NamedNode::new(class) {
                            self.push(&subject, rdf::TYPE.into_owned(), class.into());
                        }
                    }
                },
                GRAPH => {
                    for nested in as_slice(value) {
                        if let Value::Object(nested) = nested {
                            self.node(nested)?;
                        }
                    }
                },
                keyword if is_keyword(keyword) => {},
                predicate => {
                    let Ok(predicate) = NamedNode::new(predicate) else { continue };
                    for item in as_slice(value) {
                        if let Some(object) = self.object(item)? {
                            self.push(&subject, predicate.clone(), object);
                        }
                    }
                },
            }
        }

        Ok(Some(subject))
    }

    fn object(&mut self, item: &Value) -> Result<Option<Term>> {
        let Value::Object(map) = item else { return Ok(None) };
        if let Some(value) = map.get(VALUE) {
            return Ok(literal(map, value)?.map(Term::from));
        }
        if let Some(list) = map.get(LIST) {
            return self.list(as_slice(list)).map(Some);
        }
        Ok(self.node(map)?.map(Term::from))
    }

    /// Builds an `rdf:first`/`rdf:rest` chain and returns its head.
    fn list(&mut self, items: &[Value]) -> Result<Term> {
        let mut members = Vec::with_capacity(items.len());
        for item in items {
            if let Some(term) = self.object(item)? {
                members.push(term);
            }
        }

        let mut rest: Term = rdf::NIL.into_owned().into();
        for member in members.into_iter().rev() {
            let cell: NamedOrBlankNode = BlankNode::default().into();
            self.push(&cell, rdf::FIRST.into_owned(), member);
            self.push(&cell, rdf::REST.into_owned(), rest);
            rest = cell.into();
        }
        Ok(rest)
    }
}

fn literal(map: &Map<String, Value>, value: &Value) -> Result<Option<Literal>> {
    let datatype = map.get(TYPE).and_then(Value::as_str);
    let language = map.get(LANGUAGE).and_then(Value::as_str);

    let literal = match (value, datatype) {
        (Value::String(text), Some(datatype)) => {
            Literal::new_typed_literal(text, NamedNode::new(datatype)?)
        },
        (Value::String(text), None) => match language {
            Some(language) => Literal::new_language_tagged_literal(text, language)?,
            None => Literal::new_simple_literal(text),
        },
        (Value::Bool(flag), None) => Literal::from(*flag),
        (Value::Number(number), None) => number_literal(number),
        (Value::Bool(_) | Value::Number(_), Some(datatype)) => {
            Literal::new_typed_literal(value.to_string(), NamedNode::new(datatype)?)
        },
        _ => return Ok(None),
    };
    Ok(Some(literal))
}

/// Integral numbers map to `xsd:integer`, everything else to `xsd:double`.
fn number_literal(number: &Number) -> Literal {
    if let Some(int) = number.as_i64() {
        return Literal::from(int);
    }
    if let Some(uint) = number.as_u64() {
        return Literal::new_typed_literal(uint.to_string(), xsd::INTEGER);
    }
    let float = number.as_f64().unwrap_or(f64::NAN);
    if float.fract().abs() < f64::EPSILON && float.abs() < 1e21 {
        return Literal::new_typed_literal(format!("{float:.0}"), xsd::INTEGER);
    }
    Literal::from(float)
}

fn as_slice(value: &Value) -> &[Value] {
    match value {
        Value::Array(items) => items,
        other => std::slice::from_ref(other),
    }
}
