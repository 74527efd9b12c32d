use crate::context::{Container, Context, TypeMapping, is_absolute_iri};
use crate::error::{JsonLdError, Result};
use crate::keyword::{CONTEXT, GRAPH, ID, LANGUAGE, LIST, SET, TYPE, VALUE, is_keyword};
use serde_json::{Map, Value, json};
use std::borrow::Cow;
use tracing::trace;

/// Expands a JSON-LD document using only the contexts it embeds.
///
/// Returns the top-level node objects; a document that is a bare
/// `{"@graph": [...]}` wrapper yields the nodes of that graph.
///
/// # Errors
/// Fails on remote or malformed contexts and on malformed keyword values.
pub fn expand(document: &Value) -> Result<Vec<Value>> {
    expand_with(document, &Context::default())
}

/// Like [`expand`], starting from `context` instead of an empty context.
///
/// # Errors
/// See [`expand`].
pub fn expand_with(document: &Value, context: &Context) -> Result<Vec<Value>> {
    let nodes = match element(context, None, document)? {
        None => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(Value::Object(mut obj)) if obj.len() == 1 && obj.contains_key(GRAPH) => {
            obj.remove(GRAPH).map(into_array).unwrap_or_default()
        },
        Some(other) => vec![other],
    };
    Ok(nodes)
}

/// `property` is the (unexpanded) key the element is the value of.
fn element(ctx: &Context, property: Option<&str>, value: &Value) -> Result<Option<Value>> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match element(ctx, property, item)? {
                    Some(Value::Array(nested)) => out.extend(nested),
                    Some(expanded) => out.push(expanded),
                    None => {},
                }
            }
            Ok(Some(Value::Array(out)))
        },
        Value::Object(map) => object(ctx, property, map),
        scalar if is_free_floating(property) => {
            trace!(%scalar, "Dropping free-floating value");
            Ok(None)
        },
        scalar => Ok(Some(expand_value(ctx, property, scalar))),
    }
}

fn object(ctx: &Context, property: Option<&str>, map: &Map<String, Value>) -> Result<Option<Value>> {
    let ctx = match map.get(CONTEXT) {
        Some(local) => Cow::Owned(ctx.merge(local)?),
        None => Cow::Borrowed(ctx),
    };

    let mut result = Map::new();
    for (key, value) in map {
        if key == CONTEXT {
            continue;
        }
        let expanded_key = ctx.expand_iri(key, true);

        if is_keyword(&expanded_key) {
            keyword_entry(&ctx, property, &expanded_key, value, &mut result)?;
            continue;
        }
        if !is_absolute_iri(&expanded_key) {
            trace!(key, "Dropping key without an IRI mapping");
            continue;
        }

        let is_list = ctx.term(key).is_some_and(|def| def.container == Some(Container::List));
        let expanded = if is_list {
            let items = into_array(element(&ctx, Some(key), value)?.unwrap_or(Value::Null));
            match items.as_slice() {
                [single] if single.get(LIST).is_some() => Some(single.clone()),
                _ => Some(json!({ "@list": items })),
            }
        } else {
            element(&ctx, Some(key), value)?
        };

        if let Some(expanded) = expanded {
            let entry = result.entry(expanded_key).or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(values) = entry {
                values.extend(into_array(expanded));
            }
        }
    }

    if let Some(raw) = result.get(VALUE) {
        if raw.is_null() {
            return Ok(None);
        }
        if let Some(Value::Array(types)) = result.get(TYPE) {
            let datatype = types.first().cloned().unwrap_or(Value::Null);
            result.insert(TYPE.to_owned(), datatype);
        }
        return Ok(Some(Value::Object(result)));
    }
    if let Some(set) = result.remove(SET) {
        return Ok(Some(set));
    }
    if result.contains_key(LIST) {
        return Ok(Some(Value::Object(result)));
    }
    if result.len() == 1 && result.contains_key(LANGUAGE) {
        return Ok(None);
    }
    if is_free_floating(property) && (result.is_empty() || (result.len() == 1 && result.contains_key(ID))) {
        return Ok(None);
    }
    Ok(Some(Value::Object(result)))
}

fn keyword_entry(
    ctx: &Context,
    property: Option<&str>,
    keyword: &str,
    value: &Value,
    result: &mut Map<String, Value>,
) -> Result<()> {
    match keyword {
        ID => {
            let Some(id) = value.as_str() else {
                return Err(document_error(format!("@id must be a string, found {value}")));
            };
            result.insert(ID.to_owned(), Value::String(ctx.expand_iri(id, false)));
        },
        TYPE => {
            let types = match value {
                Value::String(ty) => vec![ty.as_str()],
                Value::Array(items) => items
                    .iter()
                    .map(|item| {
                        item.as_str()
                            .ok_or_else(|| document_error(format!("@type entries must be strings, found {item}")))
                    })
                    .collect::<Result<Vec<_>>>()?,
                other => return Err(document_error(format!("@type must be a string, found {other}"))),
            };
            let expanded = types.into_iter().map(|ty| Value::String(ctx.expand_iri(ty, true))).collect();
            result.insert(TYPE.to_owned(), Value::Array(expanded));
        },
        GRAPH => {
            let nodes = element(ctx, Some(GRAPH), value)?.map(into_array).unwrap_or_default();
            result.insert(GRAPH.to_owned(), Value::Array(nodes));
        },
        VALUE => {
            if value.is_object() || value.is_array() {
                return Err(document_error(format!("@value must be a scalar, found {value}")));
            }
            result.insert(VALUE.to_owned(), value.clone());
        },
        LANGUAGE => {
            if let Some(lang) = value.as_str() {
                result.insert(LANGUAGE.to_owned(), Value::String(lang.to_ascii_lowercase()));
            }
        },
        LIST if !is_free_floating(property) => {
            let items = element(ctx, property, value)?.map(into_array).unwrap_or_default();
            result.insert(LIST.to_owned(), Value::Array(items));
        },
        SET => {
            let items = element(ctx, property, value)?.map(into_array).unwrap_or_default();
            result.insert(SET.to_owned(), Value::Array(items));
        },
        other => trace!(keyword = other, "Ignoring unsupported keyword"),
    }
    Ok(())
}

fn expand_value(ctx: &Context, property: Option<&str>, value: &Value) -> Value {
    let mapping = property.and_then(|p| ctx.term(p)).and_then(|def| def.type_mapping.as_ref());
    match (mapping, value) {
        (Some(TypeMapping::Id), Value::String(iri)) => json!({ "@id": ctx.expand_iri(iri, false) }),
        (Some(TypeMapping::Vocab), Value::String(iri)) => json!({ "@id": ctx.expand_iri(iri, true) }),
        (Some(TypeMapping::Datatype(datatype)), _) => json!({ "@value": value, "@type": datatype }),
        _ => json!({ "@value": value }),
    }
}

fn is_free_floating(property: Option<&str>) -> bool {
    property.is_none_or(|p| p == GRAPH)
}

pub(crate) fn into_array(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        other => vec![other],
    }
}

fn document_error(message: String) -> JsonLdError {
    JsonLdError::InvalidDocument { message: message.into(), context: None }
}
