//! Accessors over expanded node objects.

use crate::keyword::{ID, LIST, TYPE};
use serde_json::Value;

/// Values of `property`; empty when absent.
#[must_use]
pub fn values<'a>(node: &'a Value, property: &str) -> &'a [Value] {
    node.get(property).and_then(Value::as_array).map(Vec::as_slice).unwrap_or_default()
}

/// `@id` of the node.
#[must_use]
pub fn id(node: &Value) -> Option<&str> {
    node.get(ID).and_then(Value::as_str)
}

/// `@id` of the first node reference held by `property`.
#[must_use]
pub fn first_id<'a>(node: &'a Value, property: &str) -> Option<&'a str> {
    values(node, property).iter().find_map(id)
}

#[must_use]
pub fn has_type(node: &Value, class: &str) -> bool {
    values(node, TYPE).iter().any(|ty| ty.as_str() == Some(class))
}

/// Members of the first `@list` held by `property`.
#[must_use]
pub fn list<'a>(node: &'a Value, property: &str) -> Option<&'a [Value]> {
    values(node, property)
        .iter()
        .find_map(|value| value.get(LIST).and_then(Value::as_array))
        .map(Vec::as_slice)
}
