use crate::error::{Result, ShapesError};
use rescs_domain::vocab::{schema, sh};
use rescs_jsonld::node;
use serde_json::Value;

/// Borrowed view over an expanded node object typed `sh:NodeShape`.
#[derive(Debug, Clone, Copy)]
pub struct NodeShape<'a> {
    node: &'a Value,
}

impl<'a> NodeShape<'a> {
    /// `None` unless `node` is typed `sh:NodeShape`.
    #[must_use]
    pub fn from_node(node: &'a Value) -> Option<Self> {
        node::has_type(node, sh::NODE_SHAPE).then_some(Self { node })
    }

    #[must_use]
    pub fn id(&self) -> Option<&'a str> {
        node::id(self.node)
    }

    /// Identifier used in messages; blank shapes read as `_:`.
    #[must_use]
    pub fn label(&self) -> String {
        self.id().unwrap_or("_:").to_owned()
    }

    /// # Errors
    /// [`ShapesError::MissingProperty`] when the shape has no `sh:targetClass`.
    pub fn target_class(&self) -> Result<&'a str> {
        node::first_id(self.node, sh::TARGET_CLASS).ok_or_else(|| ShapesError::MissingProperty {
            node: self.label(),
            property: "sh:targetClass",
            context: None,
        })
    }

    /// Whether the shape is the root shape targeting `schema:Thing`.
    #[must_use]
    pub fn targets_thing(&self) -> bool {
        node::first_id(self.node, sh::TARGET_CLASS) == Some(schema::THING)
    }

    #[must_use]
    pub fn properties(&self) -> &'a [Value] {
        node::values(self.node, sh::PROPERTY)
    }

    /// Members of the `sh:and` list: the parent's shape first, then the local constraints.
    #[must_use]
    pub fn conjuncts(&self) -> Option<&'a [Value]> {
        node::list(self.node, sh::AND)
    }

    /// `sh:property` of the second conjunct, if both exist.
    #[must_use]
    pub fn local_properties(&self) -> Option<&'a [Value]> {
        let second = self.conjuncts()?.get(1)?;
        second.get(sh::PROPERTY).and_then(Value::as_array).map(Vec::as_slice)
    }
}
