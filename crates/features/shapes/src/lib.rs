//! # Shapes
//!
//! Build steps over the SHACL shapes library:
//!
//! 1. [`harvest`] collects every `shapes/**/schema.json`, writes the shapes
//!    graph and merges it with the ontology and the derived property
//!    definitions ([`properties`]).
//! 2. [`transform`] removes the `sh:and` conjunctions, hoisting local
//!    property shapes onto each node shape.
//! 3. [`inheritance`] queries the properties every shape inherits from the
//!    shapes of its superclasses and closes the shapes with them.
//!
//! Graphs are handled in expanded JSON-LD form and written compacted with
//! [`output_context`].

mod error;
pub mod harvest;
pub mod inheritance;
pub mod properties;
pub mod shape;
pub mod transform;

pub use crate::error::{Result, ShapesError, ShapesErrorExt};
pub use crate::shape::NodeShape;

use rescs_domain::context::PREFIXES;
use rescs_jsonld::Context;
use serde_json::Value;

/// Ordered expanded node objects.
pub type ShapesGraph = Vec<Value>;

/// Prefix context of every written graph.
#[must_use]
pub fn output_context() -> Context {
    Context::from_prefixes(PREFIXES)
}
