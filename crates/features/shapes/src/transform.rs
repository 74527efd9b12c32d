//! Removal of `sh:and` conjunctions.

use crate::error::{Result, ShapesErrorExt};
use crate::shape::NodeShape;
use crate::{ShapesGraph, output_context};
use rescs_domain::vocab::sh;
use rescs_jsonld::{compact, expand};
use rescs_kernel::Workspace;
use rescs_kernel::files::{read_json, write_json};
use serde_json::Value;
use std::path::PathBuf;
use tracing::{info, trace};

/// Returns a copy of `graph` in which every node shape not targeting
/// `schema:Thing` has its `sh:and` removed.
///
/// When the conjunction has a second member carrying `sh:property`, those
/// property shapes become the shape's own `sh:property`. Other nodes are
/// copied unchanged.
#[must_use]
pub fn remove_and_conjunction_from_shapes(graph: &[Value]) -> ShapesGraph {
    graph.iter().map(remove_and_conjunction).collect()
}

fn remove_and_conjunction(node: &Value) -> Value {
    let Some(shape) = NodeShape::from_node(node) else {
        return node.clone();
    };
    if shape.targets_thing() {
        return node.clone();
    }

    let local = shape.local_properties().map(<[Value]>::to_vec);
    let mut transformed = node.clone();
    if let Value::Object(map) = &mut transformed {
        if let Some(props) = local {
            map.insert(sh::PROPERTY.to_owned(), Value::Array(props));
        }
        if map.shift_remove(sh::AND).is_some() {
            trace!(shape = %shape.label(), "Removed sh:and");
        }
    }
    transformed
}

/// Reads `shapes_graph.json` and writes `shapes_graph_transformed.json`.
///
/// # Errors
/// Any read, expansion or write error.
pub fn transform(workspace: &Workspace) -> Result<PathBuf> {
    let source = workspace.shapes_graph_file();
    let document: Value = read_json(&source)?;
    let graph = expand(&document).context(format!("Expanding {}", source.display()))?;

    let transformed = remove_and_conjunction_from_shapes(&graph);

    let target = workspace.shapes_graph_transformed_file();
    write_json(&target, &compact(&transformed, &output_context()))?;
    info!("Transformed {} nodes into {}", transformed.len(), target.display());
    Ok(target)
}
