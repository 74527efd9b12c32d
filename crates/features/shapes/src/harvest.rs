//! Collecting the shapes of every schema file and merging them with the ontology.

use crate::error::{Result, ShapesError, ShapesErrorExt};
use crate::properties::generate_property_defs_from_shapes;
use crate::{ShapesGraph, output_context};
use rescs_domain::constants::SCHEMA_FILE;
use rescs_domain::vocab::nxv;
use rescs_jsonld::{compact, expand};
use rescs_kernel::Workspace;
use rescs_kernel::files::{read_json, write_json};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Counts reported by [`generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateSummary {
    pub schema_files: usize,
    pub shapes: usize,
    pub ontology_nodes: usize,
    pub properties: usize,
}

/// Every file named `schema.json` below `shapes_dir`, sorted by path.
///
/// # Errors
/// [`ShapesError::Walk`] when a directory cannot be read.
pub fn discover_schema_files(shapes_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(shapes_dir).sort_by_file_name() {
        let entry = entry.context(format!("Walking {}", shapes_dir.display()))?;
        if entry.file_type().is_file() && entry.file_name() == SCHEMA_FILE {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Shapes declared under `nxv:shapes` in the schema file at `path`.
///
/// # Errors
/// [`ShapesError::MissingShapes`] when no node carries `nxv:shapes`, or any
/// read or expansion error.
pub fn load_shapes(path: &Path) -> Result<ShapesGraph> {
    let document: Value = read_json(path)?;
    let nodes = expand(&document).context(format!("Expanding {}", path.display()))?;

    let mut found = false;
    let mut shapes = Vec::new();
    for node in &nodes {
        if let Some(values) = node.get(nxv::SHAPES).and_then(Value::as_array) {
            found = true;
            shapes.extend(values.iter().cloned());
        }
    }
    if !found {
        return Err(ShapesError::MissingShapes { path: path.to_path_buf(), context: None });
    }
    debug!(path = %path.display(), count = shapes.len(), "Loaded shapes");
    Ok(shapes)
}

/// Shapes of every schema file below `shapes_dir`, in file order.
///
/// # Errors
/// See [`discover_schema_files`] and [`load_shapes`].
pub fn build_shapes_graph(shapes_dir: &Path) -> Result<ShapesGraph> {
    load_all(&discover_schema_files(shapes_dir)?)
}

fn load_all(files: &[PathBuf]) -> Result<ShapesGraph> {
    let mut graph = Vec::new();
    for file in files {
        graph.extend(load_shapes(file)?);
    }
    Ok(graph)
}

/// Nodes of the ontology document.
///
/// # Errors
/// Any read or expansion error.
pub fn load_ontology(path: &Path) -> Result<ShapesGraph> {
    let document: Value = read_json(path)?;
    expand(&document).context(format!("Expanding {}", path.display()))
}

/// Writes `shapes_graph.json` and `shapes_ontology_graph.json`.
///
/// The second graph is the shapes, then the ontology nodes, then the
/// property definitions derived from the shapes.
///
/// # Errors
/// Any error of the harvesting, derivation or writing steps.
pub fn generate(workspace: &Workspace) -> Result<GenerateSummary> {
    let context = output_context();

    let files = discover_schema_files(&workspace.shapes_dir())?;
    let schema_files = files.len();
    let mut graph = load_all(&files)?;
    let shapes = graph.len();
    info!("Harvested {shapes} shapes from {schema_files} schema files");
    write_json(&workspace.shapes_graph_file(), &compact(&graph, &context))?;

    let ontology = load_ontology(&workspace.ontology_file())?;
    let ontology_nodes = ontology.len();
    graph.extend(ontology);

    let defs = generate_property_defs_from_shapes(&graph)?;
    let properties = defs.len();
    graph.extend(defs);
    info!("Merged {ontology_nodes} ontology nodes and {properties} property definitions");
    write_json(&workspace.shapes_ontology_graph_file(), &compact(&graph, &context))?;

    Ok(GenerateSummary { schema_files, shapes, ontology_nodes, properties })
}
