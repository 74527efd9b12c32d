use anyhow::{Context, Result};
use rescs_kernel::Workspace;
use rescs_shapes::{harvest, inheritance, transform as transformation};
use std::path::Path;

/// Harvests the shapes and writes the shapes and shapes-ontology graphs.
///
/// # Errors
/// Returns an error if a schema file, the ontology or a property shape is invalid.
pub fn generate(workspace: &Workspace) -> Result<()> {
    let summary = harvest::generate(workspace).context("Generating the shapes graphs")?;
    println!(
        "✅ {} shapes from {} schema files, {} ontology nodes, {} property definitions",
        summary.shapes, summary.schema_files, summary.ontology_nodes, summary.properties
    );
    println!("   {}", workspace.shapes_graph_file().display());
    println!("   {}", workspace.shapes_ontology_graph_file().display());
    Ok(())
}

/// Writes the shapes graph without `sh:and`.
///
/// # Errors
/// Returns an error if the shapes graph cannot be read or written.
pub fn transform(workspace: &Workspace) -> Result<()> {
    let path = transformation::transform(workspace).context("Transforming the shapes graph")?;
    println!("✅ Transformed shapes graph: {}", path.display());
    Ok(())
}

/// Writes the closed shapes graph.
///
/// # Errors
/// Returns an error if the graphs cannot be read, queried or written.
pub fn close(workspace: &Workspace, output: Option<&Path>) -> Result<()> {
    let path = inheritance::close(workspace, output).context("Closing the shapes")?;
    println!("✅ Closed shapes graph: {}", path.display());
    Ok(())
}

/// [`generate`], then [`transform`].
///
/// # Errors
/// See both steps.
pub fn build(workspace: &Workspace) -> Result<()> {
    generate(workspace)?;
    transform(workspace)
}
