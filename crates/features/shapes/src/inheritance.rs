//! Properties inherited through `rdfs:subClassOf` and shape closure.

use crate::error::{Result, ShapesErrorExt};
use crate::shape::NodeShape;
use crate::{ShapesGraph, output_context};
use oxigraph::model::Term;
use oxigraph::sparql::QueryResults;
use oxigraph::store::Store;
use rescs_domain::vocab::{rdf, rescs, sh};
use rescs_jsonld::{compact, expand, to_quads};
use rescs_kernel::Workspace;
use rescs_kernel::files::{read_json, write_json};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// For each node shape, the property paths declared by the shapes of its
/// transitive superclasses.
pub const INHERITED_PROPERTIES_QUERY: &str = r"
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
PREFIX sh: <http://www.w3.org/ns/shacl#>

SELECT ?shape ?superClassShape ?superClassShapePropPath WHERE {
    ?shape a sh:NodeShape ;
        sh:targetClass ?targetClass .

    OPTIONAL {
        ?targetClass rdfs:subClassOf+ ?superClass .
        ?superClassShape sh:targetClass ?superClass .
        ?superClassShape sh:property ?superClassShapeProp .
        ?superClassShapeProp sh:path ?superClassShapePropPath .
    }
} ORDER BY ?shape ?superClassShape ?superClassShapePropPath
";

/// One row of [`INHERITED_PROPERTIES_QUERY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InheritedProperty {
    pub shape: String,
    pub super_class_shape: Option<String>,
    pub path: Option<String>,
}

/// Inherited paths grouped by shape IRI, in row order without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InheritedProperties {
    by_shape: BTreeMap<String, Vec<String>>,
}

impl InheritedProperties {
    #[must_use]
    pub fn from_rows(rows: impl IntoIterator<Item = InheritedProperty>) -> Self {
        let mut by_shape: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for row in rows {
            let paths = by_shape.entry(row.shape).or_default();
            if let Some(path) = row.path
                && !paths.contains(&path)
            {
                paths.push(path);
            }
        }
        Self { by_shape }
    }

    /// Inherited paths of `shape`; empty for unknown shapes.
    #[must_use]
    pub fn get(&self, shape: &str) -> &[String] {
        self.by_shape.get(shape).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn shapes(&self) -> impl Iterator<Item = &str> {
        self.by_shape.keys().map(String::as_str)
    }
}

/// Runs [`INHERITED_PROPERTIES_QUERY`] over both graphs loaded into one
/// in-memory store.
///
/// # Errors
/// Any RDF conversion, storage or evaluation error.
pub fn query_inherited_properties(ontology: &[Value], transformed: &[Value]) -> Result<Vec<InheritedProperty>> {
    let store = Store::new().context("Creating the in-memory store")?;
    store.extend(to_quads(ontology)?).context("Loading the ontology")?;
    store.extend(to_quads(transformed)?).context("Loading the transformed shapes graph")?;

    let QueryResults::Solutions(solutions) =
        store.query(INHERITED_PROPERTIES_QUERY).context("Querying inherited properties")?
    else {
        return Err("Inherited properties query did not return solutions".into());
    };

    let mut rows = Vec::new();
    for solution in solutions {
        let solution = solution.context("Reading a solution")?;
        let Some(shape) = solution.get("shape").and_then(iri) else { continue };
        rows.push(InheritedProperty {
            shape,
            super_class_shape: solution.get("superClassShape").and_then(iri),
            path: solution.get("superClassShapePropPath").and_then(iri),
        });
    }
    debug!(count = rows.len(), "Inherited property rows");
    Ok(rows)
}

/// # Errors
/// See [`query_inherited_properties`].
pub fn determine_inherited_properties(ontology: &[Value], transformed: &[Value]) -> Result<InheritedProperties> {
    query_inherited_properties(ontology, transformed).map(InheritedProperties::from_rows)
}

/// Closes every node shape of `transformed`.
///
/// Each shape gets `sh:closed true` and an `sh:ignoredProperties` list: the
/// Thing shape only `rdf:type`, every other shape its inherited paths
/// followed by `rdf:type`.
#[must_use]
pub fn close_shapes(transformed: &[Value], inherited: &InheritedProperties) -> ShapesGraph {
    transformed
        .iter()
        .map(|node| {
            let Some(shape) = NodeShape::from_node(node) else {
                return node.clone();
            };
            let id = shape.id().unwrap_or_default();
            let mut ignored: Vec<Value> = if id == rescs::THING_SHAPE {
                Vec::new()
            } else {
                inherited.get(id).iter().map(|path| json!({ "@id": path })).collect()
            };
            ignored.push(json!({ "@id": rdf::TYPE }));

            let mut closed = node.clone();
            if let Value::Object(map) = &mut closed {
                map.insert(sh::CLOSED.to_owned(), json!([{ "@value": true }]));
                map.insert(sh::IGNORED_PROPERTIES.to_owned(), json!([{ "@list": ignored }]));
            }
            closed
        })
        .collect()
}

/// Reads the ontology and `shapes_graph_transformed.json`, writes the closed
/// shapes to `output` or `shapes_graph_closed.json`.
///
/// # Errors
/// Any read, query or write error.
pub fn close(workspace: &Workspace, output: Option<&Path>) -> Result<PathBuf> {
    let ontology = load(&workspace.ontology_file())?;
    let transformed = load(&workspace.shapes_graph_transformed_file())?;

    let inherited = determine_inherited_properties(&ontology, &transformed)?;
    let closed = close_shapes(&transformed, &inherited);

    let target = output.map_or_else(|| workspace.shapes_graph_closed_file(), Path::to_path_buf);
    write_json(&target, &compact(&closed, &output_context()))?;
    info!("Closed {} shapes into {}", inherited.shapes().count(), target.display());
    Ok(target)
}

fn load(path: &Path) -> Result<ShapesGraph> {
    let document: Value = read_json(path)?;
    expand(&document).context(format!("Expanding {}", path.display()))
}

fn iri(term: &Term) -> Option<String> {
    match term {
        Term::NamedNode(node) => Some(node.as_str().to_owned()),
        _ => None,
    }
}
