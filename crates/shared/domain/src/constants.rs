//! File and directory names of the repository layout the tools operate on.

pub const SHAPES_DIR: &str = "shapes";
pub const ONTOLOGY_DIR: &str = "ontology";
pub const COMPOSITE_VIEWS_DIR: &str = "compositeviews";

/// Per-type shape definition, searched for below [`SHAPES_DIR`].
pub const SCHEMA_FILE: &str = "schema.json";
pub const ONTOLOGY_FILE: &str = "ontology.json";

pub const SHAPES_GRAPH_FILE: &str = "shapes_graph.json";
pub const SHAPES_ONTOLOGY_GRAPH_FILE: &str = "shapes_ontology_graph.json";
pub const SHAPES_GRAPH_TRANSFORMED_FILE: &str = "shapes_graph_transformed.json";
pub const SHAPES_GRAPH_CLOSED_FILE: &str = "shapes_graph_closed.json";

pub const COMPOSITE_VIEW_FILE: &str = "composite_view.json";
pub const ES_QUERY_FILE: &str = "es_projection_query.rq";
pub const ES_SETTINGS_FILE: &str = "es_settings.json";

/// `@type` of projections that receive the query and index settings.
pub const ES_PROJECTION_TYPE: &str = "ElasticSearchProjection";

pub const DEFAULT_VIEW: &str = "compositeview01";

/// Optional settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "rescs.toml";
