use rescs_domain::constants::{
    COMPOSITE_VIEWS_DIR, ONTOLOGY_DIR, ONTOLOGY_FILE, SHAPES_DIR, SHAPES_GRAPH_CLOSED_FILE,
    SHAPES_GRAPH_FILE, SHAPES_GRAPH_TRANSFORMED_FILE, SHAPES_ONTOLOGY_GRAPH_FILE,
};
use std::path::{Path, PathBuf};

/// Repository layout the build steps read from and write to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn shapes_dir(&self) -> PathBuf {
        self.root.join(SHAPES_DIR)
    }

    #[must_use]
    pub fn ontology_dir(&self) -> PathBuf {
        self.root.join(ONTOLOGY_DIR)
    }

    #[must_use]
    pub fn composite_views_dir(&self) -> PathBuf {
        self.root.join(COMPOSITE_VIEWS_DIR)
    }

    /// Hand-maintained class definitions.
    #[must_use]
    pub fn ontology_file(&self) -> PathBuf {
        self.ontology_dir().join(ONTOLOGY_FILE)
    }

    #[must_use]
    pub fn shapes_graph_file(&self) -> PathBuf {
        self.ontology_dir().join(SHAPES_GRAPH_FILE)
    }

    #[must_use]
    pub fn shapes_ontology_graph_file(&self) -> PathBuf {
        self.ontology_dir().join(SHAPES_ONTOLOGY_GRAPH_FILE)
    }

    #[must_use]
    pub fn shapes_graph_transformed_file(&self) -> PathBuf {
        self.ontology_dir().join(SHAPES_GRAPH_TRANSFORMED_FILE)
    }

    #[must_use]
    pub fn shapes_graph_closed_file(&self) -> PathBuf {
        self.ontology_dir().join(SHAPES_GRAPH_CLOSED_FILE)
    }
}
