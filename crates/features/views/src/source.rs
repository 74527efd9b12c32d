//! Composite view documents and the files they reference.

use crate::error::{Result, ViewsError};
use rescs_domain::constants::{COMPOSITE_VIEW_FILE, ES_PROJECTION_TYPE, ES_QUERY_FILE, ES_SETTINGS_FILE};
use rescs_kernel::files::{read_json, read_text};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where a composite view is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Layout {
    /// `compositeviews/<name>/composite_view.json` with referenced fragments.
    Directory(PathBuf),
    /// `compositeviews/<name>.json`, used as is.
    Flat(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeViewSource {
    name: String,
    views_dir: PathBuf,
}

impl CompositeViewSource {
    #[must_use]
    pub fn new(views_dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self { name: name.into(), views_dir: views_dir.into() }
    }

    fn layout(&self) -> Result<Layout> {
        let dir = self.views_dir.join(&self.name);
        if dir.is_dir() {
            return Ok(Layout::Directory(dir));
        }
        let flat = self.views_dir.join(format!("{}.json", self.name));
        if flat.is_file() {
            return Ok(Layout::Flat(flat));
        }
        Err(ViewsError::NotFound { name: self.name.clone(), dir: self.views_dir.clone(), context: None })
    }

    /// Loads the view with every reference resolved.
    ///
    /// String entries of `projections` are replaced by the JSON file of that
    /// name. Every `ElasticSearchProjection` then receives the SPARQL query
    /// as `query` and the index settings as `settings`.
    ///
    /// # Errors
    /// [`ViewsError::NotFound`], [`ViewsError::InvalidView`] or any read error.
    pub fn assemble(&self) -> Result<Value> {
        match self.layout()? {
            Layout::Flat(path) => {
                debug!(path = %path.display(), "Using flat composite view");
                Ok(read_json(&path)?)
            },
            Layout::Directory(dir) => assemble_directory(&dir),
        }
    }
}

fn assemble_directory(dir: &Path) -> Result<Value> {
    let mut view: Value = read_json(&dir.join(COMPOSITE_VIEW_FILE))?;

    let Some(projections) = view.get_mut("projections").and_then(Value::as_array_mut) else {
        return Err(ViewsError::InvalidView {
            message: "projections must be an array".into(),
            context: Some(dir.display().to_string().into()),
        });
    };

    for projection in projections.iter_mut() {
        if let Some(file) = projection.as_str() {
            debug!(file, "Resolving projection");
            *projection = read_json(&dir.join(file))?;
        }
    }

    if !projections.iter().any(is_es_projection) {
        return Ok(view);
    }

    let query = read_text(&dir.join(ES_QUERY_FILE))?;
    let settings: Value = read_json(&dir.join(ES_SETTINGS_FILE))?;
    for projection in projections.iter_mut().filter(|p| is_es_projection(p)) {
        if let Value::Object(map) = projection {
            map.insert("query".to_owned(), Value::String(query.clone()));
            map.insert("settings".to_owned(), settings.clone());
        }
    }
    Ok(view)
}

/// `@type` is `ElasticSearchProjection`, alone or among other types.
fn is_es_projection(projection: &Value) -> bool {
    match projection.get("@type") {
        Some(Value::String(ty)) => ty == ES_PROJECTION_TYPE,
        Some(Value::Array(types)) => types.iter().any(|ty| ty.as_str() == Some(ES_PROJECTION_TYPE)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn recognises_es_projections() {
        assert!(is_es_projection(&json!({ "@type": "ElasticSearchProjection" })));
        assert!(is_es_projection(&json!({ "@type": ["ElasticSearchProjection"] })));
        assert!(!is_es_projection(&json!({ "@type": "SparqlProjection" })));
        assert!(!is_es_projection(&json!({ "@id": "projection" })));
    }
}
