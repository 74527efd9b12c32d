use std::borrow::Cow;
use std::path::PathBuf;

/// Error types of the shapes build steps.
#[rescs_derive::rescs_error]
pub enum ShapesError {
    #[error("File error{}: {source}", format_context(.context))]
    File { source: rescs_kernel::files::FileError, context: Option<Cow<'static, str>> },

    #[error("JSON-LD error{}: {source}", format_context(.context))]
    JsonLd { source: rescs_jsonld::JsonLdError, context: Option<Cow<'static, str>> },

    #[error("Directory walk failed{}: {source}", format_context(.context))]
    Walk { source: walkdir::Error, context: Option<Cow<'static, str>> },

    /// The in-memory triple store could not be created or loaded.
    #[error("Triple store error{}: {source}", format_context(.context))]
    Storage { source: oxigraph::store::StorageError, context: Option<Cow<'static, str>> },

    #[error("SPARQL evaluation failed{}: {source}", format_context(.context))]
    Query { source: oxigraph::sparql::EvaluationError, context: Option<Cow<'static, str>> },

    #[error("No shapes found in {}{}", .path.display(), format_context(.context))]
    MissingShapes { path: PathBuf, context: Option<Cow<'static, str>> },

    /// A property shape declares neither a datatype, a class nor a node kind.
    #[error("Unknown range{} for {property}", format_context(.context))]
    UnknownRange { property: String, context: Option<Cow<'static, str>> },

    /// A shape that does not target `schema:Thing` lacks its `sh:and` conjunction.
    #[error("Shape {shape} has no sh:and conjunction{}", format_context(.context))]
    MissingConjunction { shape: String, context: Option<Cow<'static, str>> },

    #[error("{node} lacks {property}{}", format_context(.context))]
    MissingProperty { node: String, property: &'static str, context: Option<Cow<'static, str>> },

    #[error("Internal shapes error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
