use std::borrow::Cow;
use std::path::PathBuf;

/// Error types of composite view assembly and registration.
#[rescs_derive::rescs_error]
pub enum ViewsError {
    #[error("File error{}: {source}", format_context(.context))]
    File { source: rescs_kernel::files::FileError, context: Option<Cow<'static, str>> },

    #[error("Nexus error{}: {source}", format_context(.context))]
    Nexus { source: rescs_nexus::NexusError, context: Option<Cow<'static, str>> },

    /// Neither `compositeviews/<name>/` nor `compositeviews/<name>.json` exists.
    #[error("Composite view {name} not found under {}{}", .dir.display(), format_context(.context))]
    NotFound { name: String, dir: PathBuf, context: Option<Cow<'static, str>> },

    #[error("Invalid composite view{}: {message}", format_context(.context))]
    InvalidView { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The stored view carries no usable `_rev`.
    #[error("No _rev given in composite view {id}{}", format_context(.context))]
    MissingRevision { id: String, context: Option<Cow<'static, str>> },

    #[error("Internal views error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
