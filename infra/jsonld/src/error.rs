use oxigraph::model::{IriParseError, LanguageTagParseError};
use std::borrow::Cow;

#[rescs_derive::rescs_error]
pub enum JsonLdError {
    #[error("Remote context '{url}' is not supported{}", format_context(.context))]
    RemoteContext { url: String, context: Option<Cow<'static, str>> },

    #[error("Invalid context{}: {message}", format_context(.context))]
    InvalidContext { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Cyclic IRI mapping for term '{term}'{}", format_context(.context))]
    CyclicIriMapping { term: String, context: Option<Cow<'static, str>> },

    #[error("Invalid JSON-LD document{}: {message}", format_context(.context))]
    InvalidDocument { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid IRI{}: {source}", format_context(.context))]
    Iri { source: IriParseError, context: Option<Cow<'static, str>> },

    #[error("Invalid language tag{}: {source}", format_context(.context))]
    LanguageTag { source: LanguageTagParseError, context: Option<Cow<'static, str>> },
}
