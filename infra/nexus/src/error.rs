use std::borrow::Cow;

#[rescs_derive::rescs_error]
pub enum NexusError {
    #[error("HTTP error{}: {source}", format_context(.context))]
    Http { source: reqwest::Error, context: Option<Cow<'static, str>> },

    #[error("Nexus answered {status}{}: {body}", format_context(.context))]
    Status { status: u16, body: String, context: Option<Cow<'static, str>> },

    #[error("Invalid response{}: {source}", format_context(.context))]
    InvalidResponse { source: serde_json::Error, context: Option<Cow<'static, str>> },
}
