use rescs_derive::rescs_error;
use std::borrow::Cow;

#[rescs_error]
pub enum DemoError {
    #[error("JSON error{}: {source}", format_context(.context))]
    Json {
        #[source]
        source: std::fmt::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn render() -> Result<String> {
    Err(std::fmt::Error).context("Rendering")
}

fn main() {
    let _ = render();
}
