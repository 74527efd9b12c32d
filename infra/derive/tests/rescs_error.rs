use rescs_derive::rescs_error;
use std::borrow::Cow;

#[rescs_error]
pub enum DemoError {
    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Missing field{}: {field}", format_context(.context))]
    MissingField { field: &'static str, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read_missing() -> Result<String> {
    std::fs::read_to_string("/definitely/not/here.json").context("Reading shapes graph")
}

#[test]
fn rescs_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/rescs_error_pass.rs");
}

#[test]
fn source_errors_convert_with_context() {
    let err = read_missing().unwrap_err();
    assert!(matches!(err, DemoError::Io { context: Some(_), .. }));
    assert!(err.to_string().starts_with("I/O error (Reading shapes graph): "));
}

#[test]
fn question_mark_converts_without_context() {
    fn parse() -> Result<()> {
        Err::<(), _>(std::io::Error::other("boom"))?;
        Ok(())
    }

    let err = parse().unwrap_err();
    assert_eq!(err.to_string(), "I/O error: boom");
}

#[test]
fn context_is_attached_to_own_variants() {
    let res: Result<()> = Err(DemoError::MissingField { field: "sh:path", context: None });
    let err = res.context("Property of ThingShape").unwrap_err();
    assert_eq!(err.to_string(), "Missing field (Property of ThingShape): sh:path");
}

#[test]
fn strings_become_internal_errors() {
    let from_str: DemoError = "unexpected".into();
    let from_string: DemoError = String::from("also unexpected").into();

    assert!(matches!(from_str, DemoError::Internal { .. }));
    assert_eq!(from_string.to_string(), "Internal error: also unexpected");
}
