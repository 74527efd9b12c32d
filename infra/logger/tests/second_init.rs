use rescs_logger::{LevelFilter, Logger, LoggerError};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn second_init_fails_and_keeps_the_first_subscriber() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;

    let logger = Logger::builder()
        .name("first")
        .console(false)
        .filter("debug")
        .file(tmp_dir.path(), false)
        .init()?;

    let err = Logger::builder()
        .name("second")
        .level(LevelFilter::ERROR)
        .file(tmp_dir.path(), false)
        .init()
        .unwrap_err();
    assert!(matches!(err, LoggerError::Subscriber { .. }), "{err}");

    tracing::debug!("still routed to the first logger");
    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let content = fs::read_to_string(tmp_dir.path().join("first.log"))?;
    assert!(content.contains("DEBUG"));
    assert!(content.contains("still routed to the first logger"));
    assert!(!content.trim_start().starts_with('{'), "plain text expected");
    Ok(())
}
