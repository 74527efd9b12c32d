use rescs_logger::Logger;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn json_file_is_named_after_the_logger() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("shapes-build")
        .console(false)
        .filter("info")
        .file(&log_dir, true)
        .init()?;

    tracing::info!(shapes = 3, "harvested shapes");
    tracing::debug!("below the filter");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let content = fs::read_to_string(log_dir.join("shapes-build.log"))?;
    let line = content.lines().next().ok_or("log file is empty")?;
    let event: serde_json::Value = serde_json::from_str(line)?;

    assert_eq!(event["level"], "INFO");
    assert_eq!(event["fields"]["message"], "harvested shapes");
    assert_eq!(event["fields"]["shapes"], 3);
    assert!(!content.contains("below the filter"));

    Ok(())
}
