use serde::Serialize;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::debug;

#[rescs_derive::rescs_error]
pub enum FileError {
    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("JSON error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
}

/// Reads a whole file as UTF-8 text.
///
/// # Errors
/// Returns [`FileError::Io`] naming the path.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).context(format!("Reading {}", path.display()))
}

/// Reads and parses a JSON document.
///
/// # Errors
/// Returns [`FileError::Io`] or [`FileError::Json`] naming the path.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = read_text(path)?;
    serde_json::from_str(&text).context(format!("Parsing {}", path.display()))
}

/// Writes `value` as pretty-printed JSON, creating parent directories.
///
/// # Errors
/// Returns [`FileError::Io`] or [`FileError::Json`] naming the path.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context(format!("Creating {}", parent.display()))?;
    }
    let mut text =
        serde_json::to_string_pretty(value).context(format!("Serializing {}", path.display()))?;
    text.push('\n');
    fs::write(path, text).context(format!("Writing {}", path.display()))?;
    debug!("Wrote {}", path.display());
    Ok(())
}
