use crate::models::args::Cli;
use anyhow::{Context, Result};
use rescs_kernel::Workspace;
use rescs_logger::{LevelFilter, Logger};
use std::path::{Path, PathBuf};

/// Returns the root directory of the project.
///
/// # Errors
/// Returns an error if the manifest directory does not have a parent.
pub fn get_project_root() -> Result<PathBuf> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .context("Could not find project root from xtask manifest")
}

/// `--root` when given, the workspace root otherwise.
///
/// # Errors
/// See [`get_project_root`].
pub fn resolve_workspace(root: Option<PathBuf>) -> Result<Workspace> {
    let root = match root {
        Some(root) => root,
        None => get_project_root()?,
    };
    Ok(Workspace::new(root))
}

/// Console logging at INFO, or DEBUG with `-v`, plus the optional log file.
///
/// # Errors
/// Returns an error if the filter is malformed, the subscriber cannot be installed
/// or the log file cannot be created.
pub fn init_logger(cli: &Cli) -> Result<Logger> {
    let level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let mut builder = Logger::builder().name("xtask").level(level);
    if let Some(directives) = &cli.log_filter {
        builder = builder.filter(directives.as_str());
    }
    if let Some(dir) = &cli.log_dir {
        builder = builder.file(dir, cli.log_json);
    }
    builder.init().context("Failed to initialize logging")
}
