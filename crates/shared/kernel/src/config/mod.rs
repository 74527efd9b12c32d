use config::{Config, Environment, File};
use rescs_domain::config::NexusSettings;
use rescs_domain::constants::CONFIG_FILE;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Custom error type for config loading.
#[rescs_derive::rescs_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Dotenv error{}: {source}", format_context(.context))]
    Dotenv { source: dotenvy::Error, context: Option<Cow<'static, str>> },
}

/// Loads `.env` from the working directory (or one of its parents) into the
/// process environment. A missing file is not an error.
///
/// # Errors
/// Returns [`ConfigError::Dotenv`] when the file exists but cannot be parsed.
pub fn load_dotenv() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!("Loaded environment from {}", path.display());
            Ok(())
        },
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err::<(), _>(err).context("Failed to read .env"),
    }
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: `path` when given (must exist), otherwise `rescs.toml` in the
///    working directory if present.
/// 2. **Environment Overrides**: unprefixed environment variables, lowercased
///    (`VERIFY_SSL` maps to `verify_ssl`).
///
/// # Errors
/// This function will return an error if:
/// * An explicit configuration file cannot be found or parsed.
/// * The merged values do not match the structure of type `T`.
///
/// # Example
/// ```rust,no_run
/// use rescs_kernel::config::load_config;
///
/// #[derive(serde::Deserialize)]
/// struct Settings {
///     org: String,
/// }
///
/// let cfg: Settings = load_config(None::<&str>).unwrap();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T>
where
    T: DeserializeOwned,
{
    let file = match &path {
        Some(p) => {
            info!("Loading config from {}", p.as_ref().display());
            File::from(p.as_ref()).required(true)
        },
        None => File::from(Path::new(CONFIG_FILE)).required(false),
    };

    let config = Config::builder()
        .add_source(file)
        .add_source(Environment::default())
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Loads `.env` and then the [`NexusSettings`] from the layered sources.
///
/// # Errors
/// Fails when a value is missing or `VERIFY_SSL` is not an integer.
pub fn load_nexus_settings(path: Option<impl AsRef<Path>>) -> Result<NexusSettings> {
    load_dotenv()?;
    let settings: NexusSettings = load_config(path).context("Nexus settings")?;
    debug!(?settings, "Nexus settings loaded");
    Ok(settings)
}
