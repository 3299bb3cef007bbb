use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix for environment overrides (`SITELY__PLAN`, `SITELY__LOG__LEVEL`, ...).
pub const ENV_PREFIX: &str = "SITELY";

const DEFAULT_CONFIG: &str = "sitely";

/// Custom error type for config loading.
#[sitely_derive::sitely_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration object from a file layered with environment overrides.
///
/// 1. **Base File**: the file at `path`, or `sitely.{toml,json,yaml}` in the working
///    directory when no path is given. The format follows the file extension.
/// 2. **Environment Overrides**: variables prefixed with `SITELY__`. Nested keys use a
///    double underscore, so `SITELY__LOG__LEVEL` maps to `log.level`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file cannot be found or read, or if the
/// merged values do not deserialize into `T`.
///
/// # Example
/// ```rust,no_run
/// use sitely_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     plan: Option<String>,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
