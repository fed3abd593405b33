use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default config basename, resolved with any supported extension (`vls.toml`, ...).
pub const DEFAULT_CONFIG_NAME: &str = "vls";
/// Prefix of environment overrides, e.g. `VLS__OUTPUT__PATH`.
pub const ENV_PREFIX: &str = "VLS";
const ENV_SEPARATOR: &str = "__";

#[vls_derive::vls_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration: an optional file overlaid with `VLS__` environment variables.
///
/// * With an explicit `path`, the file must exist.
/// * Without one, `vls.*` in the working directory is used when present.
/// * Nested keys use double underscores: `VLS__LOGGING__LEVEL=debug` sets `logging.level`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source is malformed,
/// or the merged values do not deserialize into `T`.
///
/// # Example
/// ```rust,no_run
/// use vls_kernel::config::load_config;
/// use vls_kernel::domain::config::SiteConfig;
///
/// let cfg: SiteConfig = load_config(None::<&str>).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    ConfigLoader::new(path).load()
}

/// Builder behind [`load_config`]; lets callers replace the process environment.
#[derive(Debug)]
pub struct ConfigLoader {
    path: Option<PathBuf>,
    env: Option<config::Map<String, String>>,
}

impl ConfigLoader {
    pub fn new(path: Option<impl AsRef<Path>>) -> Self {
        Self { path: path.map(|p| p.as_ref().to_path_buf()), env: None }
    }

    /// Reads overrides from `vars` instead of the process environment.
    #[must_use]
    pub fn with_env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// # Errors
    /// See [`load_config`].
    pub fn load<T: DeserializeOwned>(self) -> Result<T, ConfigError> {
        let file = match &self.path {
            Some(path) => {
                info!("Loading config from {}", path.display());
                File::from(path.as_path()).required(true)
            },
            None => {
                debug!("No config path given, looking for optional '{DEFAULT_CONFIG_NAME}' file");
                File::with_name(DEFAULT_CONFIG_NAME).required(false)
            },
        };

        let env = Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR).source(self.env);

        let config = Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .context("Failed to build config")?
            .try_deserialize::<T>()
            .context("Failed to deserialize config")?;

        Ok(config)
    }
}
