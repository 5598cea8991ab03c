//! Configuration loading utilities

use crate::{ConfigValidator, SiteConfig};
use manul_common::{Result as SiteResult, SiteError};
use manul_i18n::Locale;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_VAR: &str = "MANUL_SITE_CONFIG";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Variable name
        var: String,
        /// Underlying parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration validation error
    #[error("Invalid configuration for '{field}': {message}")]
    Validation {
        /// Offending field, dotted
        field: String,
        /// What is wrong with it
        message: String,
    },
}

impl ConfigError {
    /// Create a validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<ConfigError> for SiteError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, message } => Self::validation(message, Some(field)),
            other => Self::config_with_source(other.to_string(), other),
        }
    }
}

/// Configuration loader for the site tooling
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    ///
    /// A relative `locales_dir` is taken relative to the file's directory.
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SiteConfig, ConfigError> {
        let path = path.as_ref();
        debug!("Reading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml_str(&content)?;

        if let Some(base) = path.parent() {
            config.locales_dir = config
                .locales_dir
                .take()
                .map(|dir| if dir.is_relative() { base.join(dir) } else { dir });
        }

        Self::apply_env_overrides(&mut config)?;
        ConfigValidator::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from the first file found, falling back to defaults
    ///
    /// Looks at `MANUL_SITE_CONFIG`, then `site.yaml`, then `site.yml`.
    pub fn load() -> SiteResult<SiteConfig> {
        match Self::locate() {
            Some(path) => Self::load_from_file(path),
            None => Self::load_defaults(),
        }
    }

    /// Configuration file `load` would read, if any
    pub fn locate() -> Option<PathBuf> {
        Self::locate_in(Path::new(""), |var| env::var(var).ok())
    }

    /// Search `base` for a configuration file, preferring the path named by
    /// `MANUL_SITE_CONFIG` in `lookup`
    pub fn locate_in<F>(base: &Path, lookup: F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(CONFIG_PATH_VAR) {
            return Some(PathBuf::from(path));
        }

        ["site.yaml", "site.yml"]
            .iter()
            .map(|name| base.join(name))
            .find(|candidate| candidate.exists())
    }

    /// Default configuration with environment overrides applied
    pub fn load_defaults() -> SiteResult<SiteConfig> {
        let mut config = SiteConfig::default();
        Self::apply_env_overrides(&mut config)?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SiteResult<SiteConfig> {
        Ok(Self::load_config(path)?)
    }

    /// Parse configuration text without overrides or validation
    pub fn from_yaml_str(content: &str) -> Result<SiteConfig, ConfigError> {
        if content.trim().is_empty() {
            return Ok(SiteConfig::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(config: &mut SiteConfig) -> Result<(), ConfigError> {
        Self::apply_overrides(config, |var| env::var(var).ok())
    }

    /// Apply overrides read through `lookup`
    pub fn apply_overrides<F>(config: &mut SiteConfig, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("PUBLIC_MANUL_HOST") {
            config.public.manul_host = Some(host);
        }

        if let Some(app_id) = lookup("PUBLIC_MANUL_APP_ID") {
            config.public.manul_app_id = Some(app_id);
        }

        if let Some(locale) = lookup("MANUL_DEFAULT_LOCALE") {
            config.i18n.default_locale =
                locale
                    .trim()
                    .parse::<Locale>()
                    .map_err(|e| ConfigError::EnvParse {
                        var: "MANUL_DEFAULT_LOCALE".to_string(),
                        source: Box::new(e),
                    })?;
        }

        if let Some(prefix) = lookup("MANUL_PREFIX_DEFAULT_LOCALE") {
            config.i18n.routing.prefix_default_locale =
                prefix
                    .trim()
                    .parse()
                    .map_err(|e| ConfigError::EnvParse {
                        var: "MANUL_PREFIX_DEFAULT_LOCALE".to_string(),
                        source: Box::new(e),
                    })?;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}
