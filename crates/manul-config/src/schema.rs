//! Configuration schema definitions using serde.

use manul_common::{LoggingConfig, SiteError};
use manul_i18n::{Catalog, Locale, ResourceSource, Router, RoutingStrategy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for the site tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Localization configuration.
    pub i18n: I18nConfig,
    /// Values exposed to the client as `PUBLIC_*` variables.
    pub public: PublicConfig,
    /// Logging configuration.
    pub logging: LoggingSettings,
    /// Directory overriding the compiled-in Fluent tables.
    pub locales_dir: Option<PathBuf>,
}

/// Localization configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Locales the site is published in.
    pub locales: Vec<Locale>,
    /// Locale used as fallback and as the unprefixed route.
    pub default_locale: Locale,
    /// URL prefix rules.
    pub routing: RoutingStrategy,
}

/// Public client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicConfig {
    /// Base URL of the hosted Manul runtime the examples talk to.
    pub manul_host: Option<String>,
    /// Application id used by the interactive examples.
    pub manul_app_id: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `manul_i18n=debug`.
    pub level: String,
    /// Emit JSON lines instead of text.
    pub json: bool,
    /// Append logs to this file instead of stderr.
    pub file: Option<String>,
}

impl SiteConfig {
    /// Where the catalog reads its tables from.
    pub fn resource_source(&self) -> ResourceSource {
        self.locales_dir
            .clone()
            .map_or(ResourceSource::Embedded, ResourceSource::Directory)
    }

    /// Build the message catalog this configuration describes.
    pub fn build_catalog(&self) -> Result<Catalog, SiteError> {
        Catalog::new(
            self.i18n.default_locale,
            &self.i18n.locales,
            self.resource_source(),
        )
        .map_err(Into::into)
    }

    /// Router for the configured locales.
    pub fn router(&self) -> Router {
        Router::new(
            self.i18n.default_locale,
            &self.i18n.locales,
            self.i18n.routing,
        )
    }

    /// Logging setup derived from the logging section.
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.logging.level.clone(),
            json_format: self.logging.json,
            file_path: self.logging.file.clone(),
            ..LoggingConfig::default()
        }
    }
}
