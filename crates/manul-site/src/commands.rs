//! Subcommand implementations
//!
//! Every command renders its output to a `String` so the binary only has
//! to print it.

use crate::cli::Commands;
use manul_common::{Result, SiteError};
use manul_config::SiteConfig;
use manul_i18n::{Catalog, Locale, MessageKey, Router};
use serde::Serialize;
use std::fmt::Write as _;
use tracing::debug;

/// Catalog and router shared by every command
#[derive(Debug)]
pub struct Site {
    catalog: Catalog,
    router: Router,
}

/// Coverage of one locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleCoverage {
    /// Locale short code
    pub locale: String,
    /// Keys the locale's own table defines
    pub translated: usize,
    /// Keys in the catalog
    pub total: usize,
    /// Keys served from the default locale
    pub missing: Vec<String>,
}

/// Output of `check`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Default locale short code
    pub default_locale: String,
    /// Per-locale coverage, default locale first
    pub locales: Vec<LocaleCoverage>,
}

/// One row of `keys`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyEntry {
    /// Dotted key
    pub key: &'static str,
    /// Resolved value
    pub value: String,
    /// Whether the value came from the requested locale's own table
    pub translated: bool,
}

impl Site {
    /// Bundle a catalog with the router for the same locales
    pub const fn new(catalog: Catalog, router: Router) -> Self {
        Self { catalog, router }
    }

    /// Build the catalog and router a configuration describes
    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        Ok(Self::new(config.build_catalog()?, config.router()))
    }

    /// Catalog in use
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Router in use
    pub const fn router(&self) -> &Router {
        &self.router
    }

    /// Run a subcommand and return what it prints
    pub fn run(&self, command: &Commands) -> Result<String> {
        debug!("Running {:?}", command);
        match command {
            Commands::Translate { key, locale, path } => {
                self.translate(key, *locale, path.as_deref())
            }
            Commands::Locale { path } => Ok(self.router.locale_from_path(path).to_string()),
            Commands::Path { locale, path } => Ok(self.router.localized_path(*locale, path)),
            Commands::Alternates { path } => Ok(self.alternates(path)),
            Commands::Check { json } => {
                let report = self.check();
                if *json {
                    Ok(serde_json::to_string_pretty(&report)?)
                } else {
                    Ok(render_check(&report))
                }
            }
            Commands::Keys { locale, json } => {
                let entries = self.keys(locale.unwrap_or_else(|| self.catalog.default_locale()));
                if *json {
                    Ok(serde_json::to_string_pretty(&entries)?)
                } else {
                    Ok(entries
                        .iter()
                        .map(|entry| format!("{}\t{}", entry.key, entry.value))
                        .collect::<Vec<_>>()
                        .join("\n"))
                }
            }
        }
    }

    /// Translate a dotted key for an explicit locale, a page path, or the
    /// default locale
    pub fn translate(&self, key: &str, locale: Option<Locale>, path: Option<&str>) -> Result<String> {
        let locale = match (locale, path) {
            (Some(locale), _) => locale,
            (None, Some(path)) => self.router.locale_from_path(path),
            (None, None) => self.catalog.default_locale(),
        };

        self.catalog
            .translate_str(locale, key)
            .map_err(SiteError::from)
    }

    /// Every locale's version of a page, one `locale<TAB>path` per line
    pub fn alternates(&self, path: &str) -> String {
        self.router
            .alternate_paths(path)
            .into_iter()
            .map(|(locale, path)| format!("{locale}\t{path}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Translation coverage of every loaded locale
    pub fn check(&self) -> CheckReport {
        let total = MessageKey::ALL.len();
        let report = self.catalog.report();

        let locales = self
            .catalog
            .locales()
            .iter()
            .map(|locale| LocaleCoverage {
                locale: locale.to_string(),
                translated: report.translated_count(*locale),
                total,
                missing: report
                    .missing_in(*locale)
                    .iter()
                    .map(|key| key.as_str().to_string())
                    .collect(),
            })
            .collect();

        CheckReport {
            default_locale: self.catalog.default_locale().to_string(),
            locales,
        }
    }

    /// Every key resolved for `locale`
    pub fn keys(&self, locale: Locale) -> Vec<KeyEntry> {
        MessageKey::ALL
            .iter()
            .map(|key| KeyEntry {
                key: key.as_str(),
                value: self.catalog.translate(locale, *key),
                translated: self.catalog.is_translated(locale, *key),
            })
            .collect()
    }
}

fn render_check(report: &CheckReport) -> String {
    let mut out = format!("Default locale: {}\n", report.default_locale);
    for coverage in &report.locales {
        let _ = write!(
            out,
            "{}: {}/{} translated",
            coverage.locale, coverage.translated, coverage.total
        );
        if !coverage.missing.is_empty() {
            let _ = write!(out, " (falls back for: {})", coverage.missing.join(", "));
        }
        out.push('\n');
    }
    out.push_str("Catalog OK");
    out
}
