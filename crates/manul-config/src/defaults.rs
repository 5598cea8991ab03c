//! Default values matching the published site.

use crate::schema::{I18nConfig, LoggingSettings, SiteConfig};
use manul_i18n::{Locale, RoutingStrategy};

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            i18n: I18nConfig::default(),
            public: crate::schema::PublicConfig::default(),
            logging: LoggingSettings::default(),
            locales_dir: None,
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locales: vec![Locale::English, Locale::Chinese],
            default_locale: Locale::English,
            routing: RoutingStrategy {
                prefix_default_locale: false,
            },
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}
