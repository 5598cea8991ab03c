//! Semantic checks that serde cannot express.

use crate::loader::ConfigError;
use crate::schema::SiteConfig;
use std::collections::HashSet;
use tracing::warn;
use url::Url;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first problem found.
    pub fn validate(config: &SiteConfig) -> Result<(), ConfigError> {
        let i18n = &config.i18n;

        if i18n.locales.is_empty() {
            return Err(ConfigError::validation(
                "i18n.locales",
                "at least one locale is required",
            ));
        }

        let mut seen = HashSet::new();
        for locale in &i18n.locales {
            if !seen.insert(locale) {
                return Err(ConfigError::validation(
                    "i18n.locales",
                    format!("locale '{locale}' is listed more than once"),
                ));
            }
        }

        if !i18n.locales.contains(&i18n.default_locale) {
            return Err(ConfigError::validation(
                "i18n.default_locale",
                format!(
                    "default locale '{}' is not one of the configured locales",
                    i18n.default_locale
                ),
            ));
        }

        if let Some(host) = &config.public.manul_host {
            let url = Url::parse(host).map_err(|e| {
                ConfigError::validation("public.manul_host", format!("'{host}' is not a URL: {e}"))
            })?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ConfigError::validation(
                    "public.manul_host",
                    format!("unsupported scheme '{}'", url.scheme()),
                ));
            }
        }

        if config.logging.level.trim().is_empty() {
            return Err(ConfigError::validation(
                "logging.level",
                "log level must not be empty",
            ));
        }

        if let Some(dir) = &config.locales_dir {
            if !dir.is_dir() {
                warn!(
                    "Locales directory {} does not exist; catalog creation will fail",
                    dir.display()
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use manul_i18n::Locale;

    fn field_of(err: ConfigError) -> String {
        match err {
            ConfigError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&SiteConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_locales() {
        let mut config = SiteConfig::default();
        config.i18n.locales.clear();
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(field_of(err), "i18n.locales");
    }

    #[test]
    fn test_duplicate_locales() {
        let mut config = SiteConfig::default();
        config.i18n.locales.push(Locale::Chinese);
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_default_locale_must_be_listed() {
        let mut config = SiteConfig::default();
        config.i18n.locales = vec![Locale::English];
        config.i18n.default_locale = Locale::Chinese;
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(field_of(err), "i18n.default_locale");
    }

    #[test]
    fn test_manul_host() {
        let mut config = SiteConfig::default();

        config.public.manul_host = Some("https://manul.example.com".to_string());
        assert!(ConfigValidator::validate(&config).is_ok());

        config.public.manul_host = Some("not a url".to_string());
        assert_eq!(
            field_of(ConfigValidator::validate(&config).unwrap_err()),
            "public.manul_host"
        );

        config.public.manul_host = Some("ftp://manul.example.com".to_string());
        assert!(ConfigValidator::validate(&config)
            .unwrap_err()
            .to_string()
            .contains("ftp"));
    }

    #[test]
    fn test_blank_log_level() {
        let mut config = SiteConfig::default();
        config.logging.level = " ".to_string();
        assert_eq!(
            field_of(ConfigValidator::validate(&config).unwrap_err()),
            "logging.level"
        );
    }
}
