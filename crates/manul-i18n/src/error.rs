//! Error types for internationalization operations

use manul_common::SiteError;
use thiserror::Error;

/// Errors that can occur during internationalization operations
#[derive(Error, Debug)]
pub enum I18nError {
    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// The locale code is not one the site supports
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// The string is not a known message key
    #[error("Unknown message key: {0}")]
    UnknownKey(String),

    /// Failed to load a resource file
    #[error("Failed to load resource file {path}: {reason}")]
    ResourceLoadError {
        /// Path that was read
        path: String,
        /// Why loading failed
        reason: String,
    },

    /// Failed to parse a Fluent resource
    #[error("Failed to parse Fluent resource for {locale}: {errors:?}")]
    FluentParseError {
        /// Locale whose resource failed to parse
        locale: String,
        /// Parser diagnostics
        errors: Vec<String>,
    },

    /// Message not found in the requested locale nor in the default locale
    #[error("Message not found: {key} (locale {locale})")]
    MessageNotFound {
        /// Dotted message key
        key: String,
        /// Locale that was requested
        locale: String,
    },

    /// Failed to format a message
    #[error("Failed to format message '{key}': {errors:?}")]
    MessageFormatError {
        /// Dotted message key
        key: String,
        /// Formatter diagnostics
        errors: Vec<String>,
    },

    /// Adding a resource to a bundle failed
    #[error("Failed to create bundle for locale {locale}: {errors:?}")]
    BundleCreationError {
        /// Locale of the bundle
        locale: String,
        /// Bundle diagnostics
        errors: Vec<String>,
    },

    /// Locale tables are inconsistent with the default locale
    #[error("Catalog validation failed: {}", problems.join("; "))]
    CatalogValidation {
        /// One line per inconsistency
        problems: Vec<String>,
    },
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;

impl From<I18nError> for SiteError {
    fn from(err: I18nError) -> Self {
        let locale = match &err {
            I18nError::FluentParseError { locale, .. }
            | I18nError::MessageNotFound { locale, .. }
            | I18nError::BundleCreationError { locale, .. } => Some(locale.clone()),
            I18nError::UnsupportedLocale(code) => Some(code.clone()),
            _ => None,
        };
        Self::localization_with_source(err.to_string(), locale, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_lists_problems() {
        let err = I18nError::CatalogValidation {
            problems: vec!["en: missing 'hero.title'".into(), "zh: unknown 'foo'".into()],
        };
        assert_eq!(
            err.to_string(),
            "Catalog validation failed: en: missing 'hero.title'; zh: unknown 'foo'"
        );
    }

    #[test]
    fn test_conversion_to_site_error_keeps_locale() {
        let err = I18nError::MessageNotFound {
            key: "hero.title".into(),
            locale: "zh".into(),
        };
        match SiteError::from(err) {
            SiteError::Localization { locale, message, .. } => {
                assert_eq!(locale.as_deref(), Some("zh"));
                assert!(message.contains("hero.title"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
