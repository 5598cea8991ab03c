//! Error types and utilities shared across the workspace

use thiserror::Error;

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Main error type for site operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internationalization and localization errors
    #[error("Localization error: {message}")]
    Localization {
        /// Human readable description
        message: String,
        /// Locale the error relates to
        locale: Option<String>,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for user input or data
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable description
        message: String,
        /// Offending field, if known
        field: Option<String>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Logging setup errors
    #[error("Logging error: {0}")]
    Logging(String),
}

impl SiteError {
    /// Create a configuration error without an underlying cause
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a configuration error wrapping a cause
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a localization error
    pub fn localization(msg: impl Into<String>, locale: Option<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            locale,
            source: None,
        }
    }

    /// Create a localization error wrapping a cause
    pub fn localization_with_source(
        msg: impl Into<String>,
        locale: Option<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Localization {
            message: msg.into(),
            locale,
            source: Some(Box::new(source)),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>, field: Option<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field,
        }
    }

    /// Whether the error stems from bad configuration or bad input
    /// rather than from the environment.
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::Config { .. } | Self::Validation { .. })
    }
}
