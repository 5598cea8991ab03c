//! Locale management and utilities

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// Supported locales
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    /// English, the default locale
    #[serde(rename = "en", alias = "en-US")]
    English,
    /// Simplified Chinese
    #[serde(rename = "zh", alias = "zh-CN")]
    Chinese,
}

impl Default for Locale {
    fn default() -> Self {
        Self::English
    }
}

impl Locale {
    /// Get the full language tag for this locale
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en-US",
            Self::Chinese => "zh-CN",
        }
    }

    /// Get the short language code, as used in URL prefixes
    pub const fn short_code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Chinese => "zh",
        }
    }

    /// Parse a locale from a short code or full language tag
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" | "en-US" => Some(Self::English),
            "zh" | "zh-CN" | "zh-Hans" => Some(Self::Chinese),
            _ => None,
        }
    }

    /// Match a URL path segment, which must be exactly a short code
    pub fn from_path_segment(segment: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|locale| locale.short_code() == segment)
    }

    /// Convert to Fluent `LanguageIdentifier`
    pub fn to_language_identifier(self) -> I18nResult<LanguageIdentifier> {
        self.code()
            .parse()
            .map_err(|_| I18nError::InvalidLanguageId(self.code().to_string()))
    }

    /// Get all supported locales
    pub fn all() -> Vec<Self> {
        vec![Self::English, Self::Chinese]
    }

    /// Get the display name for this locale, in its own language
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Chinese => "简体中文",
        }
    }

    /// Get the resource file name for this locale
    pub fn resource_file(self) -> String {
        format!("{}/main.ftl", self.short_code())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| I18nError::UnsupportedLocale(s.to_string()))
    }
}
