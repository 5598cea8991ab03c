//! Resource management for Fluent files

use crate::error::{I18nError, I18nResult};
use crate::Locale;
use fluent_bundle::FluentResource;
use fluent_syntax::ast;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Where locale tables are read from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResourceSource {
    /// Tables compiled into the binary
    #[default]
    Embedded,
    /// `<dir>/<code>/main.ftl` on disk
    Directory(PathBuf),
}

/// Manages loading of Fluent resources
#[derive(Debug, Clone, Default)]
pub struct ResourceManager {
    source: ResourceSource,
}

impl ResourceManager {
    /// Create a new `ResourceManager`
    pub const fn new(source: ResourceSource) -> Self {
        Self { source }
    }

    /// Create a manager reading from a directory
    pub fn from_dir<P: AsRef<Path>>(base_dir: P) -> Self {
        Self::new(ResourceSource::Directory(base_dir.as_ref().to_path_buf()))
    }

    /// Load and parse the resource for the given locale
    pub fn load_resource(&self, locale: Locale) -> I18nResult<FluentResource> {
        let content = match &self.source {
            ResourceSource::Embedded => embedded_source(locale).to_string(),
            ResourceSource::Directory(base_dir) => Self::read_from_dir(base_dir, locale)?,
        };

        parse_resource(locale, content)
    }

    fn read_from_dir(base_dir: &Path, locale: Locale) -> I18nResult<String> {
        let resource_path = base_dir.join(locale.resource_file());

        debug!("Loading resource file: {:?}", resource_path);

        fs::read_to_string(&resource_path).map_err(|e| I18nError::ResourceLoadError {
            path: resource_path.to_string_lossy().to_string(),
            reason: e.to_string(),
        })
    }

    /// Get the configured source
    pub const fn source(&self) -> &ResourceSource {
        &self.source
    }
}

/// Fluent source compiled into the crate for the given locale
pub const fn embedded_source(locale: Locale) -> &'static str {
    match locale {
        Locale::English => include_str!("../locales/en/main.ftl"),
        Locale::Chinese => include_str!("../locales/zh/main.ftl"),
    }
}

/// Parse Fluent source, rejecting resources with any syntax error
pub fn parse_resource(locale: Locale, content: String) -> I18nResult<FluentResource> {
    FluentResource::try_new(content).map_err(|(_, errors)| {
        let error_messages: Vec<String> = errors.into_iter().map(|e| format!("{e:?}")).collect();

        error!(
            "Failed to parse Fluent resource for {}: {:?}",
            locale, error_messages
        );

        I18nError::FluentParseError {
            locale: locale.to_string(),
            errors: error_messages,
        }
    })
}

/// Ids of the messages in a resource that carry a value
pub fn message_ids(resource: &FluentResource) -> Vec<&str> {
    resource
        .entries()
        .filter_map(|entry| match entry {
            ast::Entry::Message(message) if message.value.is_some() => Some(message.id.name),
            _ => None,
        })
        .collect()
}
