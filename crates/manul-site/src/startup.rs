//! Configuration discovery for the binary
//!
//! Loading happens before the subscriber exists, so the chosen source is
//! returned to the caller to log once logging is up.

use manul_common::Result;
use manul_config::{ConfigLoader, SiteConfig};
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A YAML file
    File(PathBuf),
    /// No file was found
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "configuration file {}", path.display()),
            Self::Defaults => f.write_str("built-in defaults (no configuration file found)"),
        }
    }
}

/// Load `explicit` if given, otherwise whatever [`ConfigLoader::locate`] finds
pub fn load_site_config(explicit: Option<&Path>) -> Result<(SiteConfig, ConfigSource)> {
    match explicit.map(Path::to_path_buf).or_else(ConfigLoader::locate) {
        Some(path) => {
            let config = ConfigLoader::load_from_file(&path)?;
            Ok((config, ConfigSource::File(path)))
        }
        None => Ok((ConfigLoader::load_defaults()?, ConfigSource::Defaults)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.yaml");
        fs::write(&path, "public:\n  manul_app_id: demo\n").unwrap();

        let (config, source) = load_site_config(Some(&path)).unwrap();
        assert_eq!(config.public.manul_app_id.as_deref(), Some("demo"));
        assert_eq!(source, ConfigSource::File(path.clone()));
        assert_eq!(
            source.to_string(),
            format!("configuration file {}", path.display())
        );
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(load_site_config(Some(&dir.path().join("missing.yaml"))).is_err());
    }

    #[test]
    fn test_defaults_display() {
        assert_eq!(
            ConfigSource::Defaults.to_string(),
            "built-in defaults (no configuration file found)"
        );
    }
}
