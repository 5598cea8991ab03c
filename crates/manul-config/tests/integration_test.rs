//! Loading configuration files from disk

use manul_common::test_utils::init_test_logging;
use manul_config::{ConfigError, ConfigLoader, SiteConfig};
use manul_i18n::{Locale, MessageKey, ResourceSource};
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, yaml: &str) -> std::path::PathBuf {
    let path = dir.path().join("site.yaml");
    fs::write(&path, yaml).unwrap();
    path
}

#[test]
fn test_load_config_file() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "i18n:\n  locales: [en, zh]\n  default_locale: en\npublic:\n  manul_app_id: site\n",
    );

    let config = ConfigLoader::load_config(&path).unwrap();
    assert_eq!(config.i18n.default_locale, Locale::English);
    assert_eq!(config.public.manul_app_id.as_deref(), Some("site"));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = ConfigLoader::load_config(dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_invalid_file_is_rejected() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "i18n:\n  locales: [zh]\n  default_locale: en\n");

    let err = ConfigLoader::load_from_file(&path).unwrap_err();
    assert!(err.is_user_error());
}

#[test]
fn test_config_builds_catalog_and_router() {
    init_test_logging();
    let config = SiteConfig::default();
    let catalog = config.build_catalog().unwrap();
    let router = config.router();

    let locale = router.locale_from_path("/zh/blog");
    assert_eq!(locale, Locale::Chinese);
    assert_eq!(catalog.translate(locale, MessageKey::MenuBlog), "博客");
    assert_eq!(router.localized_path(Locale::English, "/blog"), "/blog");
}

#[test]
fn test_locales_dir_selects_directory_source() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("en")).unwrap();
    fs::write(
        dir.path().join("en/main.ftl"),
        manul_i18n::resource::embedded_source(Locale::English),
    )
    .unwrap();

    let yaml = format!(
        "i18n:\n  locales: [en]\nlocales_dir: {}\n",
        dir.path().display()
    );
    let path = write_config(&dir, &yaml);
    let config = ConfigLoader::load_config(&path).unwrap();

    assert_eq!(
        config.resource_source(),
        ResourceSource::Directory(dir.path().to_path_buf())
    );
    let catalog = config.build_catalog().unwrap();
    assert_eq!(catalog.locales(), &[Locale::English]);
    assert_eq!(
        catalog.translate(Locale::Chinese, MessageKey::ThemeLight),
        "Light"
    );
}

#[test]
fn test_missing_locales_dir_fails_catalog() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let config = SiteConfig {
        locales_dir: Some(dir.path().join("missing")),
        ..SiteConfig::default()
    };

    assert!(config.build_catalog().is_err());
}

#[test]
fn test_relative_locales_dir_follows_config_file() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let site_dir = dir.path().join("other");
    fs::create_dir_all(site_dir.join("locales/en")).unwrap();
    fs::write(
        site_dir.join("locales/en/main.ftl"),
        manul_i18n::resource::embedded_source(Locale::English),
    )
    .unwrap();
    let path = site_dir.join("site.yaml");
    fs::write(&path, "i18n:\n  locales: [en]\nlocales_dir: locales\n").unwrap();

    let config = ConfigLoader::load_config(&path).unwrap();
    assert_eq!(config.locales_dir, Some(site_dir.join("locales")));

    let catalog = config.build_catalog().unwrap();
    assert_eq!(catalog.translate(Locale::English, MessageKey::HttpSend), "Send");
}

#[test]
fn test_absolute_locales_dir_is_kept() {
    let dir = TempDir::new().unwrap();
    let absolute = dir.path().join("elsewhere");
    let path = write_config(
        &dir,
        &format!("i18n:\n  locales: [en]\nlocales_dir: {}\n", absolute.display()),
    );

    let config = ConfigLoader::load_config(&path).unwrap();
    assert_eq!(config.locales_dir, Some(absolute));
}
