//! The message catalog and translation resolver

use crate::bundle::BundleManager;
use crate::error::{I18nError, I18nResult};
use crate::resource::{ResourceManager, ResourceSource};
use crate::routing::resolve_locale_in;
use crate::validation::CatalogReport;
use crate::{Locale, MessageKey};
use tracing::{debug, error, info, warn};

/// Immutable mapping from locale to message table, with a default locale
/// used as fallback
///
/// Built once at startup and shared by reference or `Arc`. Construction
/// validates every table, so afterwards every [`MessageKey`] resolves for
/// every locale.
#[derive(Debug)]
pub struct Catalog {
    default_locale: Locale,
    locales: Vec<Locale>,
    bundles: BundleManager,
    report: CatalogReport,
}

impl Catalog {
    /// Load the given locales from `source` and validate them
    ///
    /// The default locale is loaded even when absent from `locales`.
    pub fn new(default_locale: Locale, locales: &[Locale], source: ResourceSource) -> I18nResult<Self> {
        let mut wanted = vec![default_locale];
        for locale in locales {
            if !wanted.contains(locale) {
                wanted.push(*locale);
            }
        }

        let resource_manager = ResourceManager::new(source);
        let mut resources = Vec::with_capacity(wanted.len());
        for locale in &wanted {
            debug!("Loading locale: {}", locale);
            resources.push((*locale, resource_manager.load_resource(*locale)?));
        }

        let report = CatalogReport::check(
            default_locale,
            resources.iter().map(|(locale, resource)| (*locale, resource)),
        )
        .into_result()?;

        for locale in report.incomplete_locales() {
            warn!(
                "Locale {} is missing {} message(s), falling back to {}",
                locale,
                report.missing_in(locale).len(),
                default_locale
            );
        }

        let mut bundles = BundleManager::new();
        for (locale, resource) in resources {
            bundles.add_resource(locale, resource)?;
        }

        wanted.sort();
        let catalog = Self {
            default_locale,
            locales: wanted,
            bundles,
            report,
        };
        catalog.check_default_renders()?;

        info!(
            "Catalog initialized with default locale {} and locales {:?}",
            default_locale, catalog.locales
        );

        Ok(catalog)
    }

    /// Every default-table message must format to a non-empty string
    fn check_default_renders(&self) -> I18nResult<()> {
        let problems: Vec<String> = MessageKey::ALL
            .iter()
            .filter(|key| self.lookup(self.default_locale, **key).is_none())
            .map(|key| {
                format!(
                    "{}: '{}' formats to an empty string or has errors",
                    self.default_locale, key
                )
            })
            .collect();

        if problems.is_empty() {
            Ok(())
        } else {
            Err(I18nError::CatalogValidation { problems })
        }
    }

    /// Catalog of all supported locales from the compiled-in tables,
    /// defaulting to English
    pub fn embedded() -> I18nResult<Self> {
        Self::new(Locale::default(), &Locale::all(), ResourceSource::Embedded)
    }

    /// Value of `key` in exactly one locale's table
    ///
    /// Empty values count as absent.
    pub fn lookup(&self, locale: Locale, key: MessageKey) -> Option<String> {
        if !self.bundles.has_message(locale, key) {
            return None;
        }

        match self.bundles.format_message(locale, key) {
            Ok(value) if !value.is_empty() => Some(value),
            Ok(_) => None,
            Err(e) => {
                warn!("Could not format '{}' for {}: {}", key, locale, e);
                None
            }
        }
    }

    /// Resolve `key` through the chain requested locale -> default locale
    pub fn resolve(&self, locale: Locale, key: MessageKey) -> I18nResult<String> {
        if let Some(value) = self.lookup(locale, key) {
            return Ok(value);
        }

        if locale != self.default_locale {
            if let Some(value) = self.lookup(self.default_locale, key) {
                debug!(
                    "Message '{}' not found in locale {}, falling back to default locale {}",
                    key, locale, self.default_locale
                );
                return Ok(value);
            }
        }

        Err(I18nError::MessageNotFound {
            key: key.as_str().to_string(),
            locale: locale.to_string(),
        })
    }

    /// Localized string for `key`, falling back to the default locale
    ///
    /// Never fails: if neither table yields a value, the dotted key itself
    /// is returned and the failure logged.
    pub fn translate(&self, locale: Locale, key: MessageKey) -> String {
        self.resolve(locale, key).unwrap_or_else(|e| {
            error!("Translation failed, rendering key instead: {}", e);
            key.as_str().to_string()
        })
    }

    /// Resolve a dotted key given as a string
    pub fn translate_str(&self, locale: Locale, key: &str) -> I18nResult<String> {
        let key: MessageKey = key.parse()?;
        self.resolve(locale, key)
    }

    /// View of the catalog bound to one locale
    pub const fn translator(&self, locale: Locale) -> Translator<'_> {
        Translator {
            catalog: self,
            locale,
        }
    }

    /// Locale selected by a URL path, restricted to the loaded locales
    pub fn locale_from_path(&self, path: &str) -> Locale {
        resolve_locale_in(path, &self.locales, self.default_locale)
    }

    /// Translator for the locale a URL path selects
    pub fn translator_for_path(&self, path: &str) -> Translator<'_> {
        self.translator(self.locale_from_path(path))
    }

    /// Whether the locale's own table defines `key`
    pub fn is_translated(&self, locale: Locale, key: MessageKey) -> bool {
        self.bundles.has_message(locale, key)
    }

    /// Keys the locale takes from the default locale
    pub fn missing_keys(&self, locale: Locale) -> &[MessageKey] {
        self.report.missing_in(locale)
    }

    /// Validation report produced at construction
    pub const fn report(&self) -> &CatalogReport {
        &self.report
    }

    /// Get the default locale
    pub const fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Loaded locales, sorted
    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    /// Whether a table is loaded for the locale
    pub fn has_locale(&self, locale: Locale) -> bool {
        self.bundles.contains(locale)
    }
}

/// A [`Catalog`] bound to one locale
#[derive(Debug, Clone, Copy)]
pub struct Translator<'c> {
    catalog: &'c Catalog,
    locale: Locale,
}

impl Translator<'_> {
    /// Localized string for `key`
    pub fn t(&self, key: MessageKey) -> String {
        self.catalog.translate(self.locale, key)
    }

    /// Localized string for a dotted key given as a string
    pub fn t_str(&self, key: &str) -> I18nResult<String> {
        self.catalog.translate_str(self.locale, key)
    }

    /// Locale this translator is bound to
    pub const fn locale(&self) -> Locale {
        self.locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn catalog() -> Catalog {
        Catalog::embedded().expect("embedded catalog must be valid")
    }

    #[test]
    fn test_translate_each_locale() {
        let catalog = catalog();
        assert_eq!(
            catalog.translate(Locale::English, MessageKey::HeroTitle),
            "The Language of Persistent Objects"
        );
        assert_eq!(
            catalog.translate(Locale::Chinese, MessageKey::HeroTitle),
            "持久化对象语言"
        );
        assert_eq!(catalog.translate(Locale::Chinese, MessageKey::Manul), "Manul");
    }

    #[test]
    fn test_every_key_is_non_empty_in_every_locale() {
        let catalog = catalog();
        for locale in Locale::all() {
            for key in MessageKey::ALL {
                let value = catalog.translate(locale, *key);
                assert!(!value.is_empty(), "{key} is empty for {locale}");
                assert_ne!(value, key.as_str(), "{key} rendered as key for {locale}");
            }
        }
    }

    #[test]
    fn test_translate_str() {
        let catalog = catalog();
        assert_eq!(
            catalog.translate_str(Locale::Chinese, "menu.install").unwrap(),
            "安装"
        );
        assert!(matches!(
            catalog.translate_str(Locale::Chinese, "menu.missing"),
            Err(I18nError::UnknownKey(key)) if key == "menu.missing"
        ));
    }

    #[test]
    fn test_lookup_has_no_fallback() {
        let catalog = Catalog::new(Locale::English, &[], ResourceSource::Embedded).unwrap();
        assert_eq!(catalog.lookup(Locale::Chinese, MessageKey::HttpSend), None);
        assert_eq!(
            catalog.resolve(Locale::Chinese, MessageKey::HttpSend).unwrap(),
            "Send"
        );
    }

    #[test]
    fn test_translator_and_path_resolution() {
        let catalog = catalog();
        let t = catalog.translator_for_path("/zh/docs");
        assert_eq!(t.locale(), Locale::Chinese);
        assert_eq!(t.t(MessageKey::MenuDoc), "文档");

        let t = catalog.translator_for_path("/docs");
        assert_eq!(t.locale(), Locale::English);
        assert_eq!(t.t_str("menu.doc").unwrap(), "Documentaion");
    }

    #[test]
    fn test_path_resolution_only_sees_loaded_locales() {
        let catalog = Catalog::new(Locale::English, &[], ResourceSource::Embedded).unwrap();
        assert_eq!(catalog.locales(), &[Locale::English]);
        assert!(!catalog.has_locale(Locale::Chinese));
        assert_eq!(catalog.locale_from_path("/zh/docs"), Locale::English);
    }

    #[test]
    fn test_chinese_default_locale() {
        let catalog = Catalog::new(Locale::Chinese, &Locale::all(), ResourceSource::Embedded).unwrap();
        assert_eq!(catalog.default_locale(), Locale::Chinese);
        assert_eq!(catalog.locale_from_path("/"), Locale::Chinese);
        assert_eq!(catalog.locale_from_path("/en/"), Locale::English);
    }

    #[test]
    fn test_translate_renders_key_when_nothing_resolves() {
        let catalog = Catalog {
            default_locale: Locale::English,
            locales: vec![Locale::English],
            bundles: BundleManager::new(),
            report: CatalogReport::check(
                Locale::English,
                std::iter::empty::<(Locale, &fluent_bundle::FluentResource)>(),
            ),
        };

        assert!(matches!(
            catalog.resolve(Locale::Chinese, MessageKey::HeroTitle),
            Err(I18nError::MessageNotFound { key, locale }) if key == "hero.title" && locale == "zh"
        ));
        assert_eq!(
            catalog.translate(Locale::Chinese, MessageKey::HeroTitle),
            "hero.title"
        );
        assert!(catalog.check_default_renders().is_err());
    }

    #[test]
    fn test_catalog_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }

    proptest! {
        #[test]
        fn prop_translate_is_idempotent(index in 0..MessageKey::ALL.len(), zh in any::<bool>()) {
            let catalog = catalog();
            let key = MessageKey::ALL[index];
            let locale = if zh { Locale::Chinese } else { Locale::English };
            prop_assert_eq!(catalog.translate(locale, key), catalog.translate(locale, key));
        }
    }
}
