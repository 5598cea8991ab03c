//! Consistency checks between locale tables
//!
//! The default locale must define every [`MessageKey`]. Other locales may
//! leave keys out (lookups fall back to the default) but must not define
//! keys the default locale does not know.

use crate::error::{I18nError, I18nResult};
use crate::resource::message_ids;
use crate::{Locale, MessageKey};
use fluent_bundle::FluentResource;
use std::collections::{BTreeMap, HashSet};

/// Result of checking a set of locale tables against the key vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogReport {
    default_locale: Locale,
    missing: BTreeMap<Locale, Vec<MessageKey>>,
    unknown: BTreeMap<Locale, Vec<String>>,
}

impl CatalogReport {
    /// Check each `(locale, table)` pair
    pub fn check<'r, I>(default_locale: Locale, tables: I) -> Self
    where
        I: IntoIterator<Item = (Locale, &'r FluentResource)>,
    {
        let mut missing = BTreeMap::new();
        let mut unknown = BTreeMap::new();

        for (locale, resource) in tables {
            let ids: HashSet<&str> = message_ids(resource).into_iter().collect();

            let locale_missing: Vec<MessageKey> = MessageKey::ALL
                .iter()
                .copied()
                .filter(|key| !ids.contains(key.fluent_id()))
                .collect();
            if !locale_missing.is_empty() {
                missing.insert(locale, locale_missing);
            }

            let mut locale_unknown: Vec<String> = ids
                .iter()
                .filter(|id| MessageKey::from_fluent_id(id).is_none())
                .map(|id| (*id).to_string())
                .collect();
            if !locale_unknown.is_empty() {
                locale_unknown.sort();
                unknown.insert(locale, locale_unknown);
            }
        }

        Self {
            default_locale,
            missing,
            unknown,
        }
    }

    /// Keys a locale does not define
    pub fn missing_in(&self, locale: Locale) -> &[MessageKey] {
        self.missing.get(&locale).map(Vec::as_slice).unwrap_or_default()
    }

    /// Message ids a locale defines outside the vocabulary
    pub fn unknown_in(&self, locale: Locale) -> &[String] {
        self.unknown.get(&locale).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of vocabulary keys the locale translates itself
    pub fn translated_count(&self, locale: Locale) -> usize {
        MessageKey::ALL.len() - self.missing_in(locale).len()
    }

    /// Inconsistencies that make the catalog unusable
    pub fn problems(&self) -> Vec<String> {
        let mut problems: Vec<String> = self
            .missing_in(self.default_locale)
            .iter()
            .map(|key| format!("{}: default locale is missing '{}'", self.default_locale, key))
            .collect();

        for (locale, ids) in &self.unknown {
            problems.extend(
                ids.iter()
                    .map(|id| format!("{locale}: unknown message id '{id}'")),
            );
        }

        problems
    }

    /// Whether the catalog can guarantee a value for every key
    pub fn is_valid(&self) -> bool {
        self.missing_in(self.default_locale).is_empty() && self.unknown.is_empty()
    }

    /// Fail fast on problems, otherwise hand back the report
    pub fn into_result(self) -> I18nResult<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(I18nError::CatalogValidation {
                problems: self.problems(),
            })
        }
    }

    /// Locales with at least one key falling back to the default
    pub fn incomplete_locales(&self) -> Vec<Locale> {
        self.missing
            .keys()
            .copied()
            .filter(|locale| *locale != self.default_locale)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{embedded_source, parse_resource};

    fn embedded(locale: Locale) -> FluentResource {
        parse_resource(locale, embedded_source(locale).to_string()).unwrap()
    }

    #[test]
    fn test_embedded_tables_are_complete() {
        let en = embedded(Locale::English);
        let zh = embedded(Locale::Chinese);
        let report = CatalogReport::check(
            Locale::English,
            [(Locale::English, &en), (Locale::Chinese, &zh)],
        );

        assert!(report.is_valid());
        assert!(report.problems().is_empty());
        assert!(report.incomplete_locales().is_empty());
        assert_eq!(report.translated_count(Locale::Chinese), MessageKey::ALL.len());
    }

    #[test]
    fn test_secondary_gaps_are_not_problems() {
        let en = embedded(Locale::English);
        let zh = parse_resource(Locale::Chinese, "hero-title = 持久化对象语言\n".to_string()).unwrap();
        let report = CatalogReport::check(
            Locale::English,
            [(Locale::English, &en), (Locale::Chinese, &zh)],
        );

        assert!(report.is_valid());
        assert_eq!(report.incomplete_locales(), vec![Locale::Chinese]);
        assert_eq!(report.translated_count(Locale::Chinese), 1);
        assert!(!report.missing_in(Locale::Chinese).contains(&MessageKey::HeroTitle));
        assert!(report.missing_in(Locale::Chinese).contains(&MessageKey::HttpSend));
    }

    #[test]
    fn test_default_gaps_fail_fast() {
        let en = parse_resource(Locale::English, "hero-title = Title\n".to_string()).unwrap();
        let report = CatalogReport::check(Locale::English, [(Locale::English, &en)]);

        assert!(!report.is_valid());
        let err = report.into_result().unwrap_err();
        match err {
            I18nError::CatalogValidation { problems } => {
                assert_eq!(problems.len(), MessageKey::ALL.len() - 1);
                assert!(problems.iter().any(|p| p.contains("'http.send'")));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_ids_fail_fast() {
        let en = embedded(Locale::English);
        let zh = parse_resource(Locale::Chinese, "footer-note = 脚注\n".to_string()).unwrap();
        let report = CatalogReport::check(
            Locale::English,
            [(Locale::English, &en), (Locale::Chinese, &zh)],
        );

        assert_eq!(report.unknown_in(Locale::Chinese), ["footer-note".to_string()]);
        assert_eq!(
            report.problems(),
            vec!["zh: unknown message id 'footer-note'".to_string()]
        );
    }
}
