//! Locale-aware URL routing
//!
//! The first path segment selects the locale (`/zh/docs`). Whether the
//! default locale also gets a prefix is a [`RoutingStrategy`] choice; the
//! site leaves it unprefixed (`/docs`).

use crate::Locale;
use serde::{Deserialize, Serialize};

/// How locales appear in URLs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoutingStrategy {
    /// Whether the default locale is prefixed like the others
    #[serde(default)]
    pub prefix_default_locale: bool,
}

/// Resolve the locale from a URL path against every supported locale,
/// defaulting to [`Locale::default`]
pub fn resolve_locale_from_path(path: &str) -> Locale {
    resolve_locale_in(path, &Locale::all(), Locale::default())
}

/// Resolve the locale from a URL path against a given locale set
///
/// Takes the segment after the first `/`. Total over all inputs: anything
/// that is not exactly a listed short code yields `default_locale`.
pub fn resolve_locale_in(path: &str, supported: &[Locale], default_locale: Locale) -> Locale {
    path.split('/')
        .nth(1)
        .and_then(Locale::from_path_segment)
        .filter(|locale| supported.contains(locale))
        .unwrap_or(default_locale)
}

/// Builds and parses localized paths for a fixed locale set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    default_locale: Locale,
    locales: Vec<Locale>,
    strategy: RoutingStrategy,
}

impl Router {
    /// Create a router; the default locale is always routable
    pub fn new(default_locale: Locale, locales: &[Locale], strategy: RoutingStrategy) -> Self {
        let mut all = locales.to_vec();
        if !all.contains(&default_locale) {
            all.push(default_locale);
        }
        all.sort();
        all.dedup();

        Self {
            default_locale,
            locales: all,
            strategy,
        }
    }

    /// Locale selected by the path
    pub fn locale_from_path(&self, path: &str) -> Locale {
        resolve_locale_in(path, &self.locales, self.default_locale)
    }

    /// Split a path into its locale and the locale-free remainder
    ///
    /// The remainder always starts with `/` for rooted input.
    pub fn strip_locale_prefix<'p>(&self, path: &'p str) -> (Locale, &'p str) {
        let locale = self.locale_from_path(path);
        let whole = if path.is_empty() { "/" } else { path };

        let Some(rest) = path
            .strip_prefix('/')
            .and_then(|p| p.strip_prefix(locale.short_code()))
        else {
            return (locale, whole);
        };

        match rest {
            "" => (locale, "/"),
            rest if rest.starts_with('/') => (locale, rest),
            _ => (locale, whole),
        }
    }

    /// Path of the same page in another locale
    ///
    /// Any existing locale prefix on `path` is replaced.
    pub fn localized_path(&self, locale: Locale, path: &str) -> String {
        let (_, rest) = self.strip_locale_prefix(path);
        let rest = if rest.starts_with('/') {
            rest.to_string()
        } else {
            format!("/{rest}")
        };

        if locale == self.default_locale && !self.strategy.prefix_default_locale {
            rest
        } else {
            format!("/{}{}", locale.short_code(), rest)
        }
    }

    /// One path per routable locale, for language switchers and `hreflang`
    pub fn alternate_paths(&self, path: &str) -> Vec<(Locale, String)> {
        self.locales
            .iter()
            .map(|locale| (*locale, self.localized_path(*locale, path)))
            .collect()
    }

    /// Get the default locale
    pub const fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Routable locales, sorted
    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    /// Get the routing strategy
    pub const fn strategy(&self) -> RoutingStrategy {
        self.strategy
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Locale::default(), &Locale::all(), RoutingStrategy::default())
    }
}
