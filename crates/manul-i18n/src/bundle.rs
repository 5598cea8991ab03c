//! FluentBundle management and message formatting

use crate::error::{I18nError, I18nResult};
use crate::{Locale, MessageKey};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::FluentResource;
use std::collections::HashMap;
use tracing::{debug, error, warn};

/// Manages one FluentBundle per locale
///
/// Bundles use the concurrent memoizer, so a populated manager is
/// `Send + Sync` and needs no locking for reads.
pub struct BundleManager {
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
}

impl std::fmt::Debug for BundleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BundleManager")
            .field("locales", &self.available_locales())
            .finish()
    }
}

impl BundleManager {
    /// Create a new `BundleManager`
    pub fn new() -> Self {
        Self {
            bundles: HashMap::new(),
        }
    }

    /// Add a resource to a locale's bundle
    pub fn add_resource(&mut self, locale: Locale, resource: FluentResource) -> I18nResult<()> {
        let lang_id = locale.to_language_identifier()?;

        let bundle = self.bundles.entry(locale).or_insert_with(|| {
            let mut bundle = FluentBundle::new_concurrent(vec![lang_id]);
            // Site strings are inserted into HTML; no bidi isolation marks.
            bundle.set_use_isolating(false);
            bundle
        });

        bundle.add_resource(resource).map_err(|errors| {
            let error_messages: Vec<String> = errors.into_iter().map(|e| format!("{e:?}")).collect();

            error!("Failed to add resource to bundle: {:?}", error_messages);

            I18nError::BundleCreationError {
                locale: locale.to_string(),
                errors: error_messages,
            }
        })?;

        debug!("Added resource to bundle for locale: {}", locale);
        Ok(())
    }

    /// Format a message from a single locale's bundle
    pub fn format_message(&self, locale: Locale, key: MessageKey) -> I18nResult<String> {
        let not_found = || I18nError::MessageNotFound {
            key: key.as_str().to_string(),
            locale: locale.to_string(),
        };

        let bundle = self.bundles.get(&locale).ok_or_else(not_found)?;
        let message = bundle.get_message(key.fluent_id()).ok_or_else(not_found)?;
        let pattern = message.value().ok_or_else(not_found)?;

        let mut errors = Vec::new();
        let formatted = bundle.format_pattern(pattern, None, &mut errors);

        if !errors.is_empty() {
            let error_messages: Vec<String> = errors.into_iter().map(|e| format!("{e:?}")).collect();

            warn!(
                "Formatting errors for message '{}': {:?}",
                key, error_messages
            );

            return Err(I18nError::MessageFormatError {
                key: key.as_str().to_string(),
                errors: error_messages,
            });
        }

        Ok(formatted.into_owned())
    }

    /// Check if a message exists in the locale's bundle
    pub fn has_message(&self, locale: Locale, key: MessageKey) -> bool {
        self.bundles
            .get(&locale)
            .is_some_and(|bundle| bundle.has_message(key.fluent_id()))
    }

    /// Get all locales that have a bundle, sorted
    pub fn available_locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self.bundles.keys().copied().collect();
        locales.sort();
        locales
    }

    /// Whether a bundle exists for the locale
    pub fn contains(&self, locale: Locale) -> bool {
        self.bundles.contains_key(&locale)
    }
}

impl Default for BundleManager {
    fn default() -> Self {
        Self::new()
    }
}
