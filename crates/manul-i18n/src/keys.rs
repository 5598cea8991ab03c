//! Type-safe message keys generated via build script.
//!
//! The vocabulary is exactly the set of messages in the default locale's
//! Fluent file. Public names are dotted (`hero.title`); Fluent ids use
//! dashes (`hero-title`) because dots are not valid in Fluent identifiers.

use crate::error::I18nError;
use std::fmt;
use std::str::FromStr;

include!(concat!(env!("OUT_DIR"), "/message_keys.rs"));

impl MessageKey {
    /// Look up a key by its Fluent identifier
    pub fn from_fluent_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.fluent_id() == id)
    }

    /// Look up a key by its dotted name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKey {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| I18nError::UnknownKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_keys_parse() {
        assert_eq!("hero.title".parse::<MessageKey>().unwrap(), MessageKey::HeroTitle);
        assert_eq!("manul".parse::<MessageKey>().unwrap(), MessageKey::Manul);
        assert_eq!(
            "http.response.placeholder".parse::<MessageKey>().unwrap(),
            MessageKey::HttpResponsePlaceholder
        );
    }

    #[test]
    fn test_fluent_id_mapping() {
        assert_eq!(MessageKey::CopyToClipboard.fluent_id(), "copy-to-clipboard");
        assert_eq!(MessageKey::CopyToClipboard.as_str(), "copy.to.clipboard");
        assert_eq!(
            MessageKey::from_fluent_id("feature1-title"),
            Some(MessageKey::Feature1Title)
        );
        assert_eq!(MessageKey::from_fluent_id("feature1.title"), None);
    }

    #[test]
    fn test_unknown_key() {
        assert!(matches!(
            "hero-title".parse::<MessageKey>(),
            Err(I18nError::UnknownKey(_))
        ));
        assert!("".parse::<MessageKey>().is_err());
    }

    #[test]
    fn test_vocabulary_is_unique() {
        let names: HashSet<_> = MessageKey::ALL.iter().map(|k| k.as_str()).collect();
        let ids: HashSet<_> = MessageKey::ALL.iter().map(|k| k.fluent_id()).collect();
        assert_eq!(names.len(), MessageKey::ALL.len());
        assert_eq!(ids.len(), MessageKey::ALL.len());
        assert_eq!(MessageKey::ALL.len(), 30);
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for key in MessageKey::ALL {
            assert_eq!(key.to_string().parse::<MessageKey>().unwrap(), *key);
        }
    }
}
