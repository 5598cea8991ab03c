//! # Manul I18n
//!
//! Localization for the Manul website, built on the Fluent localization
//! system. It includes:
//!
//! - The supported locales and their URL codes
//! - A message key vocabulary generated from the default locale at build time
//! - Fluent resource loading, embedded or from a directory
//! - An immutable [`Catalog`] resolving keys with default-locale fallback
//! - Locale detection from URL paths and localized path construction
//!
//! # Example
//!
//! ```rust
//! use manul_i18n::{Catalog, MessageKey};
//!
//! # fn example() -> Result<(), manul_i18n::I18nError> {
//! let catalog = Catalog::embedded()?;
//! let t = catalog.translator_for_path("/zh/docs");
//!
//! assert_eq!(t.t(MessageKey::MenuInstall), "安装");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bundle;
pub mod catalog;
pub mod error;
pub mod keys;
pub mod locale;
pub mod resource;
pub mod routing;
pub mod validation;

pub use bundle::BundleManager;
pub use catalog::{Catalog, Translator};
pub use error::{I18nError, I18nResult};
pub use keys::MessageKey;
pub use locale::Locale;
pub use resource::{ResourceManager, ResourceSource};
pub use routing::{resolve_locale_from_path, Router, RoutingStrategy};
pub use validation::CatalogReport;
