//! # Manul Config
//!
//! Site configuration for the Manul website tooling.
//!
//! This crate provides configuration loading from YAML, environment
//! variable overrides, validation, and the glue that turns a
//! configuration into a message catalog and a router.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{ConfigError, ConfigLoader};
pub use schema::*;
pub use validator::ConfigValidator;
