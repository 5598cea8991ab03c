//! # Manul Site
//!
//! Command line front end for the Manul website's localization layer.
//!
//! The binary loads the site configuration, builds the message catalog
//! once, and answers translation and routing queries against it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod commands;
pub mod startup;

pub use cli::{Cli, Commands};
pub use commands::{CheckReport, KeyEntry, LocaleCoverage, Site};
pub use startup::{load_site_config, ConfigSource};
