//! Command line definition.

use clap::{Parser, Subcommand};
use manul_i18n::Locale;
use std::path::PathBuf;

/// Localization tooling for the Manul website
#[derive(Debug, Parser)]
#[command(name = "manul-site")]
#[command(version)]
#[command(about = "Resolve, inspect and validate the Manul website translations")]
#[command(long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to MANUL_SITE_CONFIG, site.yaml, site.yml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log at debug level regardless of configuration
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// What to do
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Translate a dotted key such as `hero.title`
    Translate {
        /// Message key
        #[arg(value_name = "KEY")]
        key: String,

        /// Locale to translate into
        #[arg(short, long, conflicts_with = "path")]
        locale: Option<Locale>,

        /// Page path whose locale to translate into
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Print the locale a page path selects
    Locale {
        /// Page path, e.g. `/zh/docs`
        #[arg(value_name = "PATH")]
        path: String,
    },

    /// Print the path of a page in the given locale
    Path {
        /// Target locale
        #[arg(value_name = "LOCALE")]
        locale: Locale,

        /// Page path in any locale
        #[arg(value_name = "PATH")]
        path: String,
    },

    /// Print every locale's version of a page path
    Alternates {
        /// Page path in any locale
        #[arg(value_name = "PATH")]
        path: String,
    },

    /// Validate the catalog and report translation coverage
    Check {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List every key with its value
    Keys {
        /// Locale whose values to show (defaults to the default locale)
        #[arg(short, long)]
        locale: Option<Locale>,

        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}
