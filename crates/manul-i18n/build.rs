//! Build script for manul-i18n crate
//!
//! This script validates all Fluent locale files at compile time and
//! generates the `MessageKey` enum from the default locale:
//! - All Fluent syntax is valid
//! - Every message has a value
//! - Secondary locales define no keys outside the default locale's set
//! - Keys missing from a secondary locale are reported as warnings

use std::collections::{BTreeMap, HashSet};
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use fluent_syntax::ast::Entry;
use fluent_syntax::parser::parse;

/// Directory name of the locale whose ids define the key vocabulary.
const DEFAULT_LOCALE: &str = "en";

/// Extract message ids, in file order, from a Fluent file
fn extract_message_ids(content: &str) -> Result<Vec<String>, String> {
    let resource = parse(content).map_err(|(_, errors)| format!("Parse errors: {errors:?}"))?;

    let mut ids = Vec::new();
    for entry in resource.body {
        if let Entry::Message(message) = entry {
            let id = message.id.name.to_string();
            if message.value.is_none() {
                return Err(format!("Message '{id}' has no value"));
            }
            ids.push(id);
        }
    }

    Ok(ids)
}

/// Validate a single locale file
fn validate_locale_file(path: &Path) -> Result<Vec<String>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    extract_message_ids(&content).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}

/// Find all locale files, keyed by locale directory name
fn find_locale_files(locales_dir: &Path) -> Result<BTreeMap<String, PathBuf>, String> {
    if !locales_dir.exists() {
        return Err(format!(
            "Locales directory not found: {}",
            locales_dir.display()
        ));
    }

    let mut locale_files = BTreeMap::new();

    for entry in fs::read_dir(locales_dir)
        .map_err(|e| format!("Failed to read locales directory: {e}"))?
    {
        let entry = entry.map_err(|e| format!("Failed to read directory entry: {e}"))?;
        let path = entry.path();

        if path.is_dir() {
            let locale_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| format!("Invalid locale directory name: {}", path.display()))?;

            let main_ftl = path.join("main.ftl");
            if main_ftl.exists() {
                locale_files.insert(locale_name.to_string(), main_ftl);
            }
        }
    }

    if locale_files.is_empty() {
        return Err("No locale files found".to_string());
    }

    Ok(locale_files)
}

/// `hero-title` -> `HeroTitle`
fn variant_name(fluent_id: &str) -> String {
    fluent_id
        .split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_ascii_uppercase().to_string() + chars.as_str()
            })
        })
        .collect()
}

/// `hero-title` -> `hero.title`
fn dotted_key(fluent_id: &str) -> String {
    fluent_id.replace('-', ".")
}

/// Render the `MessageKey` enum and its lookup tables
fn render_message_keys(ids: &[String]) -> Result<String, String> {
    let mut seen = HashSet::new();
    let variants: Vec<(String, &String)> = ids
        .iter()
        .map(|id| (variant_name(id), id))
        .collect();

    for (variant, id) in &variants {
        if !seen.insert(variant.clone()) {
            return Err(format!("Message id '{id}' collides with another key as {variant}"));
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "/// Message keys defined by the default locale's table.");
    let _ = writeln!(out, "///");
    let _ = writeln!(out, "/// Generated from `locales/{DEFAULT_LOCALE}/main.ftl`.");
    let _ = writeln!(
        out,
        "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]"
    );
    let _ = writeln!(out, "pub enum MessageKey {{");
    for (variant, id) in &variants {
        let _ = writeln!(out, "    /// `{}`", dotted_key(id));
        let _ = writeln!(out, "    {variant},");
    }
    let _ = writeln!(out, "}}\n");

    let _ = writeln!(out, "impl MessageKey {{");
    let _ = writeln!(out, "    /// Every key, in the default locale's file order.");
    let _ = writeln!(out, "    pub const ALL: &'static [Self] = &[");
    for (variant, _) in &variants {
        let _ = writeln!(out, "        Self::{variant},");
    }
    let _ = writeln!(out, "    ];\n");

    let _ = writeln!(out, "    /// Dotted public name, e.g. `hero.title`.");
    let _ = writeln!(out, "    pub const fn as_str(self) -> &'static str {{");
    let _ = writeln!(out, "        match self {{");
    for (variant, id) in &variants {
        let _ = writeln!(out, "            Self::{variant} => \"{}\",", dotted_key(id));
    }
    let _ = writeln!(out, "        }}\n    }}\n");

    let _ = writeln!(out, "    /// Fluent message identifier, e.g. `hero-title`.");
    let _ = writeln!(out, "    pub const fn fluent_id(self) -> &'static str {{");
    let _ = writeln!(out, "        match self {{");
    for (variant, id) in &variants {
        let _ = writeln!(out, "            Self::{variant} => \"{id}\",");
    }
    let _ = writeln!(out, "        }}\n    }}");
    let _ = writeln!(out, "}}");

    Ok(out)
}

/// Main validation and generation function
fn generate() -> Result<(), String> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").map_err(|_| "CARGO_MANIFEST_DIR not set")?;
    let out_dir = env::var("OUT_DIR").map_err(|_| "OUT_DIR not set")?;
    let locales_dir = Path::new(&manifest_dir).join("locales");

    println!("cargo:rerun-if-changed=locales");

    let locale_files = find_locale_files(&locales_dir)?;
    let mut all_messages: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut validation_errors = Vec::new();

    for (locale, path) in &locale_files {
        println!("cargo:rerun-if-changed={}", path.display());
        match validate_locale_file(path) {
            Ok(ids) => {
                all_messages.insert(locale.clone(), ids);
            }
            Err(e) => validation_errors.push(format!("{locale}: {e}")),
        }
    }

    if !validation_errors.is_empty() {
        return Err(format!("Validation errors:\n{}", validation_errors.join("\n")));
    }

    let default_ids = all_messages
        .get(DEFAULT_LOCALE)
        .ok_or_else(|| format!("Default locale '{DEFAULT_LOCALE}' has no main.ftl"))?;
    let default_set: HashSet<&String> = default_ids.iter().collect();

    for (locale, ids) in &all_messages {
        if locale == DEFAULT_LOCALE {
            continue;
        }

        let locale_set: HashSet<&String> = ids.iter().collect();

        for key in ids {
            if !default_set.contains(key) {
                validation_errors.push(format!("{locale}: Extra message key '{key}'"));
            }
        }

        for key in default_ids {
            if !locale_set.contains(key) {
                println!(
                    "cargo:warning={locale}: message '{key}' missing, falls back to {DEFAULT_LOCALE}"
                );
            }
        }
    }

    if !validation_errors.is_empty() {
        return Err(format!("Consistency errors:\n{}", validation_errors.join("\n")));
    }

    let generated = render_message_keys(default_ids)?;
    let target = Path::new(&out_dir).join("message_keys.rs");
    fs::write(&target, generated)
        .map_err(|e| format!("Failed to write {}: {}", target.display(), e))?;

    Ok(())
}

fn main() {
    if let Err(e) = generate() {
        eprintln!("Locale validation failed:\n{e}");
        process::exit(1);
    }
}
