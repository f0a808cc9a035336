//! Bundled-language registry and rule-file resolution.
//!
//! Bundled rule files are embedded at compile time, so resolving a bundled
//! name never touches the filesystem. Anything that is not a bundled name
//! is treated as a path to an on-disk `.g2p` rule file.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use phf::phf_map;

use libg2p_core::RuleSet;

use crate::error::ConfigError;

/// Extension required of on-disk rule files.
pub const RULE_FILE_EXTENSION: &str = "g2p";

/// Language name -> embedded rule text.
static BUNDLED: phf::Map<&'static str, &'static str> = phf_map! {
    "cree" => include_str!("../share/cree.g2p"),
    "inuktitut" => include_str!("../share/inuktitut.g2p"),
};

static SUPPORTED: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut names: Vec<&'static str> = BUNDLED.keys().copied().collect();
    names.sort_unstable();
    names
});

/// Names of the bundled languages, sorted.
pub fn supported_languages() -> &'static [&'static str] {
    &SUPPORTED
}

/// Whether `language` names a bundled language or a valid rule file.
///
/// Bundled names match case-sensitively without filesystem access. Any
/// other identifier is supported only as a path to an existing, readable
/// `.g2p` file whose content passes the rule grammar. Never fails: missing
/// files, wrong extensions and malformed content all yield `false`.
pub fn is_supported_language(language: &str) -> bool {
    if BUNDLED.contains_key(language) {
        return true;
    }
    match load_rule_file(Path::new(language)) {
        Ok(_) => true,
        Err(err) => {
            tracing::debug!(language, %err, "language rejected");
            false
        }
    }
}

/// Resolve `language` to a compiled rule set.
///
/// The exact counterpart of [`is_supported_language`]: resolution succeeds
/// if and only if the query would return `true` for the same identifier.
pub(crate) fn load(language: &str) -> Result<RuleSet, ConfigError> {
    if let Some(text) = BUNDLED.get(language) {
        return RuleSet::parse(text).map_err(|e| ConfigError::MalformedRuleFile {
            path: PathBuf::from(language),
            source: e,
        });
    }
    load_rule_file(Path::new(language))
}

fn load_rule_file(path: &Path) -> Result<RuleSet, ConfigError> {
    let unsupported = || ConfigError::UnsupportedLanguage(path.display().to_string());
    if path.extension().and_then(|e| e.to_str()) != Some(RULE_FILE_EXTENSION) {
        return Err(unsupported());
    }
    if !path.is_file() {
        return Err(unsupported());
    }
    let text = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rules = RuleSet::parse(&text).map_err(|e| ConfigError::MalformedRuleFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), rules = rules.len(), "loaded rule file");
    Ok(rules)
}
