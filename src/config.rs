//! Formatter configuration loaded from `pg-escape.toml`.
//!
//! ```toml
//! [format]
//! unknown_directive = "reject"      # or "pass-through"
//!
//! [identifiers]
//! extra_reserved = ["tenant", "owner"]
//!
//! [dollar]
//! min_tag_len = 1
//! attempts_per_len = 8
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dollar::DollarOptions;
use crate::error::{EscapeError, EscapeResult};
use crate::format::{DirectivePolicy, FormatOptions, Formatter};
use crate::keywords::Keywords;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "pg-escape.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub format: FormatSection,
    pub identifiers: IdentifierSection,
    pub dollar: DollarOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatSection {
    pub unknown_directive: DirectivePolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdentifierSection {
    /// Words quoted by `%I` on top of the PostgreSQL reserved set.
    pub extra_reserved: Vec<String>,
}

impl Config {
    pub fn from_toml(content: &str) -> EscapeResult<Self> {
        toml::from_str(content).map_err(|e| EscapeError::Config(e.to_string()))
    }

    /// Load a config file.
    pub fn load(path: &Path) -> EscapeResult<Self> {
        debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| EscapeError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load the first config found in [`Config::search_paths`], or the defaults.
    pub fn discover() -> EscapeResult<Self> {
        for path in Self::search_paths() {
            if path.is_file() {
                return Self::load(&path);
            }
        }
        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// `./pg-escape.toml`, then `<config dir>/pg-escape/config.toml`.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("pg-escape").join("config.toml"));
        }
        paths
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            keywords: Keywords::postgres().with_extra(&self.identifiers.extra_reserved),
            unknown_directive: self.format.unknown_directive,
            dollar: self.dollar.clone(),
        }
    }

    pub fn formatter(&self) -> Formatter {
        Formatter::new(self.format_options())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_all_sections() {
        let config = Config::from_toml(
            r#"
            [format]
            unknown_directive = "pass-through"

            [identifiers]
            extra_reserved = ["Tenant"]

            [dollar]
            min_tag_len = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.format.unknown_directive, DirectivePolicy::PassThrough);
        assert_eq!(config.dollar.min_tag_len, 3);
        assert_eq!(config.dollar.attempts_per_len, 8);

        let opts = config.format_options();
        assert!(opts.keywords.is_reserved("tenant"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::from_toml("[format]\nunknown = 1").unwrap_err();
        assert!(matches!(err, EscapeError::Config(_)));
        let err = Config::from_toml("[dollar]\nmin_tag_length = 3").unwrap_err();
        assert!(matches!(err, EscapeError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[identifiers]\nextra_reserved = [\"owner\"]").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.identifiers.extra_reserved, vec!["owner".to_string()]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/pg-escape.toml")).unwrap_err();
        assert!(matches!(err, EscapeError::Io(_)));
    }
}
