//! History configuration file parsing
//!
//! The configuration file uses INI format. Settings live in a `[history]`
//! section; a file without that section yields the defaults.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const SECTION: &str = "history";

/// Raw `[history]` section as written in the file
#[derive(Debug, Deserialize)]
struct HistorySection {
    initial_capacity: Option<String>,
    filter_tags: Option<String>,
}

/// Configuration for a [`HistoryStack`](crate::HistoryStack)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Number of records to reserve space for up front
    pub initial_capacity: usize,

    /// Tags which should be used to filter failure counts
    pub filter_tags: Option<String>,
}

impl HistoryConfig {
    /// Load configuration from an INI file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a string
    pub fn parse(contents: &str) -> Result<Self> {
        let mut ini: HashMap<String, HistorySection> = serde_ini::from_str(contents)
            .map_err(|e| Error::Config(format!("Failed to parse history config: {}", e)))?;

        let Some(section) = ini.remove(SECTION) else {
            return Ok(HistoryConfig::default());
        };

        let initial_capacity = match &section.initial_capacity {
            Some(value) => value.trim().parse::<usize>().map_err(|_| {
                Error::Config(format!(
                    "initial_capacity must be a non-negative integer, got '{}'",
                    value
                ))
            })?,
            None => 0,
        };

        Ok(HistoryConfig {
            initial_capacity,
            filter_tags: section.filter_tags,
        })
    }

    /// Returns the configured filter tags split on whitespace
    pub fn filter_tag_list(&self) -> Vec<String> {
        self.filter_tags
            .as_deref()
            .map(|tags| tags.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let config_str = r#"
[history]
initial_capacity=128
filter_tags=worker-0 worker-1
"#;

        let config = HistoryConfig::parse(config_str).unwrap();
        assert_eq!(config.initial_capacity, 128);
        assert_eq!(
            config.filter_tag_list(),
            vec!["worker-0".to_string(), "worker-1".to_string()]
        );
    }

    #[test]
    fn test_missing_section_gives_defaults() {
        let config_str = r#"
[OTHER]
initial_capacity=5
"#;

        let config = HistoryConfig::parse(config_str).unwrap();
        assert_eq!(config, HistoryConfig::default());
        assert!(config.filter_tag_list().is_empty());
    }

    #[test]
    fn test_unknown_keys_and_sections_ignored() {
        let config_str = r#"
[DEFAULT]
test_command=python -m subunit.run

[history]
filter_tags=worker-2
colour=always
"#;

        let config = HistoryConfig::parse(config_str).unwrap();
        assert_eq!(config.initial_capacity, 0);
        assert_eq!(config.filter_tags.as_deref(), Some("worker-2"));
    }

    #[test]
    fn test_invalid_capacity() {
        let config_str = r#"
[history]
initial_capacity=lots
"#;

        let result = HistoryConfig::parse(config_str);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("initial_capacity"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[history]").unwrap();
        writeln!(file, "initial_capacity=16").unwrap();

        let config = HistoryConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.initial_capacity, 16);
        assert_eq!(config.filter_tags, None);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = HistoryConfig::load_from_file(&temp.path().join("absent.conf"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
