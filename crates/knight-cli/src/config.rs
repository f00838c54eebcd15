//! JSON configuration file loading.
//!
//! A config file names the two squares to solve for:
//!
//! ```json
//! { "start": "a1", "end": "h8" }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or validating the config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON or has the wrong shape.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A required position is absent or blank.
    #[error("config file must contain '{0}' position")]
    MissingField(&'static str),
}

/// Contents of the JSON config file.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct PathConfig {
    /// Start square in algebraic notation.
    #[serde(default)]
    pub start: Option<String>,
    /// End square in algebraic notation.
    #[serde(default)]
    pub end: Option<String>,
}

impl PathConfig {
    /// Reads and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read,
    /// [`ConfigError::Parse`] if it is not valid JSON, or
    /// [`ConfigError::MissingField`] if either position is missing.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parses and validates config text.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: PathConfig = serde_json::from_str(content)?;
        config.positions()?;
        Ok(config)
    }

    /// Returns `(start, end)`, requiring both to be present and non-blank.
    pub fn positions(&self) -> Result<(&str, &str), ConfigError> {
        let start = non_blank(self.start.as_deref()).ok_or(ConfigError::MissingField("start"))?;
        let end = non_blank(self.end.as_deref()).ok_or(ConfigError::MissingField("end"))?;
        Ok((start, end))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_valid_config() {
        let config = PathConfig::from_json(r#"{ "start": "a1", "end": "h8" }"#).unwrap();
        assert_eq!(config.positions().unwrap(), ("a1", "h8"));
    }

    #[test]
    fn ignores_unknown_keys() {
        let config =
            PathConfig::from_json(r#"{ "start": "b1", "end": "c3", "comment": "hi" }"#).unwrap();
        assert_eq!(config.positions().unwrap(), ("b1", "c3"));
    }

    #[test]
    fn missing_end_is_reported() {
        let err = PathConfig::from_json(r#"{ "start": "a1" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("end")));
        assert_eq!(err.to_string(), "config file must contain 'end' position");
    }

    #[test]
    fn blank_start_is_reported() {
        let err = PathConfig::from_json(r#"{ "start": " ", "end": "a1" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("start")));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = PathConfig::from_json("{ start: a1 ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn wrong_value_type_is_a_parse_error() {
        let err = PathConfig::from_json(r#"{ "start": 1, "end": "h8" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"start": "g1", "end": "f3"}}"#).unwrap();

        let config = PathConfig::load(file.path()).unwrap();
        assert_eq!(config.start.as_deref(), Some("g1"));
        assert_eq!(config.end.as_deref(), Some("f3"));
    }

    #[test]
    fn load_missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PathConfig::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn serialization_roundtrip() {
        let config = PathConfig {
            start: Some("a1".to_string()),
            end: Some("h8".to_string()),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(PathConfig::from_json(&json).unwrap(), config);
    }
}
