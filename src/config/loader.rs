//! Configuration file loading and parsing.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::paths;
use crate::errors::Error;
use crate::gesture::{COMMIT_THRESHOLD, HINT_THRESHOLD};
use crate::preferences::{DEFAULT_MAX_CHARS, DEFAULT_MIN_WORDS};

/// Configuration loaded from TOML file. Missing keys keep their defaults.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default = "default_commit_threshold")]
    pub commit_threshold: f64,

    #[serde(default = "default_hint_threshold")]
    pub hint_threshold: f64,

    #[serde(default)]
    pub preferences_path: PathBuf,

    #[serde(default = "default_min_prompt_words")]
    pub min_prompt_words: usize,

    #[serde(default = "default_max_prompt_chars")]
    pub max_prompt_chars: usize,
}

fn default_commit_threshold() -> f64 {
    COMMIT_THRESHOLD
}

fn default_hint_threshold() -> f64 {
    HINT_THRESHOLD
}

fn default_min_prompt_words() -> usize {
    DEFAULT_MIN_WORDS
}

fn default_max_prompt_chars() -> usize {
    DEFAULT_MAX_CHARS
}

/// Load configuration from the default TOML location, if present.
pub fn load_from_file() -> Result<Option<ConfigFile>, Error> {
    load_from_path(&paths::config_file())
}

/// Load configuration from `config_path`. A missing file is not an error.
pub fn load_from_path(config_path: &Path) -> Result<Option<ConfigFile>, Error> {
    let content = match std::fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(None);
        }
        Err(e) => {
            return Err(Error::Config(format!(
                "Failed to read config file {}: {e}",
                config_path.display()
            )));
        }
    };

    let config: ConfigFile = toml::from_str(&content).map_err(|e| {
        Error::Config(format!(
            "Failed to parse config file {}: {e}",
            config_path.display()
        ))
    })?;

    tracing::debug!(path = %config_path.display(), "loaded config file");
    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_toml() {
        let content = r#"
This is not valid TOML
 [[unclosed bracket
 "#;

        let result: Result<ConfigFile, _> = toml::from_str(content);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_config_file() {
        let config: ConfigFile = toml::from_str("").unwrap();

        assert_eq!(config.commit_threshold, 100.0);
        assert_eq!(config.hint_threshold, 50.0);
        assert!(config.preferences_path.as_os_str().is_empty());
        assert_eq!(config.min_prompt_words, 3);
        assert_eq!(config.max_prompt_chars, 4_000);
    }

    #[test]
    fn test_config_file_partial_toml() {
        let content = r#"
            commit_threshold = 140.0
            preferences_path = "~/ratings/prefs.json"
        "#;

        let config: ConfigFile = toml::from_str(content).unwrap();
        assert_eq!(config.commit_threshold, 140.0);
        assert_eq!(config.hint_threshold, 50.0);
        assert_eq!(config.preferences_path, PathBuf::from("~/ratings/prefs.json"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: Result<ConfigFile, _> = toml::from_str("comit_threshold = 10.0");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_missing_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = load_from_path(&dir.path().join("config.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_from_path_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "hint_threshold = \"fast\"").unwrap();

        let result = load_from_path(&path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_from_unreadable_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, "").unwrap();

        let result = load_from_path(&blocker.join("config.toml"));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
