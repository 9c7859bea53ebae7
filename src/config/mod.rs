//! Configuration system for swiperate.

mod env_parser;
mod loader;
mod overrides;
mod paths;
mod validation;

#[cfg(test)]
mod tests_utils;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::Error;
use crate::gesture::{COMMIT_THRESHOLD, HINT_THRESHOLD, Thresholds};
use crate::preferences::{DEFAULT_MAX_CHARS, DEFAULT_MIN_WORDS, QualityRules};

pub use loader::ConfigFile;

/// Configuration values with priority: defaults < config file < env vars.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Displacement a drag must exceed to commit a swipe.
    pub commit_threshold: f64,

    /// Displacement at which a directional hint is shown.
    pub hint_threshold: f64,

    /// Preference summary JSON used when no summary is given explicitly.
    pub preferences_path: PathBuf,

    /// Minimum word count for the prompt check.
    pub min_prompt_words: usize,

    /// Maximum character count for the prompt check.
    pub max_prompt_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            commit_threshold: COMMIT_THRESHOLD,
            hint_threshold: HINT_THRESHOLD,
            preferences_path: paths::data_dir().join("preferences.json"),
            min_prompt_words: DEFAULT_MIN_WORDS,
            max_prompt_chars: DEFAULT_MAX_CHARS,
        }
    }
}

impl Config {
    /// Load configuration with defaults, file values, and environment overrides.
    pub fn load() -> Result<Self, Error> {
        Self::layer(loader::load_from_file()?)
    }

    /// Like [`Config::load`], reading the file layer from `config_path`.
    pub fn load_from(config_path: &Path) -> Result<Self, Error> {
        Self::layer(loader::load_from_path(config_path)?)
    }

    fn layer(file_config: Option<ConfigFile>) -> Result<Self, Error> {
        let mut config = Config::default();

        if let Some(file) = file_config {
            config.merge_from_file(file);
        }

        overrides::apply_env_overrides(&mut config)?;
        config.validate()?;

        tracing::debug!(
            commit_threshold = config.commit_threshold,
            hint_threshold = config.hint_threshold,
            preferences_path = %config.preferences_path.display(),
            "configuration loaded"
        );

        Ok(config)
    }

    /// Merge configuration from a file into this config.
    fn merge_from_file(&mut self, file: ConfigFile) {
        self.commit_threshold = file.commit_threshold;
        self.hint_threshold = file.hint_threshold;
        if !file.preferences_path.as_os_str().is_empty() {
            self.preferences_path = paths::expand_tilde(&file.preferences_path);
        }
        self.min_prompt_words = file.min_prompt_words;
        self.max_prompt_chars = file.max_prompt_chars;
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), Error> {
        let validator = validation::ConfigValidator {
            commit_threshold: self.commit_threshold,
            hint_threshold: self.hint_threshold,
            preferences_path: self.preferences_path.clone(),
            min_prompt_words: self.min_prompt_words,
            max_prompt_chars: self.max_prompt_chars,
        };

        validator.validate()
    }

    /// Gesture thresholds from this configuration.
    pub fn thresholds(&self) -> Result<Thresholds, Error> {
        Thresholds::new(self.hint_threshold, self.commit_threshold)
    }

    /// Prompt check limits from this configuration.
    pub fn quality_rules(&self, expect_preferences: bool) -> QualityRules {
        QualityRules {
            min_words: self.min_prompt_words,
            max_chars: self.max_prompt_chars,
            expect_preferences,
        }
    }
}
