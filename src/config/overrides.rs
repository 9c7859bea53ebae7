//! Environment variable overrides for configuration.

use super::Config;
use super::env_parser;
use crate::errors::Error;

/// Apply environment variable overrides to configuration.
pub fn apply_env_overrides(config: &mut Config) -> Result<(), Error> {
    env_parser::apply_commit_threshold_override(&mut config.commit_threshold)?;
    env_parser::apply_hint_threshold_override(&mut config.hint_threshold)?;
    env_parser::apply_preferences_path_override(&mut config.preferences_path)?;
    env_parser::apply_min_prompt_words_override(&mut config.min_prompt_words)?;
    env_parser::apply_max_prompt_chars_override(&mut config.max_prompt_chars)?;
    Ok(())
}
