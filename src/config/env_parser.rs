//! Environment variable parsing utilities for configuration.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::paths;
use crate::errors::Error;

pub const COMMIT_THRESHOLD_VAR: &str = "SWIPERATE_COMMIT_THRESHOLD";
pub const HINT_THRESHOLD_VAR: &str = "SWIPERATE_HINT_THRESHOLD";
pub const PREFERENCES_PATH_VAR: &str = "SWIPERATE_PREFERENCES_PATH";
pub const MIN_PROMPT_WORDS_VAR: &str = "SWIPERATE_MIN_PROMPT_WORDS";
pub const MAX_PROMPT_CHARS_VAR: &str = "SWIPERATE_MAX_PROMPT_CHARS";

fn non_empty<'a>(name: &str, value: &'a str) -> Result<&'a str, Error> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Config(format!("{name} cannot be empty")));
    }
    Ok(trimmed)
}

/// Parse environment variable as a path, expanding tilde.
fn parse_env_path(name: &str, value: &str) -> Result<PathBuf, Error> {
    let value = non_empty(name, value)?;
    Ok(paths::expand_tilde(Path::new(value)))
}

/// Parse environment variable as a number. Range checks happen in validation.
fn parse_env_number<T>(name: &str, value: &str) -> Result<T, Error>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    non_empty(name, value)?
        .parse()
        .map_err(|e| Error::Config(format!("Invalid {name} value: {e}")))
}

fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Apply SWIPERATE_COMMIT_THRESHOLD environment variable override.
pub fn apply_commit_threshold_override(commit_threshold: &mut f64) -> Result<(), Error> {
    if let Some(val) = read_var(COMMIT_THRESHOLD_VAR) {
        *commit_threshold = parse_env_number(COMMIT_THRESHOLD_VAR, &val)?;
    }
    Ok(())
}

/// Apply SWIPERATE_HINT_THRESHOLD environment variable override.
pub fn apply_hint_threshold_override(hint_threshold: &mut f64) -> Result<(), Error> {
    if let Some(val) = read_var(HINT_THRESHOLD_VAR) {
        *hint_threshold = parse_env_number(HINT_THRESHOLD_VAR, &val)?;
    }
    Ok(())
}

/// Apply SWIPERATE_PREFERENCES_PATH environment variable override.
pub fn apply_preferences_path_override(preferences_path: &mut PathBuf) -> Result<(), Error> {
    if let Some(val) = read_var(PREFERENCES_PATH_VAR) {
        *preferences_path = parse_env_path(PREFERENCES_PATH_VAR, &val)?;
    }
    Ok(())
}

/// Apply SWIPERATE_MIN_PROMPT_WORDS environment variable override.
pub fn apply_min_prompt_words_override(min_prompt_words: &mut usize) -> Result<(), Error> {
    if let Some(val) = read_var(MIN_PROMPT_WORDS_VAR) {
        *min_prompt_words = parse_env_number(MIN_PROMPT_WORDS_VAR, &val)?;
    }
    Ok(())
}

/// Apply SWIPERATE_MAX_PROMPT_CHARS environment variable override.
pub fn apply_max_prompt_chars_override(max_prompt_chars: &mut usize) -> Result<(), Error> {
    if let Some(val) = read_var(MAX_PROMPT_CHARS_VAR) {
        *max_prompt_chars = parse_env_number(MAX_PROMPT_CHARS_VAR, &val)?;
    }
    Ok(())
}
