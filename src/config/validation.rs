//! Configuration validation logic.

use std::path::PathBuf;

use crate::errors::Error;

/// Validates configuration values.
pub struct ConfigValidator {
    /// Commit threshold for swipe classification.
    pub commit_threshold: f64,
    /// Hint threshold for swipe previews.
    pub hint_threshold: f64,
    /// Location of the preference summary JSON.
    pub preferences_path: PathBuf,
    /// Minimum word count for prompt checks.
    pub min_prompt_words: usize,
    /// Maximum character count for prompt checks.
    pub max_prompt_chars: usize,
}

impl ConfigValidator {
    /// Validate all configuration values for correctness and constraints.
    ///
    /// Checks that:
    /// - Both thresholds are finite and positive
    /// - The hint threshold is below the commit threshold
    /// - The preferences path is not empty
    /// - The prompt length limits leave room for a valid prompt
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if any validation check fails.
    pub fn validate(&self) -> Result<(), Error> {
        validate_threshold("commit threshold", self.commit_threshold)?;
        validate_threshold("hint threshold", self.hint_threshold)?;
        self.validate_threshold_order()?;
        self.validate_preferences_path()?;
        self.validate_prompt_limits()?;

        Ok(())
    }

    fn validate_threshold_order(&self) -> Result<(), Error> {
        if self.hint_threshold >= self.commit_threshold {
            return Err(Error::Config(format!(
                "Hint threshold {} must be below commit threshold {}",
                self.hint_threshold, self.commit_threshold
            )));
        }

        Ok(())
    }

    fn validate_preferences_path(&self) -> Result<(), Error> {
        if self.preferences_path.as_os_str().is_empty() {
            return Err(Error::Config("Preferences path cannot be empty".to_string()));
        }

        Ok(())
    }

    fn validate_prompt_limits(&self) -> Result<(), Error> {
        if self.max_prompt_chars == 0 {
            return Err(Error::Config(
                "Max prompt chars must be greater than 0".to_string(),
            ));
        }

        // Every word is at least one character.
        if self.min_prompt_words > self.max_prompt_chars {
            return Err(Error::Config(format!(
                "Min prompt words {} cannot exceed max prompt chars {}",
                self.min_prompt_words, self.max_prompt_chars
            )));
        }

        Ok(())
    }
}

fn validate_threshold(name: &str, value: f64) -> Result<(), Error> {
    if value.is_nan() || value.is_infinite() {
        return Err(Error::Config(format!(
            "Invalid {name}: NaN and infinity are not allowed"
        )));
    }

    if value <= 0.0 {
        return Err(Error::Config(format!(
            "Invalid {name}: {value} (must be greater than 0)"
        )));
    }

    Ok(())
}
