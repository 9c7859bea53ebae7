//! Heuristic prompt quality check.
//!
//! Cheap threshold and substring checks run before a prompt is sent to a
//! generation provider.

use serde::Serialize;

use super::inject::{HATES_HEADING, LOVES_HEADING, PREFERENCE_HEADER, SUGGESTIONS_HEADING};

/// Default minimum number of whitespace-separated words.
pub const DEFAULT_MIN_WORDS: usize = 3;
/// Default maximum prompt length in characters.
pub const DEFAULT_MAX_CHARS: usize = 4_000;

/// Limits applied by [`assess_prompt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityRules {
    pub min_words: usize,
    pub max_chars: usize,
    /// Require a rendered preference block.
    pub expect_preferences: bool,
}

impl Default for QualityRules {
    fn default() -> Self {
        Self {
            min_words: DEFAULT_MIN_WORDS,
            max_chars: DEFAULT_MAX_CHARS,
            expect_preferences: false,
        }
    }
}

/// A single problem found in a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum PromptIssue {
    Empty,
    TooShort { words: usize, min: usize },
    TooLong { chars: usize, max: usize },
    MissingPreferenceBlock,
    /// Block header present but some list headings are not.
    UnbalancedPreferenceBlock { missing: Vec<&'static str> },
}

/// Result of a prompt check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptReport {
    pub word_count: usize,
    pub char_count: usize,
    pub has_preference_block: bool,
    pub issues: Vec<PromptIssue>,
}

impl PromptReport {
    pub fn is_acceptable(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check `prompt` against `rules`.
pub fn assess_prompt(prompt: &str, rules: &QualityRules) -> PromptReport {
    let word_count = prompt.split_whitespace().count();
    let char_count = prompt.chars().count();
    let has_preference_block = prompt.contains(PREFERENCE_HEADER);
    let mut issues = Vec::new();

    if word_count == 0 {
        issues.push(PromptIssue::Empty);
    } else if word_count < rules.min_words {
        issues.push(PromptIssue::TooShort {
            words: word_count,
            min: rules.min_words,
        });
    }

    if char_count > rules.max_chars {
        issues.push(PromptIssue::TooLong {
            chars: char_count,
            max: rules.max_chars,
        });
    }

    if has_preference_block {
        let missing: Vec<&'static str> = [LOVES_HEADING, HATES_HEADING, SUGGESTIONS_HEADING]
            .into_iter()
            .filter(|heading| !prompt.contains(*heading))
            .collect();
        if !missing.is_empty() {
            issues.push(PromptIssue::UnbalancedPreferenceBlock { missing });
        }
    } else if rules.expect_preferences {
        issues.push(PromptIssue::MissingPreferenceBlock);
    }

    tracing::debug!(
        word_count,
        char_count,
        issues = issues.len(),
        "assessed prompt"
    );

    PromptReport {
        word_count,
        char_count,
        has_preference_block,
        issues,
    }
}
