//! Preference-aware prompt building.
//!
//! A [`PreferenceSummary`] comes from an external analysis of the user's
//! rated items. [`augment`] appends it to a generation prompt in a fixed
//! template, and [`assess_prompt`] sanity-checks the result.

mod inject;
mod quality;
mod summary;

pub use inject::{
    CLOSING_DIRECTIVE, HATES_HEADING, LOVES_HEADING, PREFERENCE_HEADER, SUGGESTIONS_HEADING,
    augment, render_block,
};
pub use quality::{
    DEFAULT_MAX_CHARS, DEFAULT_MIN_WORDS, PromptIssue, PromptReport, QualityRules, assess_prompt,
};
pub use summary::{
    PreferenceHistory, PreferenceSummary, load_summary, normalize, parse_summary,
};
