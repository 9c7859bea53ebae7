//! Preference summaries produced by the rating history analysis.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Liked and disliked attributes learned from previously rated items.
///
/// List order is display order and is preserved verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceSummary {
    #[serde(default)]
    pub items_analyzed: u64,
    #[serde(default)]
    pub loves: Vec<String>,
    #[serde(default)]
    pub hates: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl PreferenceSummary {
    pub fn new(
        items_analyzed: u64,
        loves: Vec<String>,
        hates: Vec<String>,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            items_analyzed,
            loves,
            hates,
            suggestions,
        }
    }

    /// True when all three lists are empty.
    pub fn has_no_entries(&self) -> bool {
        self.loves.is_empty() && self.hates.is_empty() && self.suggestions.is_empty()
    }
}

/// Wire shape of the analysis output.
///
/// ```json
/// {"hasHistory": true, "preferences": {"itemsAnalyzed": 12, "loves": [], "hates": [], "suggestions": []}}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceHistory {
    #[serde(default)]
    pub has_history: bool,
    #[serde(default)]
    pub preferences: Option<PreferenceSummary>,
}

impl PreferenceHistory {
    /// Collapse the "no history" shapes into `None`: `hasHistory` false or
    /// missing, or `preferences` missing.
    pub fn into_summary(self) -> Option<PreferenceSummary> {
        if !self.has_history {
            return None;
        }
        self.preferences
    }
}

/// Normalize an optional history (a JSON `null` included) into an optional summary.
pub fn normalize(history: Option<PreferenceHistory>) -> Option<PreferenceSummary> {
    history.and_then(PreferenceHistory::into_summary)
}

/// Parse preference history JSON into a normalized summary.
pub fn parse_summary(content: &str) -> Result<Option<PreferenceSummary>, Error> {
    let history: Option<PreferenceHistory> = serde_json::from_str(content)?;
    Ok(normalize(history))
}

/// Load a preference summary from a JSON file.
///
/// A missing file means no history yet and yields `Ok(None)`.
pub fn load_summary(path: &Path) -> Result<Option<PreferenceSummary>, Error> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no preference file, using base prompt");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    let summary = parse_summary(&content)?;

    match &summary {
        Some(s) if s.has_no_entries() => tracing::info!(
            path = %path.display(),
            items_analyzed = s.items_analyzed,
            "preference summary has no entries, block renders empty sections"
        ),
        Some(s) => tracing::info!(
            path = %path.display(),
            items_analyzed = s.items_analyzed,
            "loaded preference summary"
        ),
        None => tracing::debug!(path = %path.display(), "preference file has no history"),
    }

    Ok(summary)
}
