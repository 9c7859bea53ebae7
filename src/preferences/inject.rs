//! Appends learned preferences to a generation prompt.

use super::summary::PreferenceSummary;

/// Leading text of the rendered preference block.
pub const PREFERENCE_HEADER: &str = "LEARNED USER PREFERENCES";
pub const LOVES_HEADING: &str = "USER LOVES:";
pub const HATES_HEADING: &str = "USER HATES:";
pub const SUGGESTIONS_HEADING: &str = "SUGGESTIONS:";
pub const CLOSING_DIRECTIVE: &str =
    "Generate content that leans toward what the user loves and steers clear of what they hate.";

/// Blank line between the base prompt and the preference block.
const SEPARATOR: &str = "\n\n";

/// Augment `base_prompt` with the preference block.
///
/// With no summary the base prompt is returned unchanged. Otherwise the
/// result is `base_prompt`, a blank line, then the block from
/// [`render_block`].
///
/// # Example
///
/// ```
/// use swiperate::preferences::{augment, PreferenceSummary};
///
/// assert_eq!(augment("Base.", None), "Base.");
///
/// let summary = PreferenceSummary::new(2, vec!["X".into()], vec!["Y".into()], vec!["Z".into()]);
/// let prompt = augment("Base.", Some(&summary));
/// assert!(prompt.starts_with("Base.\n\n"));
/// assert!(prompt.contains("1. X"));
/// ```
pub fn augment(base_prompt: &str, summary: Option<&PreferenceSummary>) -> String {
    let Some(summary) = summary else {
        return base_prompt.to_string();
    };

    let block = render_block(summary);
    let mut prompt = String::with_capacity(base_prompt.len() + SEPARATOR.len() + block.len());
    prompt.push_str(base_prompt);
    prompt.push_str(SEPARATOR);
    prompt.push_str(&block);
    prompt
}

/// Render the preference block on its own.
///
/// Each list is numbered from 1 in input order. Empty lists keep their
/// heading with no entries below it.
pub fn render_block(summary: &PreferenceSummary) -> String {
    let mut block = format!(
        "{PREFERENCE_HEADER} (from {} rated items):\n",
        summary.items_analyzed
    );
    push_section(&mut block, LOVES_HEADING, &summary.loves);
    push_section(&mut block, HATES_HEADING, &summary.hates);
    push_section(&mut block, SUGGESTIONS_HEADING, &summary.suggestions);
    block.push('\n');
    block.push_str(CLOSING_DIRECTIVE);
    block
}

fn push_section(block: &mut String, heading: &str, items: &[String]) {
    block.push('\n');
    block.push_str(heading);
    block.push('\n');
    for (index, item) in items.iter().enumerate() {
        block.push_str(&format!("{}. {}\n", index + 1, item));
    }
}
