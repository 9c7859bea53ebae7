//! JSON response types and formatting for CLI output.

use serde::Serialize;

use swiperate::gesture::replay::ReplayReport;
use swiperate::preferences::PromptReport;
use swiperate::{Displacement, SwipeAction};

/// Response for `classify` and `hint`.
#[derive(Serialize)]
pub struct ClassifyResponse {
    pub action: SwipeAction,
    pub displacement: Displacement,
    pub threshold: f64,
}

/// Response for `replay`.
#[derive(Serialize)]
pub struct ReplayResponse {
    pub events: usize,
    #[serde(flatten)]
    pub report: ReplayReport,
}

/// Response for `augment`.
#[derive(Serialize)]
pub struct AugmentResponse {
    pub prompt: String,
    pub preferences_applied: bool,
    pub items_analyzed: Option<u64>,
}

/// Response for `check`.
#[derive(Serialize)]
pub struct CheckResponse {
    pub acceptable: bool,
    #[serde(flatten)]
    pub report: PromptReport,
}

/// Response for errors.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Print a value as formatted JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}
