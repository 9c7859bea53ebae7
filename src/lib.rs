//! swiperate - swipe gesture classification and preference-aware prompts.
//!
//! This crate holds the logic behind a swipe-to-rate UI for AI-generated
//! media: turning a drag into a rating action, and folding what the user
//! has liked so far back into the next generation prompt.
//! All operations are synchronous and free of I/O except the explicit
//! loaders for config, event and preference files.
//!
//! # Example
//!
//! ```
//! use swiperate::{augment, GestureTracker, Point, PreferenceSummary, SwipeAction};
//!
//! // Track one drag and hand committed actions to the rating pipeline
//! let mut tracker = GestureTracker::default();
//! let mut rated = Vec::new();
//! tracker.start(0, Point::new(0.0, 0.0)?)?;
//! tracker.update(0, Point::new(150.0, 10.0)?)?;
//! tracker.end(0, &mut |action: SwipeAction| rated.push(action))?;
//! assert_eq!(rated, vec![SwipeAction::Right]);
//!
//! // Append learned preferences to the next prompt
//! let summary = PreferenceSummary::new(1, vec!["pastel colors".into()], vec![], vec![]);
//! let prompt = augment("A lighthouse at dusk.", Some(&summary));
//! assert!(prompt.contains("1. pastel colors"));
//! # Ok::<(), swiperate::Error>(())
//! ```

pub mod config;
pub mod errors;
pub mod gesture;
pub mod preferences;

// Re-export public API
pub use config::Config;
pub use errors::Error;
pub use gesture::{
    ActionSink, Displacement, DragState, GestureOutcome, GestureTracker, Point, SwipeAction,
    Thresholds, classify, hint,
};
pub use preferences::{PreferenceHistory, PreferenceSummary, assess_prompt, augment};
