//! Swipe gesture handling: pure classification plus caller-owned drag state.

mod classify;
pub mod replay;
mod session;

pub use classify::{
    COMMIT_THRESHOLD, Displacement, HINT_THRESHOLD, SwipeAction, Thresholds, classify, hint,
};
pub use session::{ActionSink, DragState, GestureOutcome, GestureTracker, Point};
