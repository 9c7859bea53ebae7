//! Replay of recorded pointer event streams.
//!
//! Event files are JSON arrays such as:
//!
//! ```json
//! [
//!   {"type": "start", "pointer": 1, "x": 0, "y": 0},
//!   {"type": "move",  "pointer": 1, "x": 120, "y": 8},
//!   {"type": "end",   "pointer": 1}
//! ]
//! ```
//!
//! `pointer` defaults to 0. An `end` event may carry a final position.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::classify::{SwipeAction, Thresholds};
use super::session::{GestureOutcome, GestureTracker, Point};
use crate::errors::Error;

/// One recorded pointer event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PointerEvent {
    Start {
        #[serde(default)]
        pointer: u32,
        x: f64,
        y: f64,
    },
    Move {
        #[serde(default)]
        pointer: u32,
        x: f64,
        y: f64,
    },
    End {
        #[serde(default)]
        pointer: u32,
        #[serde(default)]
        x: Option<f64>,
        #[serde(default)]
        y: Option<f64>,
    },
    Cancel {
        #[serde(default)]
        pointer: u32,
    },
}

/// A gesture that crossed the commit threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommittedGesture {
    pub pointer: u32,
    pub action: SwipeAction,
}

/// Summary of a replayed event stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReplayReport {
    /// Committed gestures in the order they ended.
    pub committed: Vec<CommittedGesture>,
    /// Gestures that ended below the commit threshold.
    pub resets: usize,
    /// Gestures cancelled by the platform.
    pub cancelled: usize,
    /// Gestures still in progress when the stream ran out.
    pub unfinished: usize,
}

impl ReplayReport {
    pub fn actions(&self) -> Vec<SwipeAction> {
        self.committed.iter().map(|c| c.action).collect()
    }

    /// Number of committed gestures per direction, in `SwipeAction::DIRECTIONS` order.
    pub fn tally(&self) -> Vec<(SwipeAction, usize)> {
        SwipeAction::DIRECTIONS
            .into_iter()
            .map(|direction| {
                let count = self
                    .committed
                    .iter()
                    .filter(|c| c.action == direction)
                    .count();
                (direction, count)
            })
            .collect()
    }
}

/// Drive `events` through a fresh tracker.
///
/// # Errors
///
/// Fails on the first event that the tracker rejects (unknown pointer,
/// double start), on non-finite coordinates, or on an `end` event that
/// carries only one of `x`/`y`.
pub fn replay(events: &[PointerEvent], thresholds: Thresholds) -> Result<ReplayReport, Error> {
    let mut tracker = GestureTracker::new(thresholds);
    let mut report = ReplayReport::default();

    for (index, event) in events.iter().enumerate() {
        tracing::trace!(index, ?event, "replaying pointer event");
        match *event {
            PointerEvent::Start { pointer, x, y } => {
                tracker.start(pointer, Point::new(x, y)?)?;
            }
            PointerEvent::Move { pointer, x, y } => {
                tracker.update(pointer, Point::new(x, y)?)?;
            }
            PointerEvent::End { pointer, x, y } => {
                match (x, y) {
                    (Some(x), Some(y)) => {
                        tracker.update(pointer, Point::new(x, y)?)?;
                    }
                    (None, None) => {}
                    _ => {
                        return Err(Error::InvalidInput(format!(
                            "event {index}: end event needs both x and y or neither"
                        )));
                    }
                }

                // The report records committed actions from the outcome.
                match tracker.end(pointer, &mut |_: SwipeAction| {})? {
                    GestureOutcome::Committed(action) => {
                        report.committed.push(CommittedGesture { pointer, action });
                    }
                    GestureOutcome::Reset => report.resets += 1,
                }
            }
            PointerEvent::Cancel { pointer } => {
                tracker.cancel(pointer)?;
                report.cancelled += 1;
            }
        }
    }

    report.unfinished = tracker.active_pointers();
    if report.unfinished > 0 {
        tracing::warn!(
            unfinished = report.unfinished,
            "event stream ended with gestures in progress"
        );
    }

    Ok(report)
}

/// Parse a JSON array of pointer events.
pub fn parse_events(content: &str) -> Result<Vec<PointerEvent>, Error> {
    Ok(serde_json::from_str(content)?)
}

/// Load pointer events from a JSON file.
pub fn load_events(path: &Path) -> Result<Vec<PointerEvent>, Error> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    parse_events(&content)
}
