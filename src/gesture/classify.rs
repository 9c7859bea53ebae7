//! Displacement-to-action classification for swipe gestures.
//!
//! A gesture is reduced to the displacement between where the pointer went
//! down and where it is now. The dominant axis picks between the horizontal
//! and vertical branch, and the sign of the displacement on that axis picks
//! the direction once it crosses a threshold.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Displacement (in trajectory units) a drag must exceed to commit an action.
pub const COMMIT_THRESHOLD: f64 = 100.0;
/// Displacement at which an in-progress hint is shown.
pub const HINT_THRESHOLD: f64 = 50.0;

/// Discrete outcome of a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeAction {
    Left,
    Right,
    Up,
    Down,
    /// The drag did not cross the threshold.
    #[default]
    None,
}

impl SwipeAction {
    /// All directional actions, excluding `None`.
    pub const DIRECTIONS: [SwipeAction; 4] = [
        SwipeAction::Left,
        SwipeAction::Right,
        SwipeAction::Up,
        SwipeAction::Down,
    ];

    pub fn is_none(self) -> bool {
        self == SwipeAction::None
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SwipeAction::Left => "left",
            SwipeAction::Right => "right",
            SwipeAction::Up => "up",
            SwipeAction::Down => "down",
            SwipeAction::None => "none",
        }
    }
}

impl fmt::Display for SwipeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Offset of the current pointer position from the drag origin.
///
/// Screen convention: `dy` grows downward, so a negative `dy` is an upward drag.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Displacement {
    dx: f64,
    dy: f64,
}

impl Displacement {
    /// A drag that has not moved.
    pub const ZERO: Displacement = Displacement { dx: 0.0, dy: 0.0 };

    /// Create a displacement, rejecting NaN and infinite components.
    pub fn new(dx: f64, dy: f64) -> Result<Self, Error> {
        if !dx.is_finite() || !dy.is_finite() {
            return Err(Error::NonFiniteCoordinate { x: dx, y: dy });
        }
        Ok(Self { dx, dy })
    }

    /// Difference of two validated points. May overflow to infinity at the
    /// f64 extremes, which still classifies by sign.
    pub(crate) fn between(origin_x: f64, origin_y: f64, x: f64, y: f64) -> Self {
        Self {
            dx: x - origin_x,
            dy: y - origin_y,
        }
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// True when the horizontal component strictly dominates.
    ///
    /// `|dx| == |dy|` is not horizontal, so exact diagonals go to the
    /// vertical branch.
    pub fn is_horizontal(&self) -> bool {
        self.dx.abs() > self.dy.abs()
    }
}

/// Classify a drag against the commit threshold.
///
/// Returns `SwipeAction::None` when the displacement on the dominant axis
/// does not exceed `threshold`; the caller is then expected to animate the
/// card back to rest.
pub fn classify(displacement: Displacement, threshold: f64) -> SwipeAction {
    directional(displacement, threshold)
}

/// Preview the action a drag would commit to, using the smaller hint threshold.
pub fn hint(displacement: Displacement, hint_threshold: f64) -> SwipeAction {
    directional(displacement, hint_threshold)
}

fn directional(displacement: Displacement, threshold: f64) -> SwipeAction {
    let Displacement { dx, dy } = displacement;

    if displacement.is_horizontal() {
        if dx > threshold {
            SwipeAction::Right
        } else if dx < -threshold {
            SwipeAction::Left
        } else {
            SwipeAction::None
        }
    } else if dy < -threshold {
        SwipeAction::Up
    } else if dy > threshold {
        SwipeAction::Down
    } else {
        SwipeAction::None
    }
}

/// Validated pair of hint and commit thresholds.
///
/// # Invariant
///
/// `0 < hint < commit`, both finite, so a hint always appears before the
/// gesture commits and never after.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    hint: f64,
    commit: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            hint: HINT_THRESHOLD,
            commit: COMMIT_THRESHOLD,
        }
    }
}

impl Thresholds {
    pub fn new(hint: f64, commit: f64) -> Result<Self, Error> {
        let valid = hint.is_finite() && commit.is_finite() && hint > 0.0 && hint < commit;
        if !valid {
            return Err(Error::InvalidThreshold { hint, commit });
        }
        Ok(Self { hint, commit })
    }

    pub fn hint(&self) -> f64 {
        self.hint
    }

    pub fn commit(&self) -> f64 {
        self.commit
    }

    /// Classify against the commit threshold.
    pub fn classify(&self, displacement: Displacement) -> SwipeAction {
        classify(displacement, self.commit)
    }

    /// Classify against the hint threshold.
    pub fn preview(&self, displacement: Displacement) -> SwipeAction {
        hint(displacement, self.hint)
    }
}
