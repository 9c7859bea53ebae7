//! Per-pointer drag state and gesture lifecycle.
//!
//! `DragState` is a plain value owned by whoever handles pointer events.
//! `GestureTracker` keeps one of them per active pointer and turns the
//! start/move/end stream into hints while dragging and a single outcome
//! when the pointer is released.

use std::collections::HashMap;

use serde::Serialize;

use super::classify::{Displacement, SwipeAction, Thresholds};
use crate::errors::Error;

/// Pointer position in trajectory units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Create a point, rejecting NaN and infinite coordinates.
    pub fn new(x: f64, y: f64) -> Result<Self, Error> {
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::NonFiniteCoordinate { x, y });
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

/// State of a single drag from pointer-down to pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    origin: Point,
    current: Point,
}

impl DragState {
    /// Begin a drag at `origin`.
    pub fn start(origin: Point) -> Self {
        Self {
            origin,
            current: origin,
        }
    }

    /// Record the latest pointer position.
    pub fn update(&mut self, point: Point) {
        self.current = point;
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn current(&self) -> Point {
        self.current
    }

    /// `current - origin`.
    pub fn displacement(&self) -> Displacement {
        Displacement::between(self.origin.x, self.origin.y, self.current.x, self.current.y)
    }
}

/// Receiver for committed swipe actions (the rating pipeline, a UI callback).
pub trait ActionSink {
    fn on_action(&mut self, action: SwipeAction);
}

impl<F> ActionSink for F
where
    F: FnMut(SwipeAction),
{
    fn on_action(&mut self, action: SwipeAction) {
        self(action)
    }
}

/// What the caller should do once a gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "action", rename_all = "lowercase")]
pub enum GestureOutcome {
    /// The drag crossed the commit threshold; the sink has been notified.
    Committed(SwipeAction),
    /// The drag fell short; animate position and rotation back to rest.
    Reset,
}

/// Tracks in-progress drags, one `DragState` per pointer id.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    thresholds: Thresholds,
    active: HashMap<u32, DragState>,
}

impl GestureTracker {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            active: HashMap::new(),
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    pub fn is_active(&self, pointer: u32) -> bool {
        self.active.contains_key(&pointer)
    }

    pub fn active_pointers(&self) -> usize {
        self.active.len()
    }

    /// Drag state for `pointer`, if a gesture is in progress.
    pub fn drag(&self, pointer: u32) -> Option<&DragState> {
        self.active.get(&pointer)
    }

    /// Pointer went down.
    ///
    /// # Errors
    ///
    /// Returns `Error::PointerAlreadyActive` if `pointer` has not ended its
    /// previous gesture.
    pub fn start(&mut self, pointer: u32, origin: Point) -> Result<(), Error> {
        if self.active.contains_key(&pointer) {
            return Err(Error::PointerAlreadyActive(pointer));
        }
        tracing::debug!(pointer, x = origin.x, y = origin.y, "gesture started");
        self.active.insert(pointer, DragState::start(origin));
        Ok(())
    }

    /// Pointer moved. Returns the hint for the in-progress drag.
    pub fn update(&mut self, pointer: u32, point: Point) -> Result<SwipeAction, Error> {
        let drag = self
            .active
            .get_mut(&pointer)
            .ok_or(Error::UnknownPointer(pointer))?;
        drag.update(point);
        Ok(self.thresholds.preview(drag.displacement()))
    }

    /// Pointer released. Classifies the drag against the commit threshold,
    /// notifies `sink` exactly once if it committed, and discards the state.
    pub fn end<S>(&mut self, pointer: u32, sink: &mut S) -> Result<GestureOutcome, Error>
    where
        S: ActionSink + ?Sized,
    {
        let drag = self
            .active
            .remove(&pointer)
            .ok_or(Error::UnknownPointer(pointer))?;
        let displacement = drag.displacement();

        let action = self.thresholds.classify(displacement);
        if action.is_none() {
            tracing::debug!(
                pointer,
                dx = displacement.dx(),
                dy = displacement.dy(),
                "gesture reset"
            );
            return Ok(GestureOutcome::Reset);
        }

        tracing::debug!(pointer, %action, "gesture committed");
        sink.on_action(action);
        Ok(GestureOutcome::Committed(action))
    }

    /// Pointer cancelled by the platform. Discards the state without
    /// classifying, so the sink is never notified.
    pub fn cancel(&mut self, pointer: u32) -> Result<(), Error> {
        if self.active.remove(&pointer).is_none() {
            return Err(Error::UnknownPointer(pointer));
        }
        tracing::debug!(pointer, "gesture cancelled");
        Ok(())
    }
}
