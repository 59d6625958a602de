//! Mutable editor state and the two transforms that keep it in sync.
//!
//! [`EasingState`] holds the current [`NormalizedEasing`] and the two
//! pixel-space handles.  The representations are only reconciled when
//! the host calls [`create_easing`](EasingState::create_easing) (pixel →
//! curve) or [`transform_coordinate`](EasingState::transform_coordinate)
//! (curve → pixel).
//!
//! Observers subscribe with [`EasingState::subscribe`] and receive a
//! [`StateEvent`] after every mutation, so the rendering layer never has
//! to watch the state itself.

use crate::easing::{ControlPoint, NormalizedEasing, PointPair};
use crate::transform::{normalize_easing, normalize_point, Bounds};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::sync::mpsc;

/// Handle positions reported by a drag, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandlePositions {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Four curve-space values to place on the canvas, in the caller's order.
///
/// `x1`/`x2` become the first handle, `x3`/`x4` the second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveParams {
    pub x1: f64,
    pub x2: f64,
    pub x3: f64,
    pub x4: f64,
}

impl From<NormalizedEasing> for CurveParams {
    fn from(e: NormalizedEasing) -> Self {
        Self {
            x1: e.x1,
            x2: e.y1,
            x3: e.x2,
            x4: e.y2,
        }
    }
}

/// Events buffered per subscriber before newer ones are dropped.
pub const SUBSCRIBER_CAPACITY: usize = 64;

/// Change notifications sent to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum StateEvent {
    /// A new easing tuple replaced the previous one.
    EasingReplaced(NormalizedEasing),
    /// The handle coordinates were rewritten.  Carries a copy of the pair
    /// after the update.
    PointsMoved(PointPair),
}

/// Current easing parameters and handle positions of one editor.
///
/// The host creates one per editor instance and hands it to whichever
/// component needs it.
#[derive(Debug, Default)]
pub struct EasingState {
    easing: NormalizedEasing,
    points: PointPair,
    subscribers: Vec<mpsc::SyncSender<StateEvent>>,
}

impl EasingState {
    /// State with the default curve `cubic-bezier(0.76, 0, 0.24, 1)` and
    /// both handles at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// State starting from `easing` instead of the default curve.
    pub fn with_easing(easing: NormalizedEasing) -> Self {
        Self {
            easing,
            ..Self::default()
        }
    }

    //  Accessors

    /// Copy of the current easing tuple.
    pub fn easing(&self) -> NormalizedEasing {
        self.easing
    }

    /// The two handles, index 0 first.
    pub fn points(&self) -> &PointPair {
        &self.points
    }

    /// Register an observer.  Receivers that are dropped are forgotten on
    /// the next notification.
    ///
    /// Each receiver buffers at most [`SUBSCRIBER_CAPACITY`] events; while
    /// it is full, newer events are dropped for that receiver only.
    pub fn subscribe(&mut self) -> mpsc::Receiver<StateEvent> {
        let (tx, rx) = mpsc::sync_channel(SUBSCRIBER_CAPACITY);
        self.subscribers.push(tx);
        rx
    }

    //  Mutation

    /// Derive a new easing tuple from dragged handle positions.
    ///
    /// The y values are flipped (`max - y`) before snapping because screen
    /// y grows downward.  The tuple is replaced as a whole.
    pub fn create_easing(&mut self, handles: HandlePositions, bounds: Bounds) {
        let Bounds { min, max, size } = bounds;
        let easing = NormalizedEasing {
            x1: normalize_easing(handles.x1, min, max, size),
            y1: normalize_easing(max - handles.y1, min, max, size),
            x2: normalize_easing(handles.x2, min, max, size),
            y2: normalize_easing(max - handles.y2, min, max, size),
        };
        debug!("create_easing {:?} -> {}", handles, easing);
        self.set_easing(easing);
    }

    /// Replace the easing tuple with one set from outside the canvas.
    pub fn set_easing(&mut self, easing: NormalizedEasing) {
        self.easing = easing;
        self.notify(StateEvent::EasingReplaced(easing));
    }

    /// Place the handles from curve-space values.
    ///
    /// Each coordinate is written into the existing pair; the points are
    /// never swapped or reordered.
    pub fn transform_coordinate(&mut self, params: CurveParams, bounds: Bounds) {
        let Bounds { min, max, size } = bounds;
        let [first, second] = &mut self.points;
        first.x = normalize_point(params.x1, min, max, size);
        first.y = normalize_point(params.x2, min, max, size);
        second.x = normalize_point(params.x3, min, max, size);
        second.y = normalize_point(params.x4, min, max, size);
        debug!("transform_coordinate {:?} -> {:?}", params, self.points);
        self.notify(StateEvent::PointsMoved(self.points));
    }

    /// Restore the default curve and move both handles back to the origin.
    pub fn reset(&mut self) {
        self.set_easing(NormalizedEasing::default());
        self.points = [ControlPoint::default(); 2];
        self.notify(StateEvent::PointsMoved(self.points));
    }

    fn notify(&mut self, event: StateEvent) {
        self.subscribers.retain(|tx| match tx.try_send(event.clone()) {
            Ok(()) => true,
            Err(mpsc::TrySendError::Full(_)) => {
                warn!("subscriber lagging, dropped {:?}", event);
                true
            }
            Err(mpsc::TrySendError::Disconnected(_)) => false,
        });
    }
}

//  Tests
