//! Conversion between curve space and editor pixel space.
//!
//! Curve space is the `[0, 1]` domain of the `cubic-bezier()` parameters.
//! Pixel space is one axis of the editing canvas, described by a
//! [`Bounds`].  The same bound is used for both axes, so the canvas is
//! assumed to be square.
//!
//! Neither direction validates its input.  A zero-sized bound divides by
//! zero and the resulting NaN / infinity is passed through untouched; use
//! [`Bounds::validate`] at the edge of the system if that matters.

use serde::{Deserialize, Serialize};

/// Grid steps per unit when snapping pixel positions back to curve space.
pub const EASING_PRECISION: f64 = 100.0;

/// One axis of the editor canvas in pixels.
///
/// `size` is expected to equal `max - min`.  The transforms never check
/// this; they use whichever value the caller supplied.
///
/// When deserialized, `size` may be omitted and is then derived from
/// `min` and `max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBounds")]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
    pub size: f64,
}

#[derive(Deserialize)]
struct RawBounds {
    min: f64,
    max: f64,
    #[serde(default)]
    size: Option<f64>,
}

impl From<RawBounds> for Bounds {
    fn from(raw: RawBounds) -> Self {
        match raw.size {
            Some(size) => Bounds::with_size(raw.min, raw.max, size),
            None => Bounds::new(raw.min, raw.max),
        }
    }
}

/// Why a [`Bounds`] was rejected by [`Bounds::validate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoundsError {
    #[error("bounds contain a non-finite value: min={min}, max={max}, size={size}")]
    NotFinite { min: f64, max: f64, size: f64 },
    #[error("bounds size must be positive, got {0}")]
    NonPositiveSize(f64),
    #[error("bounds size {size} does not match max - min = {span}")]
    SizeMismatch { size: f64, span: f64 },
}

impl Bounds {
    /// Bounds spanning `min..max`, with `size` derived as `max - min`.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            size: max - min,
        }
    }

    /// Bounds with an explicit `size`, kept verbatim.
    pub fn with_size(min: f64, max: f64, size: f64) -> Self {
        Self { min, max, size }
    }

    /// Check that the bound describes a usable, non-empty axis.
    ///
    /// The size must be finite, positive, and equal to `max - min` within
    /// a relative tolerance of `1e-9`.
    pub fn validate(&self) -> Result<(), BoundsError> {
        if !(self.min.is_finite() && self.max.is_finite() && self.size.is_finite()) {
            return Err(BoundsError::NotFinite {
                min: self.min,
                max: self.max,
                size: self.size,
            });
        }
        if self.size <= 0.0 {
            return Err(BoundsError::NonPositiveSize(self.size));
        }
        let span = self.max - self.min;
        if (span - self.size).abs() > 1e-9 * span.abs().max(1.0) {
            return Err(BoundsError::SizeMismatch {
                size: self.size,
                span,
            });
        }
        Ok(())
    }
}

/// Map a curve-space value into pixel space.
///
/// `0` maps to `max` and `1` maps to `min` (screen y grows downward);
/// anything else is interpolated as `point * size + min`, without
/// clamping.
pub fn normalize_point(point: f64, min: f64, max: f64, size: f64) -> f64 {
    if point == 0.0 {
        return max;
    }
    if point == 1.0 {
        return min;
    }
    point * size + min
}

/// Map a pixel position back into curve space.
///
/// `min` maps to `0` and `max` maps to `1`.  Anything in between is
/// truncated (not rounded) onto a `0.01` grid so sub-pixel jitter does not
/// feed back into the curve.
pub fn normalize_easing(point: f64, min: f64, max: f64, size: f64) -> f64 {
    if point == min {
        return 0.0;
    }
    if point == max {
        return 1.0;
    }
    (EASING_PRECISION * (point - min) / size).floor() / EASING_PRECISION
}

//  Tests
