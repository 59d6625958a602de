//! Value types shared by the editor: the normalized easing tuple and the
//! pixel-space control points.
//!
//! [`NormalizedEasing`] is the literal parameter list of CSS
//! `cubic-bezier(x1, y1, x2, y2)`.  It is `Copy`, so a snapshot taken by an
//! observer never changes when the editor installs a new tuple.

use crate::bezier::TimingCurve;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four `cubic-bezier()` parameters in curve space.
///
/// Components are expected to lie in `[0, 1]` but are not validated; the
/// y components may legitimately overshoot for bouncy curves.
///
/// Serialized as a 4-element array in parameter order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct NormalizedEasing {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Default for NormalizedEasing {
    fn default() -> Self {
        Self::new(0.76, 0.0, 0.24, 1.0)
    }
}

impl From<[f64; 4]> for NormalizedEasing {
    fn from([x1, y1, x2, y2]: [f64; 4]) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl From<NormalizedEasing> for [f64; 4] {
    fn from(e: NormalizedEasing) -> Self {
        e.to_array()
    }
}

impl NormalizedEasing {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Parameters in `cubic-bezier()` order.
    pub fn to_array(self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Look up one of the CSS keyword timing functions.
    ///
    /// Accepts `linear`, `ease`, `ease-in`, `ease-out` and `ease-in-out`
    /// (case-insensitive, `_` accepted in place of `-`).
    pub fn preset(name: &str) -> Option<Self> {
        let normalized: String = name
            .trim()
            .chars()
            .map(|c| if c == '_' { '-' } else { c })
            .flat_map(|c| c.to_lowercase())
            .collect();
        let e = match normalized.as_str() {
            "linear" => Self::new(0.0, 0.0, 1.0, 1.0),
            "ease" => Self::new(0.25, 0.1, 0.25, 1.0),
            "ease-in" => Self::new(0.42, 0.0, 1.0, 1.0),
            "ease-out" => Self::new(0.0, 0.0, 0.58, 1.0),
            "ease-in-out" => Self::new(0.42, 0.0, 0.58, 1.0),
            _ => return None,
        };
        Some(e)
    }

    /// Format as a CSS timing function, e.g. `cubic-bezier(0.76, 0, 0.24, 1)`.
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    /// Eased progress at normalized time `u`.
    pub fn sample(&self, u: f64) -> f64 {
        TimingCurve::new(self.x1, self.y1, self.x2, self.y2).sample(u)
    }

    /// Interpolate between two scalars along this curve.
    pub fn interpolate(&self, a: f64, b: f64, u: f64) -> f64 {
        a + (b - a) * self.sample(u)
    }
}

impl fmt::Display for NormalizedEasing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// Error from parsing a `cubic-bezier(...)` string.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseEasingError {
    #[error("expected cubic-bezier(x1, y1, x2, y2), got {0:?}")]
    Syntax(String),
    #[error("expected 4 parameters, got {0}")]
    Arity(usize),
    #[error("invalid number {0:?}")]
    Number(String),
}

impl FromStr for NormalizedEasing {
    type Err = ParseEasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix("cubic-bezier")
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('('))
            .and_then(|rest| rest.trim_end().strip_suffix(')'))
            .ok_or_else(|| ParseEasingError::Syntax(s.to_string()))?;

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(ParseEasingError::Arity(parts.len()));
        }
        let mut values = [0.0; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ParseEasingError::Number(part.to_string()))?;
        }
        Ok(Self::from(values))
    }
}

/// A draggable handle position in editor pixel space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub x: f64,
    pub y: f64,
}

impl ControlPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The two editor handles.  Index 0 is the first control point.
pub type PointPair = [ControlPoint; 2];
