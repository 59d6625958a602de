//! Commands a host sends to drive the editor.
//!
//! Every command that touches pixel space carries its own bound, flattened
//! into the same JSON object as the coordinates:
//!
//! ```json
//! {"Drag":{"x1":25,"y1":25,"x2":75,"y2":75,"min":0,"max":100,"size":100}}
//! {"SetParams":{"x1":0.25,"x2":0.1,"x3":0.25,"x4":1,"min":0,"max":100}}
//! {"SetCss":{"value":"cubic-bezier(0.42, 0, 0.58, 1)","min":0,"max":100}}
//! {"Preset":{"name":"ease-out","min":0,"max":100}}
//! {"Sync":{"min":0,"max":100}}
//! "Reset"
//! ```
//!
//! `size` may be omitted, in which case it is `max - min`.

use crate::state::{CurveParams, HandlePositions};
use crate::transform::Bounds;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A handle drag on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragArgs {
    #[serde(flatten)]
    pub handles: HandlePositions,
    #[serde(flatten)]
    pub bounds: Bounds,
}

/// Curve parameters entered outside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamsArgs {
    #[serde(flatten)]
    pub params: CurveParams,
    #[serde(flatten)]
    pub bounds: Bounds,
}

/// A `cubic-bezier(...)` string, e.g. typed into a text field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CssArgs {
    pub value: String,
    #[serde(flatten)]
    pub bounds: Bounds,
}

/// A named CSS timing keyword, e.g. picked from a preset list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetArgs {
    pub name: String,
    #[serde(flatten)]
    pub bounds: Bounds,
}

/// Every action the editor can perform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Handles were dragged; derive the easing from pixel positions.
    Drag(DragArgs),
    /// Set the easing from four numbers and move the handles to match.
    SetParams(ParamsArgs),
    /// Like [`SetParams`](Command::SetParams), parsed from CSS.
    SetCss(CssArgs),
    /// Like [`SetParams`](Command::SetParams), from a keyword preset.
    Preset(PresetArgs),
    /// Move the handles to match the current easing.
    Sync(Bounds),
    /// Restore the default curve and handle positions.
    Reset,
}

impl Command {
    /// The bound carried by this command, if any.
    pub fn bounds(&self) -> Option<&Bounds> {
        match self {
            Command::Drag(a) => Some(&a.bounds),
            Command::SetParams(a) => Some(&a.bounds),
            Command::SetCss(a) => Some(&a.bounds),
            Command::Preset(a) => Some(&a.bounds),
            Command::Sync(b) => Some(b),
            Command::Reset => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Drag(_) => write!(f, "drag"),
            Command::SetParams(_) => write!(f, "set-params"),
            Command::SetCss(a) => write!(f, "set-css {:?}", a.value),
            Command::Preset(a) => write!(f, "preset {}", a.name),
            Command::Sync(_) => write!(f, "sync"),
            Command::Reset => write!(f, "reset"),
        }
    }
}

//  Tests
