//! **easing-editor** — the normalization core of a cubic-bezier easing
//! editor.
//!
//! An easing curve has two representations:
//!
//! * the four `cubic-bezier(x1, y1, x2, y2)` parameters in `[0, 1]`
//!   ([`easing::NormalizedEasing`]), and
//! * two draggable handles in canvas pixels ([`easing::PointPair`]).
//!
//! [`transform`] converts single values between the two spaces.
//! [`state::EasingState`] holds both representations for one editor and
//! notifies subscribers whenever either changes.
//!
//! # Architecture
//!
//! The host constructs one [`state::EasingState`] per editor and wraps it
//! in an [`editor::EasingEditor`], which validates and dispatches
//! [`command::Command`]s.  Commands arrive through any
//! [`traits::CommandSource`]; the [`ipc`] module provides a Unix-socket
//! implementation.

pub mod bezier;
pub mod command;
pub mod config;
pub mod easing;
pub mod editor;
pub mod ipc;
pub mod state;
pub mod traits;
pub mod transform;
