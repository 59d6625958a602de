//! The orchestrator that ties the editor state and command sources
//! together.
//!
//! [`EasingEditor`] owns one [`EasingState`] and reacts to [`Command`]s by
//! checking the bound they carry and calling the matching state transform.
//! The core transforms themselves never validate; this is the only place
//! where malformed bounds are turned into errors.

use crate::command::{Command, CssArgs, DragArgs, ParamsArgs, PresetArgs};
use crate::easing::{NormalizedEasing, ParseEasingError};
use crate::state::{EasingState, StateEvent};
use crate::transform::{Bounds, BoundsError};
use log::{debug, info};
use std::sync::mpsc;

/// Possible errors from handling a command.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// The command carried an unusable bound.
    #[error("invalid bounds: {0}")]
    Bounds(#[from] BoundsError),
    /// A CSS value could not be parsed.
    #[error("invalid easing: {0}")]
    Parse(#[from] ParseEasingError),
    /// The preset name is not a known CSS keyword.
    #[error("unknown preset {0:?}")]
    UnknownPreset(String),
}

/// Drives one editor instance.
///
/// # Typical usage
///
/// ```
/// use easing_editor::command::Command;
/// use easing_editor::editor::EasingEditor;
/// use easing_editor::state::EasingState;
/// use easing_editor::transform::Bounds;
///
/// let mut editor = EasingEditor::new(EasingState::new());
/// editor.handle(Command::Sync(Bounds::new(0.0, 200.0))).unwrap();
/// assert_eq!(editor.state().points()[0].x, 152.0);
/// ```
pub struct EasingEditor {
    state: EasingState,
}

impl EasingEditor {
    /// Wrap an existing state.  The editor does not synchronize the two
    /// representations on construction.
    pub fn new(state: EasingState) -> Self {
        Self { state }
    }

    /// Shared reference to the underlying state.
    pub fn state(&self) -> &EasingState {
        &self.state
    }

    /// Subscribe to state changes.
    pub fn subscribe(&mut self) -> mpsc::Receiver<StateEvent> {
        self.state.subscribe()
    }

    /// Current easing formatted as CSS.
    pub fn css(&self) -> String {
        self.state.easing().to_css()
    }

    /// Process a single [`Command`].
    ///
    /// The bound is checked before anything is mutated, so a rejected
    /// command leaves the state untouched.
    pub fn handle(&mut self, cmd: Command) -> Result<(), EditorError> {
        if let Some(bounds) = cmd.bounds() {
            bounds.validate()?;
        }
        info!("{}", cmd);

        match cmd {
            Command::Drag(DragArgs { handles, bounds }) => {
                self.state.create_easing(handles, bounds);
            }

            Command::SetParams(ParamsArgs { params, bounds }) => {
                let easing = NormalizedEasing::new(params.x1, params.x2, params.x3, params.x4);
                self.apply_easing(easing, bounds);
            }

            Command::SetCss(CssArgs { value, bounds }) => {
                let easing: NormalizedEasing = value.parse()?;
                self.apply_easing(easing, bounds);
            }

            Command::Preset(PresetArgs { name, bounds }) => {
                let easing = NormalizedEasing::preset(&name)
                    .ok_or(EditorError::UnknownPreset(name))?;
                self.apply_easing(easing, bounds);
            }

            Command::Sync(bounds) => {
                let easing = self.state.easing();
                self.state.transform_coordinate(easing.into(), bounds);
            }

            Command::Reset => self.state.reset(),
        }

        debug!("now {}", self.css());
        Ok(())
    }

    /// Install `easing` and move the handles onto it.
    fn apply_easing(&mut self, easing: NormalizedEasing, bounds: Bounds) {
        self.state.set_easing(easing);
        self.state.transform_coordinate(easing.into(), bounds);
    }
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::ControlPoint;
    use crate::state::{CurveParams, HandlePositions};

    fn editor() -> EasingEditor {
        EasingEditor::new(EasingState::new())
    }

    fn canvas() -> Bounds {
        Bounds::new(0.0, 100.0)
    }

    #[test]
    fn drag_updates_easing_only() {
        let mut ed = editor();
        ed.handle(Command::Drag(DragArgs {
            handles: HandlePositions { x1: 25.0, y1: 25.0, x2: 75.0, y2: 75.0 },
            bounds: canvas(),
        }))
        .unwrap();
        assert_eq!(ed.css(), "cubic-bezier(0.25, 0.75, 0.75, 0.25)");
        assert_eq!(ed.state().points(), &[ControlPoint::default(); 2]);
    }

    #[test]
    fn set_params_updates_both_representations() {
        let mut ed = editor();
        ed.handle(Command::SetParams(ParamsArgs {
            params: CurveParams { x1: 0.25, x2: 0.75, x3: 0.75, x4: 0.25 },
            bounds: canvas(),
        }))
        .unwrap();
        assert_eq!(ed.state().easing(), NormalizedEasing::new(0.25, 0.75, 0.75, 0.25));
        assert_eq!(
            ed.state().points(),
            &[ControlPoint::new(25.0, 75.0), ControlPoint::new(75.0, 25.0)]
        );
    }

    #[test]
    fn set_css_parses_value() {
        let mut ed = editor();
        ed.handle(Command::SetCss(CssArgs {
            value: "cubic-bezier(0.5, 0, 0.5, 1)".into(),
            bounds: canvas(),
        }))
        .unwrap();
        assert_eq!(
            ed.state().points(),
            &[ControlPoint::new(50.0, 100.0), ControlPoint::new(50.0, 0.0)]
        );
    }

    #[test]
    fn bad_css_leaves_state_untouched() {
        let mut ed = editor();
        let err = ed
            .handle(Command::SetCss(CssArgs {
                value: "steps(4)".into(),
                bounds: canvas(),
            }))
            .unwrap_err();
        assert!(matches!(err, EditorError::Parse(_)));
        assert_eq!(ed.state().easing(), NormalizedEasing::default());
    }

    #[test]
    fn non_finite_css_is_rejected() {
        let mut ed = editor();
        let err = ed
            .handle(Command::SetCss(CssArgs {
                value: "cubic-bezier(NaN, inf, 0, 1)".into(),
                bounds: canvas(),
            }))
            .unwrap_err();
        assert!(matches!(err, EditorError::Parse(ParseEasingError::Number(_))));
        assert_eq!(ed.css(), "cubic-bezier(0.76, 0, 0.24, 1)");
        assert_eq!(ed.state().points(), &[ControlPoint::default(); 2]);
    }

    #[test]
    fn preset_applies_keyword() {
        let mut ed = editor();
        ed.handle(Command::Preset(PresetArgs {
            name: "linear".into(),
            bounds: canvas(),
        }))
        .unwrap();
        assert_eq!(ed.css(), "cubic-bezier(0, 0, 1, 1)");
        assert_eq!(
            ed.state().points(),
            &[ControlPoint::new(100.0, 100.0), ControlPoint::new(0.0, 0.0)]
        );
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let mut ed = editor();
        let err = ed
            .handle(Command::Preset(PresetArgs {
                name: "wobble".into(),
                bounds: canvas(),
            }))
            .unwrap_err();
        assert!(matches!(err, EditorError::UnknownPreset(ref n) if n == "wobble"));
    }

    #[test]
    fn zero_size_bound_is_rejected_before_mutation() {
        let mut ed = editor();
        let rx = ed.subscribe();
        let err = ed
            .handle(Command::Sync(Bounds::new(50.0, 50.0)))
            .unwrap_err();
        assert!(matches!(err, EditorError::Bounds(BoundsError::NonPositiveSize(_))));
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[test]
    fn sync_places_handles_for_current_easing() {
        let mut ed = editor();
        ed.handle(Command::Sync(Bounds::new(0.0, 200.0))).unwrap();
        assert_eq!(
            ed.state().points(),
            &[ControlPoint::new(152.0, 200.0), ControlPoint::new(48.0, 0.0)]
        );
    }

    #[test]
    fn reset_after_edits() {
        let mut ed = editor();
        ed.handle(Command::Preset(PresetArgs {
            name: "ease".into(),
            bounds: canvas(),
        }))
        .unwrap();
        ed.handle(Command::Reset).unwrap();
        assert_eq!(ed.css(), "cubic-bezier(0.76, 0, 0.24, 1)");
    }
}
