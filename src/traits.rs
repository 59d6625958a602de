//! Core trait that decouples the editor from the transport delivering its
//! commands.
//!
//! The [`EasingEditor`](crate::editor::EasingEditor) never knows where a
//! [`Command`] came from: a Unix socket, a host UI thread, or a test
//! harness all look the same.

use crate::command::Command;
use std::sync::mpsc;

/// A source of [`Command`]s.
///
/// Implementations listen on some transport and forward parsed commands
/// into the provided [`mpsc::Sender`].
///
/// # Contract
///
/// * [`run`](CommandSource::run) **blocks** until the source is exhausted or
///   an unrecoverable error occurs.
/// * Each received command must be sent through `sink` exactly once.
/// * Implementations must be [`Send`] so they can run on a dedicated thread.
pub trait CommandSource: Send {
    /// The error type produced by this source.
    type Error: std::error::Error + Send + 'static;

    /// Start listening and forward every incoming [`Command`] into `sink`.
    fn run(&mut self, sink: mpsc::Sender<Command>) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EasingEditor;
    use crate::state::EasingState;
    use crate::transform::Bounds;

    #[derive(Debug, thiserror::Error)]
    #[error("mock error")]
    struct MockError;

    /// A test double that emits a fixed sequence of commands.
    struct MockSource {
        commands: Vec<Command>,
    }

    impl CommandSource for MockSource {
        type Error = MockError;

        fn run(&mut self, sink: mpsc::Sender<Command>) -> Result<(), MockError> {
            for cmd in self.commands.drain(..) {
                let _ = sink.send(cmd);
            }
            Ok(())
        }
    }

    #[test]
    fn mock_source_drives_editor() {
        let mut src = MockSource {
            commands: vec![
                Command::Sync(Bounds::new(0.0, 100.0)),
                Command::Reset,
            ],
        };
        let (tx, rx) = mpsc::channel();
        src.run(tx).unwrap();

        let mut editor = EasingEditor::new(EasingState::new());
        let mut handled = 0;
        for cmd in rx {
            editor.handle(cmd).unwrap();
            handled += 1;
        }
        assert_eq!(handled, 2);
        assert_eq!(editor.state().points()[0].x, 0.0);
    }
}
