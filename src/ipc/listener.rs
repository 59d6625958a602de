//! Unix-socket [`CommandSource`] implementation.
//!
//! Binds a Unix stream socket and serves one client at a time.  Each line
//! received is parsed as a JSON-encoded [`Command`]:
//!
//! ```json
//! {"Drag":{"x1":40,"y1":160,"x2":160,"y2":40,"min":0,"max":200}}
//! {"Preset":{"name":"ease-in-out","min":0,"max":200}}
//! "Reset"
//! ```
//!
//! Malformed lines are logged and skipped; they never end the connection.

use crate::command::Command;
use crate::traits::CommandSource;
use log::{debug, error, info, warn};
use std::io::{BufRead, BufReader};
use std::os::unix::net::{UnixListener, UnixStream};
use std::path::{Path, PathBuf};
use std::sync::mpsc;

/// A [`CommandSource`] that listens on a Unix stream socket for
/// newline-delimited JSON commands.
pub struct UnixSocketListener {
    path: PathBuf,
}

/// Errors produced by the Unix socket listener.
#[derive(Debug, thiserror::Error)]
pub enum UnixSocketError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// What happened to a client connection.
enum Served {
    /// The client hung up; keep accepting.
    Disconnected,
    /// The receiving end of the sink is gone; stop listening.
    SinkClosed,
}

impl UnixSocketListener {
    /// Create a new listener for `path`.
    ///
    /// The socket file is created when [`run`](CommandSource::run) is called
    /// and removed when it returns.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The filesystem path of the socket.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse one wire line.  Blank lines yield `None`.
fn parse_line(text: &str) -> Option<Result<Command, serde_json::Error>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(serde_json::from_str(text))
}

fn serve(stream: UnixStream, sink: &mpsc::Sender<Command>) -> Served {
    for line in BufReader::new(stream).lines() {
        let text = match line {
            Ok(text) => text,
            Err(e) => {
                error!("read error: {}", e);
                break;
            }
        };
        match parse_line(&text) {
            None => continue,
            Some(Ok(cmd)) => {
                debug!("received {:?}", cmd);
                if sink.send(cmd).is_err() {
                    return Served::SinkClosed;
                }
            }
            Some(Err(e)) => warn!("bad command: {} ({})", text, e),
        }
    }
    Served::Disconnected
}

impl CommandSource for UnixSocketListener {
    type Error = UnixSocketError;

    /// Bind the socket and start accepting connections.
    ///
    /// Blocks until the sink is closed.  Run it on a dedicated thread.
    fn run(&mut self, sink: mpsc::Sender<Command>) -> Result<(), Self::Error> {
        // Remove stale socket if present.
        let _ = std::fs::remove_file(&self.path);

        let listener = UnixListener::bind(&self.path)?;
        info!("listening on {}", self.path.display());

        for stream in listener.incoming() {
            let stream = match stream {
                Ok(stream) => stream,
                Err(e) => {
                    error!("accept error: {}", e);
                    continue;
                }
            };
            debug!("client connected");
            match serve(stream, &sink) {
                Served::Disconnected => debug!("client disconnected"),
                Served::SinkClosed => {
                    info!("sink closed, shutting down");
                    break;
                }
            }
        }

        let _ = std::fs::remove_file(&self.path);
        Ok(())
    }
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Bounds;
    use std::io::Write;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    /// Monotonic counter to generate unique socket paths per test.
    static TEST_ID: AtomicU32 = AtomicU32::new(0);

    fn tmp_socket_path() -> PathBuf {
        let id = TEST_ID.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!(
            "easing-editor-test-{}-{}.sock",
            std::process::id(),
            id
        ))
    }

    /// Start a listener on a background thread, send `lines`, and collect
    /// whatever commands arrive.
    fn send_lines(lines: &[&str]) -> Vec<Command> {
        let path = tmp_socket_path();
        let listen_path = path.clone();
        let (tx, rx) = mpsc::channel();

        let _handle = std::thread::spawn(move || {
            let mut listener = UnixSocketListener::new(&listen_path);
            let _ = listener.run(tx);
        });

        // Give the listener a moment to bind.
        std::thread::sleep(Duration::from_millis(150));
        {
            let mut stream = UnixStream::connect(&path).expect("connect");
            for line in lines {
                writeln!(stream, "{}", line).unwrap();
            }
            stream.shutdown(std::net::Shutdown::Write).unwrap();
        }
        std::thread::sleep(Duration::from_millis(150));

        let cmds = rx.try_iter().collect();
        let _ = std::fs::remove_file(&path);
        cmds
    }

    #[test]
    fn parse_line_skips_blank() {
        assert!(parse_line("   ").is_none());
        assert!(matches!(parse_line(r#" "Reset" "#), Some(Ok(Command::Reset))));
        assert!(matches!(parse_line("nope"), Some(Err(_))));
    }

    #[test]
    fn commands_arrive_over_socket() {
        let cmds = send_lines(&[
            r#"{"Sync":{"min":0,"max":100}}"#,
            "",
            r#""Reset""#,
        ]);
        assert_eq!(cmds, vec![Command::Sync(Bounds::new(0.0, 100.0)), Command::Reset]);
    }

    #[test]
    fn malformed_json_does_not_crash() {
        let cmds = send_lines(&["not json at all", r#""Reset""#]);
        assert_eq!(cmds, vec![Command::Reset]);
    }
}
