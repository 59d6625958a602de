//! Entry point for the **easing-editor** daemon.
//!
//! Listens for JSON commands on a Unix socket, applies them to a single
//! editor instance on the main thread, and logs every resulting change.

use easing_editor::command::Command;
use easing_editor::config::Config;
use easing_editor::editor::EasingEditor;
use easing_editor::ipc::listener::UnixSocketListener;
use easing_editor::state::{EasingState, StateEvent};
use easing_editor::traits::CommandSource;
use log::{error, info};
use std::sync::mpsc;

/// Default socket path for the command listener.
fn default_socket_path() -> String {
    let runtime = std::env::var("XDG_RUNTIME_DIR").unwrap_or_else(|_| "/tmp".into());
    format!("{}/easing-editor.sock", runtime)
}

/// Resolve the config directory (`$XDG_CONFIG_HOME/easing-editor`).
fn config_dir() -> std::path::PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    std::path::PathBuf::from(base).join("easing-editor")
}

/// Load `$XDG_CONFIG_HOME/easing-editor/config.json`, falling back to
/// compiled-in defaults.
fn load_config() -> Config {
    let path = config_dir().join("config.json");
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            info!("no usable config file ({}), using defaults", e);
            Config::default()
        }
    }
}

fn main() {
    env_logger::init();

    let config = load_config();
    let mut editor = EasingEditor::new(EasingState::with_easing(config.editor.initial_easing));
    spawn_change_logger(editor.subscribe());

    if let Err(e) = editor.handle(Command::Sync(config.editor.bounds)) {
        error!("initial sync failed: {}", e);
    }

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
    spawn_command_source(cmd_tx);

    info!("easing-editor running, {}", editor.css());
    for cmd in cmd_rx {
        if let Err(e) = editor.handle(cmd) {
            error!("command error: {}", e);
        }
    }
    info!("command source closed, exiting");
}

/// Log every state change as it happens.
fn spawn_change_logger(events: mpsc::Receiver<StateEvent>) {
    std::thread::spawn(move || {
        for event in events {
            match event {
                StateEvent::EasingReplaced(easing) => info!("easing: {}", easing),
                StateEvent::PointsMoved([p0, p1]) => {
                    info!("handles: ({}, {}) ({}, {})", p0.x, p0.y, p1.x, p1.y)
                }
            }
        }
    });
}

fn spawn_command_source(tx: mpsc::Sender<Command>) {
    let path = default_socket_path();
    std::thread::spawn(move || {
        let mut source = UnixSocketListener::new(&path);
        if let Err(e) = source.run(tx) {
            error!("socket listener error: {}", e);
        }
    });
}
