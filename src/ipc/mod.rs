//! IPC listener that accepts editor commands over a Unix socket.
//!
//! A host UI (or a script) connects to the socket and sends
//! newline-delimited JSON commands.

pub mod listener;
