//! Application configuration.
//!
//! The configuration is loaded from a JSON file.  The top-level schema uses
//! an `"editor"` key so the file can be extended with additional sections
//! later without breaking backward compatibility.
//!
//! # Example
//!
//! ```json
//! {
//!   "editor": {
//!     "initial_easing": [0.42, 0, 0.58, 1],
//!     "bounds": { "min": 0, "max": 300 }
//!   }
//! }
//! ```

use crate::easing::NormalizedEasing;
use crate::transform::Bounds;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
///
/// Every field is optional; a minimal `{}` file is valid and all sections
/// fall back to their compiled-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Editor start-up settings.
    #[serde(default)]
    pub editor: EditorConfig,
}

/// Initial curve and canvas geometry of the editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Curve shown before the user touches anything.
    pub initial_easing: NormalizedEasing,
    /// Canvas bound used to place the handles for the initial curve.
    pub bounds: Bounds,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_easing: NormalizedEasing::default(),
            bounds: Bounds::new(0.0, 200.0),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        config
            .editor
            .bounds
            .validate()
            .map_err(|e| ConfigError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
