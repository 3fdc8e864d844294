//! Centralized installation options with TOML preset support.
//!
//! All tweakable constants (formation geometry, gesture thresholds,
//! choreography blend factors, media/overlay behavior, display palette)
//! are consolidated here. Options serialize to/from TOML for installation
//! presets stored alongside the host application.

mod choreography;
mod display;
mod formation;
mod gesture;
mod media;

use std::path::Path;

pub use choreography::ChoreographyOptions;
pub use display::DisplayOptions;
pub use formation::FormationOptions;
pub use gesture::GestureOptions;
pub use media::MediaOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ArboError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[gesture]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Particle counts and formation geometry.
    pub formation: FormationOptions,
    /// Point sizes and palette colors.
    pub display: DisplayOptions,
    /// Gesture classification thresholds.
    pub gesture: GestureOptions,
    /// Per-tick blend factors and motion rates.
    pub choreography: ChoreographyOptions,
    /// Video overlay, audio, and stall-detection behavior.
    pub media: MediaOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ArboError::Io`] when the file cannot be read and
    /// [`ArboError::OptionsParse`] when it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, ArboError> {
        let content = std::fs::read_to_string(path).map_err(ArboError::Io)?;
        toml::from_str(&content)
            .map_err(|e| ArboError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`ArboError::OptionsParse`] when serialization fails and
    /// [`ArboError::Io`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ArboError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ArboError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ArboError::Io)?;
        }
        std::fs::write(path, content).map_err(ArboError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
