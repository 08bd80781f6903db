//! Tunable input and scheduling configuration
//!
//! Defaults come from the canonical constants; an optional JSON file
//! (pointed at by `PULSE_RING_SETTINGS`) overrides individual fields.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts::*;

/// Runtime-tunable knobs; everything the algorithms treat as a constant
/// stays in [`crate::consts`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Squared-magnitude deadzone for the left stick
    pub left_deadzone_sq: f32,
    /// Squared-magnitude deadzone for the right stick
    pub right_deadzone_sq: f32,
    /// Simulation tick period (ms)
    pub sim_period_ms: f32,
    /// Render tick period for the native demo loop (ms)
    pub render_period_ms: f32,
    /// Log per-frame score/rate readouts
    pub show_rate: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            left_deadzone_sq: LEFT_DEADZONE_SQ,
            right_deadzone_sq: RIGHT_DEADZONE_SQ,
            sim_period_ms: SIM_PERIOD_MS,
            render_period_ms: RENDER_PERIOD_MS,
            show_rate: true,
        }
    }
}

impl Settings {
    /// Load settings from the `PULSE_RING_SETTINGS` JSON file, if any.
    ///
    /// A missing variable, unreadable file, or malformed document falls
    /// back to defaults.
    pub fn load() -> Self {
        let Some(path) = std::env::var_os("PULSE_RING_SETTINGS") else {
            return Self::default();
        };
        Self::from_file(Path::new(&path))
    }

    fn from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed settings {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("ignoring unreadable settings {}: {err}", path.display());
                Self::default()
            }
        }
    }
}
