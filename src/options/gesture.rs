//! Gesture classification thresholds.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Distance thresholds (in normalized landmark space) for gesture
/// classification.
///
/// Values between `closed_threshold` and `open_threshold` form a dead
/// zone: neither gesture nor mode changes there. The dead zone carries no
/// temporal smoothing; classifier noise near a boundary can flicker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Gesture", inline)]
#[serde(default)]
pub struct GestureOptions {
    /// Average wrist-to-fingertip distance below which the hand reads as
    /// closed (fist).
    #[schemars(title = "Closed Threshold", range(min = 0.05, max = 0.5), extend("step" = 0.01))]
    pub closed_threshold: f32,
    /// Average wrist-to-fingertip distance above which the hand reads as
    /// open.
    #[schemars(title = "Open Threshold", range(min = 0.1, max = 0.8), extend("step" = 0.01))]
    pub open_threshold: f32,
    /// Thumb-tip to index-tip distance below which a pinch registers.
    #[schemars(title = "Pinch Threshold", range(min = 0.01, max = 0.2), extend("step" = 0.005))]
    pub pinch_threshold: f32,
    /// Minimum blended overlay opacity before a pinch may start video
    /// playback.
    #[schemars(title = "Playback Gate", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub playback_opacity_gate: f32,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            closed_threshold: 0.25,
            open_threshold: 0.35,
            pinch_threshold: 0.05,
            playback_opacity_gate: 0.8,
        }
    }
}
