//! Per-tick blend factors and motion rates.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Choreography tuning: how fast live values chase their targets and how
/// the time-driven effects oscillate.
///
/// Blend factors are fractions applied once per tick, so convergence time
/// is frame-rate dependent. That is the installation's original feel and
/// is preserved; only yaw integration is delta-time scaled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Choreography", inline)]
#[serde(default)]
pub struct ChoreographyOptions {
    /// Per-tick blend factor for main-cloud particles.
    #[schemars(title = "Cloud Blend", range(min = 0.005, max = 0.5), extend("step" = 0.005))]
    pub cloud_blend: f32,
    /// Vertical breathing amplitude layered on scattered cloud targets.
    #[schemars(title = "Breathing", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub breathing_amplitude: f32,
    /// Upward flow speed of the spiral band, units per second.
    #[schemars(title = "Spiral Flow", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub spiral_flow_speed: f32,
    /// Extra time-driven rotation of the spiral band, radians per second.
    #[schemars(skip)]
    pub spiral_swirl_rate: f32,
    /// Base of the star twinkle scale factor.
    #[schemars(skip)]
    pub twinkle_base: f32,
    /// Depth of the star twinkle oscillation.
    #[schemars(skip)]
    pub twinkle_depth: f32,
    /// Angular rate of the star twinkle oscillation, radians per second.
    #[schemars(skip)]
    pub twinkle_rate: f32,
    /// Idle yaw rotation of the cloud when no hand is detected, radians
    /// per second.
    #[schemars(title = "Idle Rotation", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub idle_yaw_rate: f32,
    /// Peak yaw velocity commanded by a hand at the viewport edge,
    /// radians per second.
    #[schemars(title = "Hand Rotation", range(min = 0.0, max = 4.0), extend("step" = 0.05))]
    pub hand_yaw_gain: f32,
    /// Per-tick blend factor steering yaw velocity toward the hand
    /// direction (momentum-like turning, not an absolute angle).
    #[schemars(skip)]
    pub yaw_steer_blend: f32,
}

impl ChoreographyOptions {
    /// Per-tick blend factor for star-cluster particles: double the
    /// cloud's, so the star assembles and dissolves ahead of the cloud.
    #[must_use]
    pub fn star_blend(&self) -> f32 {
        self.cloud_blend * 2.0
    }
}

impl Default for ChoreographyOptions {
    fn default() -> Self {
        Self {
            cloud_blend: 0.045,
            breathing_amplitude: 0.35,
            spiral_flow_speed: 2.4,
            spiral_swirl_rate: 0.8,
            twinkle_base: 0.8,
            twinkle_depth: 0.2,
            twinkle_rate: 3.0,
            idle_yaw_rate: 0.12,
            hand_yaw_gain: 0.9,
            yaw_steer_blend: 0.04,
        }
    }
}
