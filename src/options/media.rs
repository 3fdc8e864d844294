//! Video overlay, audio, and stall-detection behavior.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Media synchronization tuning: overlay pop-in, audio ducking, dimming,
/// and the advisory stall heuristic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Media", inline)]
#[serde(default)]
pub struct MediaOptions {
    /// Nominal background audio level while video is not playing.
    #[schemars(title = "Audio Level", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub nominal_volume: f32,
    /// Per-tick blend step for audio volume changes.
    #[schemars(skip)]
    pub volume_step: f32,
    /// Per-tick blend factor for particle/bloom dimming while video plays.
    #[schemars(skip)]
    pub dim_blend: f32,
    /// Particle material opacity with no video playing.
    #[schemars(title = "Particle Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub particle_opacity: f32,
    /// Particle material opacity while video plays.
    #[schemars(skip)]
    pub dimmed_particle_opacity: f32,
    /// Bloom intensity with no video playing.
    #[schemars(title = "Bloom", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub bloom_intensity: f32,
    /// Bloom intensity while video plays.
    #[schemars(skip)]
    pub dimmed_bloom_intensity: f32,
    /// Per-tick blend factor for overlay opacity.
    #[schemars(skip)]
    pub overlay_opacity_blend: f32,
    /// Per-tick blend factor for overlay scale (the pop-in feel).
    #[schemars(skip)]
    pub overlay_scale_blend: f32,
    /// Overlay scale when shown (scatter mode).
    #[schemars(title = "Overlay Scale", range(min = 1.0, max = 20.0), extend("step" = 0.5))]
    pub overlay_scale: f32,
    /// Overlay scale when hidden.
    #[schemars(skip)]
    pub overlay_hidden_scale: f32,
    /// Per-tick blend factor for overlay brightness.
    #[schemars(skip)]
    pub overlay_brightness_blend: f32,
    /// Overlay brightness while video plays (dimmed).
    #[schemars(skip)]
    pub overlay_dim_brightness: f32,
    /// Per-tick blend factor for overlay depth.
    #[schemars(skip)]
    pub overlay_depth_blend: f32,
    /// Overlay depth when shown: in front of / interleaved with particles.
    #[schemars(skip)]
    pub overlay_near_depth: f32,
    /// Overlay depth when hidden: visually behind the particles.
    #[schemars(skip)]
    pub overlay_far_depth: f32,
    /// Height of the overlay plane's center.
    #[schemars(skip)]
    pub overlay_height: f32,
    /// Viewpoint the overlay billboards toward each tick.
    #[schemars(skip)]
    pub viewpoint: [f32; 3],
    /// Wall-clock window without playback-time progress before the
    /// buffering diagnostic raises, milliseconds.
    #[schemars(skip)]
    pub stall_timeout_ms: u64,
    /// Minimum playback-time progress that counts as advancement, seconds.
    #[schemars(skip)]
    pub stall_epsilon: f64,
}

impl Default for MediaOptions {
    fn default() -> Self {
        Self {
            nominal_volume: 0.35,
            volume_step: 0.05,
            dim_blend: 0.08,
            particle_opacity: 0.9,
            dimmed_particle_opacity: 0.25,
            bloom_intensity: 1.3,
            dimmed_bloom_intensity: 0.35,
            overlay_opacity_blend: 0.08,
            overlay_scale_blend: 0.12,
            overlay_scale: 6.5,
            overlay_hidden_scale: 0.01,
            overlay_brightness_blend: 0.1,
            overlay_dim_brightness: 0.6,
            overlay_depth_blend: 0.05,
            overlay_near_depth: 4.0,
            overlay_far_depth: -12.0,
            overlay_height: 2.0,
            viewpoint: [0.0, 2.0, 30.0],
            stall_timeout_ms: 750,
            stall_epsilon: 0.01,
        }
    }
}
