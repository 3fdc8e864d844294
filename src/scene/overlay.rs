//! The video overlay plane's blended pose.

use glam::{Quat, Vec3};

use crate::options::MediaOptions;

/// Pose and appearance of the textured video plane.
///
/// All fields are blended toward mode-dependent targets by the engine
/// tick; the overlay itself holds no targets.
#[derive(Debug, Clone, Copy)]
pub struct VideoOverlay {
    /// Blended opacity in `[0, 1]`.
    pub opacity: f32,
    /// Blended uniform scale.
    pub scale: f32,
    /// Blended brightness multiplier.
    pub brightness: f32,
    /// Blended depth (Z position): far while hidden, near while shown.
    pub depth: f32,
    /// Height of the plane's center.
    pub height: f32,
    /// Orientation facing the viewpoint.
    pub orientation: Quat,
}

impl VideoOverlay {
    /// Hidden overlay: transparent, shrunk, parked at the far depth.
    #[must_use]
    pub fn new(options: &MediaOptions) -> Self {
        Self {
            opacity: 0.0,
            scale: options.overlay_hidden_scale,
            brightness: 1.0,
            depth: options.overlay_far_depth,
            height: options.overlay_height,
            orientation: Quat::IDENTITY,
        }
    }

    /// World-space center of the plane.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::new(0.0, self.height, self.depth)
    }

    /// Turn the plane to face `viewpoint`.
    ///
    /// Keeps the previous orientation when the viewpoint coincides with
    /// the plane center.
    pub fn orient_toward(&mut self, viewpoint: Vec3) {
        let dir = (viewpoint - self.position()).normalize_or_zero();
        if dir != Vec3::ZERO {
            self.orientation = Quat::from_rotation_arc(Vec3::Z, dir);
        }
    }
}
