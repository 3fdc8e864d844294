//! The prepared frame handed to the renderer each tick.
//!
//! The renderer is an external collaborator: it accepts one
//! [`RenderFrame`] per tick through the [`FrameSink`] seam and produces
//! pixels however it likes (point sprites, bloom, compositing). Resize
//! notifications travel through the same seam so the renderer can keep
//! its aspect ratio correct.

use glam::{Quat, Vec3};

/// One particle family's draw data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    /// World-space particle positions.
    pub positions: Vec<Vec3>,
    /// RGB color per particle.
    pub colors: Vec<[f32; 3]>,
    /// Point sprite scale shared by the set.
    pub size: f32,
    /// Material opacity shared by the set.
    pub opacity: f32,
}

/// The video plane's draw data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayPose {
    /// World-space center of the plane.
    pub position: Vec3,
    /// Orientation facing the viewpoint.
    pub orientation: Quat,
    /// Uniform scale.
    pub scale: f32,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
    /// Brightness multiplier.
    pub brightness: f32,
}

/// Everything the renderer needs for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// Main cloud draw data.
    pub cloud: PointSet,
    /// Spiral band draw data.
    pub spiral: PointSet,
    /// Star cluster draw data (size already twinkle-scaled).
    pub star: PointSet,
    /// Yaw rotation of the main cloud, radians.
    pub yaw: f32,
    /// Bloom post-processing intensity.
    pub bloom_intensity: f32,
    /// Video plane pose and appearance.
    pub overlay: OverlayPose,
}

/// Renderer seam: consumes prepared frames and viewport changes.
pub trait FrameSink {
    /// Draw one prepared frame. Called once per tick.
    fn submit(&mut self, frame: &RenderFrame);

    /// Forward a viewport dimension change.
    fn resize(&mut self, width: u32, height: u32);
}
