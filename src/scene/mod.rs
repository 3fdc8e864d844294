//! Authoritative scene: the three particle families, the video overlay,
//! and the globally blended visual parameters.
//!
//! Target tables are generated once here at startup; the engine tick
//! mutates only live positions and the blended parameters.

mod family;
mod frame;
mod overlay;

pub use family::ParticleFamily;
pub use frame::{FrameSink, OverlayPose, PointSet, RenderFrame};
use glam::Vec3;
pub use overlay::VideoOverlay;
use rand::Rng;

use crate::formation::{scatter, spiral, star, tree, SpiralParams};
use crate::options::{DisplayOptions, Options};

/// The scene graph the engine owns: three point-set families plus one
/// textured plane.
#[derive(Debug, Clone)]
pub struct InstallationScene {
    /// Main cloud particles.
    pub(crate) cloud: ParticleFamily,
    /// Palette index per cloud particle (0 = base, 1 = accent), fixed at
    /// construction.
    pub(crate) cloud_palette: Vec<u8>,
    /// Spiral band particles.
    pub(crate) spiral: ParticleFamily,
    /// Star cluster particles.
    pub(crate) star: ParticleFamily,
    /// Twinkle scale multiplier applied to the star point size.
    pub(crate) star_scale: f32,
    /// Video overlay plane.
    pub(crate) overlay: VideoOverlay,
    /// Yaw rotation of the main cloud, radians.
    pub(crate) yaw: f32,
    /// Blended particle material opacity.
    pub(crate) particle_opacity: f32,
    /// Blended bloom intensity.
    pub(crate) bloom_intensity: f32,
}

impl InstallationScene {
    /// Generate all formation tables and assemble the scene.
    ///
    /// Sampling uses `rng`, so positions vary run to run; that is the
    /// installation's intended behavior.
    pub fn generate(options: &Options, rng: &mut impl Rng) -> Self {
        let f = &options.formation;

        let cloud = ParticleFamily::new(
            tree::generate(f.cloud_count, f.tree_height, f.tree_radius, rng),
            scatter::generate(f.cloud_count, f.scatter_radius, rng),
        );
        let cloud_palette = (0..f.cloud_count)
            .map(|_| u8::from(rng.random::<f32>() < f.accent_ratio))
            .collect();

        let params = SpiralParams::from_options(f);
        let spiral = ParticleFamily::new(
            spiral::generate_helix(f.spiral_count, &params),
            scatter::generate(f.spiral_count, f.scatter_radius, rng),
        );

        let apex = Vec3::new(0.0, f.apex_height(), 0.0);
        let star = ParticleFamily::new(
            star::generate_outline(
                f.star_count,
                f.star_outer_radius,
                f.star_inner_radius,
                f.star_jitter,
                apex,
                rng,
            ),
            star::generate_scatter(
                f.star_count,
                f.star_scatter_radius,
                f.star_scatter_lift,
                rng,
            ),
        );

        log::debug!(
            "scene generated: {} cloud, {} spiral, {} star particles",
            cloud.len(),
            spiral.len(),
            star.len()
        );

        Self {
            cloud,
            cloud_palette,
            spiral,
            star,
            star_scale: 1.0,
            overlay: VideoOverlay::new(&options.media),
            yaw: 0.0,
            particle_opacity: options.media.particle_opacity,
            bloom_intensity: options.media.bloom_intensity,
        }
    }

    /// Main cloud particles.
    #[must_use]
    pub fn cloud(&self) -> &ParticleFamily {
        &self.cloud
    }

    /// Spiral band particles.
    #[must_use]
    pub fn spiral(&self) -> &ParticleFamily {
        &self.spiral
    }

    /// Star cluster particles.
    #[must_use]
    pub fn star(&self) -> &ParticleFamily {
        &self.star
    }

    /// Video overlay pose.
    #[must_use]
    pub fn overlay(&self) -> &VideoOverlay {
        &self.overlay
    }

    /// Main-cloud yaw rotation, radians.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Blended particle material opacity.
    #[must_use]
    pub fn particle_opacity(&self) -> f32 {
        self.particle_opacity
    }

    /// Blended bloom intensity.
    #[must_use]
    pub fn bloom_intensity(&self) -> f32 {
        self.bloom_intensity
    }

    /// Current star twinkle scale.
    #[must_use]
    pub fn star_scale(&self) -> f32 {
        self.star_scale
    }

    /// Prepare the frame for the renderer.
    #[must_use]
    pub fn build_frame(&self, display: &DisplayOptions) -> RenderFrame {
        let cloud_colors = self
            .cloud_palette
            .iter()
            .map(|&idx| {
                if idx == 0 {
                    display.base_color
                } else {
                    display.accent_color
                }
            })
            .collect();

        RenderFrame {
            cloud: PointSet {
                positions: self.cloud.live().to_vec(),
                colors: cloud_colors,
                size: display.cloud_point_size,
                opacity: self.particle_opacity,
            },
            spiral: PointSet {
                positions: self.spiral.live().to_vec(),
                colors: vec![display.spiral_color; self.spiral.len()],
                size: display.spiral_point_size,
                opacity: self.particle_opacity,
            },
            star: PointSet {
                positions: self.star.live().to_vec(),
                colors: vec![display.star_color; self.star.len()],
                size: display.star_point_size * self.star_scale,
                opacity: self.particle_opacity,
            },
            yaw: self.yaw,
            bloom_intensity: self.bloom_intensity,
            overlay: OverlayPose {
                position: self.overlay.position(),
                orientation: self.overlay.orientation,
                scale: self.overlay.scale,
                opacity: self.overlay.opacity,
                brightness: self.overlay.brightness,
            },
        }
    }
}
