//! Particle counts and formation geometry.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Counts and geometric constants for the three particle families.
///
/// All values are fixed for the session; changing them requires
/// regenerating the scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Formation", inline)]
#[serde(default)]
pub struct FormationOptions {
    /// Number of particles in the main cloud.
    #[schemars(title = "Cloud Particles", range(min = 100, max = 20000))]
    pub cloud_count: usize,
    /// Number of particles in the spiral band.
    #[schemars(title = "Spiral Particles", range(min = 0, max = 2000))]
    pub spiral_count: usize,
    /// Number of particles in the star cluster.
    #[schemars(title = "Star Particles", range(min = 0, max = 1000))]
    pub star_count: usize,
    /// Vertical span of the tree cone.
    #[schemars(title = "Tree Height", range(min = 4.0, max = 60.0))]
    pub tree_height: f32,
    /// Base radius of the tree cone.
    #[schemars(title = "Tree Radius", range(min = 1.0, max = 30.0))]
    pub tree_radius: f32,
    /// Radius of the scattered-formation sphere.
    #[schemars(title = "Scatter Radius", range(min = 5.0, max = 80.0))]
    pub scatter_radius: f32,
    /// Number of full turns the spiral band makes over the tree span.
    #[schemars(skip)]
    pub spiral_turns: f32,
    /// Radial multiplier keeping the band slightly outside the cone.
    #[schemars(skip)]
    pub spiral_radius_scale: f32,
    /// Constant radial offset added to the band.
    #[schemars(skip)]
    pub spiral_radius_offset: f32,
    /// Outer point radius of the star silhouette.
    #[schemars(skip)]
    pub star_outer_radius: f32,
    /// Inner valley radius of the star silhouette.
    #[schemars(skip)]
    pub star_inner_radius: f32,
    /// Per-particle jitter applied to star radii.
    #[schemars(skip)]
    pub star_jitter: f32,
    /// Radius of the star's scattered cloud.
    #[schemars(skip)]
    pub star_scatter_radius: f32,
    /// Upward bias of the star's scattered cloud, so scattering reads as
    /// the star dissolving skyward.
    #[schemars(skip)]
    pub star_scatter_lift: f32,
    /// Probability that a cloud particle is assigned the accent color.
    #[schemars(title = "Accent Ratio", range(min = 0.0, max = 1.0))]
    pub accent_ratio: f32,
}

impl FormationOptions {
    /// Half the tree's vertical span.
    #[must_use]
    pub fn half_height(&self) -> f32 {
        self.tree_height * 0.5
    }

    /// Y coordinate of the tree apex, where the star cluster assembles.
    #[must_use]
    pub fn apex_height(&self) -> f32 {
        self.half_height()
    }
}

impl Default for FormationOptions {
    fn default() -> Self {
        Self {
            cloud_count: 2400,
            spiral_count: 320,
            star_count: 140,
            tree_height: 18.0,
            tree_radius: 7.0,
            scatter_radius: 24.0,
            spiral_turns: 6.0,
            spiral_radius_scale: 1.15,
            spiral_radius_offset: 0.4,
            star_outer_radius: 2.2,
            star_inner_radius: 0.9,
            star_jitter: 0.25,
            star_scatter_radius: 30.0,
            star_scatter_lift: 8.0,
            accent_ratio: 0.1,
        }
    }
}
