//! Point sizes and palette colors.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Colors and point-sprite sizes for the particle families.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
pub struct DisplayOptions {
    /// Base color of the main cloud (90% of particles).
    #[schemars(skip)]
    pub base_color: [f32; 3],
    /// Accent color of the main cloud (10% of particles).
    #[schemars(skip)]
    pub accent_color: [f32; 3],
    /// Color of the spiral band.
    #[schemars(skip)]
    pub spiral_color: [f32; 3],
    /// Color of the star cluster.
    #[schemars(skip)]
    pub star_color: [f32; 3],
    /// Point sprite size for the main cloud.
    #[schemars(title = "Cloud Size", range(min = 0.1, max = 8.0), extend("step" = 0.1))]
    pub cloud_point_size: f32,
    /// Point sprite size for the spiral band.
    #[schemars(title = "Spiral Size", range(min = 0.1, max = 8.0), extend("step" = 0.1))]
    pub spiral_point_size: f32,
    /// Point sprite size for the star cluster before twinkle scaling.
    #[schemars(title = "Star Size", range(min = 0.1, max = 8.0), extend("step" = 0.1))]
    pub star_point_size: f32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            base_color: [0.45, 0.78, 0.55],
            accent_color: [1.0, 0.84, 0.38],
            spiral_color: [0.95, 0.9, 0.7],
            star_color: [1.0, 0.97, 0.8],
            cloud_point_size: 1.0,
            spiral_point_size: 0.8,
            star_point_size: 1.6,
        }
    }
}
