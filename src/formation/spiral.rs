//! Spiral band: a deterministic helix with an analytic flow animation.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::options::FormationOptions;

/// Geometric parameters of the spiral band's helix.
///
/// The band sits slightly outside the main cone: its radius follows the
/// same shrink-toward-apex rule as tree generation, multiplied by
/// `radius_scale` plus a constant offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralParams {
    /// Vertical span the band cycles through. Must be positive.
    pub height: f32,
    /// Base radius of the underlying tree cone.
    pub radius: f32,
    /// Number of full turns over the vertical span.
    pub turns: f32,
    /// Radial multiplier relative to the cone surface.
    pub radius_scale: f32,
    /// Constant radial offset.
    pub radius_offset: f32,
}

impl SpiralParams {
    /// Band parameters from the formation options.
    #[must_use]
    pub fn from_options(options: &FormationOptions) -> Self {
        Self {
            height: options.tree_height,
            radius: options.tree_radius,
            turns: options.spiral_turns,
            radius_scale: options.spiral_radius_scale,
            radius_offset: options.spiral_radius_offset,
        }
    }

    /// Flowing position of the particle at normalized slot `pct` after
    /// `time` seconds.
    ///
    /// Height cycles upward through the vertical span via modulo wrap,
    /// re-based to stay within `[-height/2, +height/2)`; the angle is
    /// recomputed from the wrapped height plus a time-driven rotational
    /// term.
    #[must_use]
    pub fn flow_position(
        &self,
        pct: f32,
        time: f32,
        flow_speed: f32,
        swirl_rate: f32,
    ) -> Vec3 {
        let wrapped =
            (pct * self.height + time * flow_speed).rem_euclid(self.height);
        let norm = wrapped / self.height;
        let y = wrapped - self.height * 0.5;
        let angle = norm * TAU * self.turns + time * swirl_rate;
        let r = (1.0 - norm) * self.radius * self.radius_scale
            + self.radius_offset;
        Vec3::new(angle.cos() * r, y, angle.sin() * r)
    }

    /// Static helix position of slot `pct` (the flow at time zero).
    #[must_use]
    pub fn rest_position(&self, pct: f32) -> Vec3 {
        self.flow_position(pct, 0.0, 0.0, 0.0)
    }
}

/// Evenly spaced helix positions for `count` particles.
#[must_use]
pub fn generate_helix(count: usize, params: &SpiralParams) -> Vec<Vec3> {
    (0..count)
        .map(|i| params.rest_position(i as f32 / count as f32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> SpiralParams {
        SpiralParams {
            height: 18.0,
            radius: 7.0,
            turns: 6.0,
            radius_scale: 1.15,
            radius_offset: 0.4,
        }
    }

    #[test]
    fn helix_is_deterministic() {
        let p = params();
        assert_eq!(generate_helix(320, &p), generate_helix(320, &p));
    }

    #[test]
    fn base_slot_sits_at_the_bottom_with_full_radius() {
        let p = params();
        let base = p.rest_position(0.0);
        assert!((base.y - -9.0).abs() < 1e-5);
        let horizontal = (base.x * base.x + base.z * base.z).sqrt();
        assert!((horizontal - (7.0 * 1.15 + 0.4)).abs() < 1e-4);
    }

    #[test]
    fn flow_wraps_within_the_vertical_span() {
        let p = params();
        for step in 0..200 {
            let time = step as f32 * 0.37;
            let pos = p.flow_position(0.65, time, 2.4, 0.8);
            assert!(
                pos.y >= -9.0 && pos.y < 9.0,
                "y {} escaped the span at t={time}",
                pos.y
            );
        }
    }

    #[test]
    fn radius_shrinks_as_the_band_climbs() {
        let p = params();
        let low = p.flow_position(0.05, 0.0, 0.0, 0.0);
        let high = p.flow_position(0.95, 0.0, 0.0, 0.0);
        let r = |v: Vec3| (v.x * v.x + v.z * v.z).sqrt();
        assert!(r(low) > r(high));
    }
}
