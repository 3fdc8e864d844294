//! Exponential smoothing toward a target value.
//!
//! Every continuous visual quantity in the engine (particle positions,
//! overlay opacity, audio volume, bloom intensity) converges with the same
//! rule: each tick moves the live value a fixed fraction of the remaining
//! distance. Convergence speed is therefore frame-rate dependent, matching
//! the installation's original feel.

use glam::Vec3;

/// Move `value` toward `target` by the fraction `factor`.
///
/// With `factor` in `(0, 1]`, the remaining distance shrinks by
/// `(1 - factor)` per call: `|v' - t| = |v - t| * (1 - factor)`.
#[inline]
#[must_use]
pub fn approach(value: f32, target: f32, factor: f32) -> f32 {
    value + (target - value) * factor
}

/// Component-wise [`approach`] for positions.
#[inline]
#[must_use]
pub fn approach_vec3(value: Vec3, target: Vec3, factor: f32) -> Vec3 {
    value + (target - value) * factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approach_moves_fractionally() {
        let v = approach(0.0, 10.0, 0.25);
        assert!((v - 2.5).abs() < 1e-6);
    }

    #[test]
    fn approach_full_factor_snaps() {
        let v = approach(3.0, 10.0, 1.0);
        assert!((v - 10.0).abs() < 1e-6);
    }

    #[test]
    fn remaining_distance_shrinks_geometrically() {
        let target = 5.0_f32;
        let factor = 0.1;
        let mut v = 0.0;
        let mut remaining = (target - v).abs();
        for _ in 0..20 {
            v = approach(v, target, factor);
            let next_remaining = (target - v).abs();
            assert!(
                (next_remaining - remaining * (1.0 - factor)).abs() < 1e-5,
                "expected geometric shrink, got {next_remaining}"
            );
            remaining = next_remaining;
        }
    }

    #[test]
    fn approach_vec3_matches_scalar() {
        let v = approach_vec3(
            Vec3::new(0.0, 10.0, -4.0),
            Vec3::new(10.0, 0.0, 4.0),
            0.5,
        );
        assert!((v - Vec3::new(5.0, 5.0, 0.0)).length() < 1e-6);
    }
}
