//! Tree-cone formation sampling.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

/// Sample `count` positions forming a spiral-twisted cone.
///
/// Height is uniform over `[-height/2, height/2]`; radius shrinks
/// linearly from `radius` at the base to zero at the apex. A
/// height-dependent twist (`h * 2`) is added to the random angle so the
/// cone reads as a continuous spiral rather than a random cloud.
#[must_use]
pub fn generate(
    count: usize,
    height: f32,
    radius: f32,
    rng: &mut impl Rng,
) -> Vec<Vec3> {
    let half = height * 0.5;
    (0..count)
        .map(|_| {
            let h = rng.random_range(-half..half);
            let norm = (h + half) / height;
            let r = (1.0 - norm) * radius;
            let angle = rng.random_range(0.0..TAU) + h * 2.0;
            Vec3::new(angle.cos() * r, h, angle.sin() * r)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_stay_within_the_cone() {
        let mut rng = rand::rng();
        let height = 18.0;
        let radius = 7.0;
        let positions = generate(2000, height, radius, &mut rng);
        assert_eq!(positions.len(), 2000);

        let half = height * 0.5;
        for p in &positions {
            assert!(p.y >= -half && p.y < half, "height out of span: {}", p.y);
            let norm = (p.y + half) / height;
            let max_r = (1.0 - norm) * radius;
            let horizontal = (p.x * p.x + p.z * p.z).sqrt();
            assert!(
                horizontal <= max_r + 1e-3,
                "radius {horizontal} exceeds cone bound {max_r} at y={}",
                p.y
            );
        }
    }

    #[test]
    fn radius_shrinks_toward_apex() {
        let mut rng = rand::rng();
        let positions = generate(4000, 18.0, 7.0, &mut rng);

        // Average horizontal radius in the lower third should exceed the
        // upper third by a wide margin.
        let (mut low, mut low_n, mut high, mut high_n) = (0.0, 0, 0.0, 0);
        for p in &positions {
            let horizontal = (p.x * p.x + p.z * p.z).sqrt();
            if p.y < -3.0 {
                low += horizontal;
                low_n += 1;
            } else if p.y > 3.0 {
                high += horizontal;
                high_n += 1;
            }
        }
        assert!(low_n > 0 && high_n > 0);
        assert!(low / low_n as f32 > 2.0 * high / high_n as f32);
    }
}
