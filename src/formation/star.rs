//! Star cluster: a parametric 5-point silhouette at the tree apex.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use super::scatter;

/// Sample `count` positions outlining a five-point star centered on
/// `apex`.
///
/// Particles are spaced evenly in angle; the silhouette radius alternates
/// between `outer` and `inner` on the sign of `sin(5·angle)`, each with
/// independent jitter. The outline lies in the XY plane with a shallow
/// depth jitter so it still catches light from the side.
#[must_use]
pub fn generate_outline(
    count: usize,
    outer: f32,
    inner: f32,
    jitter: f32,
    apex: Vec3,
    rng: &mut impl Rng,
) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * TAU;
            let silhouette =
                if (5.0 * angle).sin() >= 0.0 { outer } else { inner };
            let r = silhouette + jittered(jitter, rng);
            let depth = jittered(jitter, rng) * 0.5;
            apex + Vec3::new(angle.cos() * r, angle.sin() * r, depth)
        })
        .collect()
}

/// Scattered counterpart: a wide cloud biased upward so the scatter reads
/// as the star dissolving skyward.
#[must_use]
pub fn generate_scatter(
    count: usize,
    radius: f32,
    lift: f32,
    rng: &mut impl Rng,
) -> Vec<Vec3> {
    (0..count)
        .map(|_| scatter::sample_point(radius, rng) + Vec3::Y * lift)
        .collect()
}

fn jittered(jitter: f32, rng: &mut impl Rng) -> f32 {
    if jitter > 0.0 {
        rng.random_range(-jitter..jitter)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_radii_stay_within_jittered_bounds() {
        let mut rng = rand::rng();
        let apex = Vec3::new(0.0, 9.0, 0.0);
        let points =
            generate_outline(140, 2.2, 0.9, 0.25, apex, &mut rng);
        assert_eq!(points.len(), 140);

        for p in &points {
            let local = *p - apex;
            let r = (local.x * local.x + local.y * local.y).sqrt();
            assert!(r >= 0.9 - 0.25 - 1e-4 && r <= 2.2 + 0.25 + 1e-4);
            assert!(local.z.abs() <= 0.125 + 1e-4);
        }
    }

    #[test]
    fn silhouette_alternates_between_points_and_valleys() {
        let mut rng = rand::rng();
        // No jitter: radii are exactly outer or inner.
        let points = generate_outline(
            500,
            2.2,
            0.9,
            0.0,
            Vec3::ZERO,
            &mut rng,
        );
        let outer = points
            .iter()
            .filter(|p| {
                ((p.x * p.x + p.y * p.y).sqrt() - 2.2).abs() < 1e-4
            })
            .count();
        let inner = points.len() - outer;
        assert!(outer > 0 && inner > 0);
        // sin(5a) >= 0 over half the circle.
        assert!((outer as f32 / points.len() as f32 - 0.5).abs() < 0.05);
    }

    #[test]
    fn scatter_is_lifted_skyward() {
        let mut rng = rand::rng();
        let points = generate_scatter(2000, 30.0, 8.0, &mut rng);
        let mean_y: f32 =
            points.iter().map(|p| p.y).sum::<f32>() / points.len() as f32;
        assert!(
            (mean_y - 8.0).abs() < 1.5,
            "mean height {mean_y} should sit near the lift"
        );
    }
}
