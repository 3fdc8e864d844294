//! Uniform-volume sphere sampling for the scattered formation.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

/// Sample one point uniformly inside a sphere of the given radius.
///
/// Radius uses cube-root scaling (`r = R * cbrt(u)`) with uniform
/// spherical angles; sampling the radius uniformly instead would pile
/// particles near the surface.
#[must_use]
pub fn sample_point(radius: f32, rng: &mut impl Rng) -> Vec3 {
    let r = radius * rng.random::<f32>().cbrt();
    let theta = rng.random_range(0.0..TAU);
    let phi = (2.0 * rng.random::<f32>() - 1.0).acos();
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.cos(),
        r * phi.sin() * theta.sin(),
    )
}

/// Sample `count` positions uniformly inside a sphere of the given radius.
#[must_use]
pub fn generate(
    count: usize,
    radius: f32,
    rng: &mut impl Rng,
) -> Vec<Vec3> {
    (0..count).map(|_| sample_point(radius, rng)).collect()
}
