//! One particle family's live and target position tables.

use glam::Vec3;

use crate::session::Mode;
use crate::util::blend;

/// A fixed-count particle set with two precomputed target tables.
///
/// Target tables are generated once at startup and never mutated; only
/// the live positions change over time. Particle index identity is
/// stable for the whole session.
#[derive(Debug, Clone)]
pub struct ParticleFamily {
    /// Current blended position per particle.
    live: Vec<Vec3>,
    /// Formed-shape targets (tree cone, helix, assembled star).
    formed: Vec<Vec3>,
    /// Scattered-shape targets.
    scattered: Vec<Vec3>,
}

impl ParticleFamily {
    /// Family starting at its formed positions.
    ///
    /// Both tables must have the same length.
    #[must_use]
    pub fn new(formed: Vec<Vec3>, scattered: Vec<Vec3>) -> Self {
        debug_assert_eq!(formed.len(), scattered.len());
        Self {
            live: formed.clone(),
            formed,
            scattered,
        }
    }

    /// Number of particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether the family holds no particles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Current blended positions.
    #[must_use]
    pub fn live(&self) -> &[Vec3] {
        &self.live
    }

    /// Mutable live positions, for analytically driven families.
    pub fn live_mut(&mut self) -> &mut [Vec3] {
        &mut self.live
    }

    /// The target table selected by `mode`.
    #[must_use]
    pub fn target(&self, mode: Mode) -> &[Vec3] {
        match mode {
            Mode::Tree => &self.formed,
            Mode::Scatter => &self.scattered,
        }
    }

    /// Blend every live position toward the mode's target by `factor`.
    pub fn blend_toward(&mut self, mode: Mode, factor: f32) {
        let targets = match mode {
            Mode::Tree => &self.formed,
            Mode::Scatter => &self.scattered,
        };
        for (live, target) in self.live.iter_mut().zip(targets.iter()) {
            *live = blend::approach_vec3(*live, *target, factor);
        }
    }

    /// Blend toward per-particle displaced targets.
    ///
    /// `displace` receives the particle index and its table target and
    /// returns the effective target for this tick; used to layer the
    /// scattered cloud's vertical breathing on top of the table.
    pub fn blend_toward_displaced(
        &mut self,
        mode: Mode,
        factor: f32,
        displace: impl Fn(usize, Vec3) -> Vec3,
    ) {
        let targets = match mode {
            Mode::Tree => &self.formed,
            Mode::Scatter => &self.scattered,
        };
        for (i, (live, target)) in
            self.live.iter_mut().zip(targets.iter()).enumerate()
        {
            *live =
                blend::approach_vec3(*live, displace(i, *target), factor);
        }
    }

    /// Teleport every live position onto the mode's target table.
    pub fn snap_to(&mut self, mode: Mode) {
        let targets = match mode {
            Mode::Tree => &self.formed,
            Mode::Scatter => &self.scattered,
        };
        self.live.copy_from_slice(targets);
    }
}
