//! Per-tick particle choreography: rotation, spiral flow, star twinkle,
//! and main-cloud blending.

use glam::Vec3;

use super::InstallationEngine;
use crate::formation::SpiralParams;
use crate::session::Mode;
use crate::util::blend;

impl InstallationEngine {
    /// The particle half of the tick.
    pub(super) fn advance_particles(&mut self, elapsed: f32, dt: f32) {
        self.advance_rotation(dt);
        self.advance_spiral(elapsed);
        self.advance_star(elapsed);
        self.advance_cloud(elapsed);
    }

    /// A detected hand steers the cloud's yaw velocity toward its
    /// horizontal position (momentum-like turning, not an absolute
    /// angle); with no hand, a constant idle rotation applies.
    fn advance_rotation(&mut self, dt: f32) {
        let c = &self.options.choreography;
        if self.session.hand_detected() {
            self.yaw_velocity = blend::approach(
                self.yaw_velocity,
                self.session.hand_x() * c.hand_yaw_gain,
                c.yaw_steer_blend,
            );
            self.scene.yaw += self.yaw_velocity * dt;
        } else {
            self.scene.yaw += c.idle_yaw_rate * dt;
        }
    }

    /// Tree mode: analytic flowing positions from elapsed time. Scatter
    /// mode: teleport onto the scatter table — the flowing formula has
    /// no meaningful current position to blend from.
    fn advance_spiral(&mut self, elapsed: f32) {
        match self.session.mode() {
            Mode::Tree => {
                let params =
                    SpiralParams::from_options(&self.options.formation);
                let flow_speed = self.options.choreography.spiral_flow_speed;
                let swirl_rate = self.options.choreography.spiral_swirl_rate;
                let count = self.scene.spiral.len();
                for (i, pos) in
                    self.scene.spiral.live_mut().iter_mut().enumerate()
                {
                    *pos = params.flow_position(
                        i as f32 / count as f32,
                        elapsed,
                        flow_speed,
                        swirl_rate,
                    );
                }
            }
            Mode::Scatter => self.scene.spiral.snap_to(Mode::Scatter),
        }
    }

    /// Twinkle the star's point size and blend it toward the assembled
    /// outline or its skyward scatter at double the cloud factor.
    fn advance_star(&mut self, elapsed: f32) {
        let c = &self.options.choreography;
        self.scene.star_scale = c.twinkle_base
            + c.twinkle_depth * (c.twinkle_rate * elapsed).sin();
        let factor = c.star_blend();
        self.scene.star.blend_toward(self.session.mode(), factor);
    }

    /// Blend the cloud toward the active table; scattered targets get a
    /// per-particle vertical oscillation so the cloud breathes rather
    /// than sitting static.
    fn advance_cloud(&mut self, elapsed: f32) {
        let factor = self.options.choreography.cloud_blend;
        match self.session.mode() {
            Mode::Tree => {
                self.scene.cloud.blend_toward(Mode::Tree, factor);
            }
            Mode::Scatter => {
                let amplitude =
                    self.options.choreography.breathing_amplitude;
                self.scene.cloud.blend_toward_displaced(
                    Mode::Scatter,
                    factor,
                    |_, target| {
                        target
                            + Vec3::Y
                                * ((elapsed + target.x).sin() * amplitude)
                    },
                );
            }
        }
    }
}
