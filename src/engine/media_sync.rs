//! Per-tick media synchronization: audio ducking, dimming, overlay
//! blending, mode-edge side effects, and the stall diagnostic.

use glam::Vec3;
use web_time::Instant;

use super::InstallationEngine;
use crate::media::MediaEvent;
use crate::session::Mode;
use crate::util::blend;

impl InstallationEngine {
    /// The media half of the tick. Runs before the particle update so
    /// the interpreter's latest mode drives this frame's side effects.
    pub(super) fn sync_media(&mut self, now: Instant) {
        self.enforce_tree_pause();
        self.blend_audio();
        self.blend_dimming();
        self.blend_overlay();
        self.handle_mode_edges();
        self.blend_overlay_depth();
        self.update_stall_diagnostic(now);
    }

    /// Tree mode keeps the video stopped. Idempotent.
    fn enforce_tree_pause(&mut self) {
        if self.session.mode() != Mode::Tree {
            return;
        }
        if !self.video.is_paused() {
            self.video.pause();
        }
        self.session.set_playing_video(false);
    }

    /// Duck background audio to zero while video plays; restore the
    /// nominal level otherwise.
    fn blend_audio(&mut self) {
        let media = &self.options.media;
        let target = if self.session.playing_video() {
            0.0
        } else {
            media.nominal_volume
        };
        self.audio_level =
            blend::approach(self.audio_level, target, media.volume_step);
        self.audio.set_volume(self.audio_level);
    }

    /// Dim particles and bloom while video plays.
    fn blend_dimming(&mut self) {
        let media = &self.options.media;
        let (opacity_target, bloom_target) =
            if self.session.playing_video() {
                (
                    media.dimmed_particle_opacity,
                    media.dimmed_bloom_intensity,
                )
            } else {
                (media.particle_opacity, media.bloom_intensity)
            };
        self.scene.particle_opacity = blend::approach(
            self.scene.particle_opacity,
            opacity_target,
            media.dim_blend,
        );
        self.scene.bloom_intensity = blend::approach(
            self.scene.bloom_intensity,
            bloom_target,
            media.dim_blend,
        );
    }

    /// Blend the overlay's opacity, scale, and brightness toward their
    /// mode-dependent targets, and keep the plane facing the viewpoint.
    ///
    /// The blended opacity is mirrored into the session record, where
    /// the pinch playback gate reads it.
    fn blend_overlay(&mut self) {
        let media = &self.options.media;
        let shown = self.session.mode() == Mode::Scatter;
        let overlay = &mut self.scene.overlay;

        overlay.opacity = blend::approach(
            overlay.opacity,
            if shown { 1.0 } else { 0.0 },
            media.overlay_opacity_blend,
        );
        overlay.scale = blend::approach(
            overlay.scale,
            if shown {
                media.overlay_scale
            } else {
                media.overlay_hidden_scale
            },
            media.overlay_scale_blend,
        );
        let brightness_target = if self.session.playing_video() {
            media.overlay_dim_brightness
        } else {
            1.0
        };
        overlay.brightness = blend::approach(
            overlay.brightness,
            brightness_target,
            media.overlay_brightness_blend,
        );
        overlay.orient_toward(Vec3::from(media.viewpoint));

        let opacity = overlay.opacity;
        self.session.set_video_opacity(opacity);
    }

    /// Edge-triggered one-shot side effects.
    ///
    /// Entering scatter attempts playback; leaving it pauses. The new
    /// mode is recorded regardless of the attempt's outcome, so a failed
    /// autoplay never blocks future transitions.
    fn handle_mode_edges(&mut self) {
        let mode = self.session.mode();
        if mode == self.previous_mode {
            return;
        }

        match mode {
            Mode::Scatter => {
                log::debug!("mode edge: tree -> scatter");
                self.attempt_playback();
            }
            Mode::Tree => {
                log::debug!("mode edge: scatter -> tree");
                if self.session.playing_video() {
                    self.video.pause();
                    self.session.set_playing_video(false);
                }
            }
        }

        self.previous_mode = mode;
    }

    /// Keep the overlay visually behind the particles while hidden and
    /// in front while shown.
    fn blend_overlay_depth(&mut self) {
        let media = &self.options.media;
        let target = if self.session.mode() == Mode::Scatter {
            media.overlay_near_depth
        } else {
            media.overlay_far_depth
        };
        self.scene.overlay.depth = blend::approach(
            self.scene.overlay.depth,
            target,
            media.overlay_depth_blend,
        );
    }

    /// Advisory stall heuristic plus the media-event inbox drain.
    fn update_stall_diagnostic(&mut self, now: Instant) {
        let mut buffering = self.stall.observe(
            self.video.current_time(),
            self.session.playing_video(),
            now,
        );

        while let Some(event) = self.events.pop_front() {
            match event {
                MediaEvent::Waiting | MediaEvent::Stalled => {
                    buffering = true;
                }
                MediaEvent::Playing => {
                    self.stall.reset();
                    buffering = false;
                }
                MediaEvent::Paused => {}
                MediaEvent::LoadedMetadata => {
                    log::debug!("video metadata loaded");
                }
            }
        }

        if buffering != self.buffering {
            log::debug!("buffering diagnostic: {buffering}");
        }
        self.buffering = buffering;
    }
}
