//! Read-only query methods and host-facing lifecycle helpers for
//! [`InstallationEngine`].

use super::InstallationEngine;
use crate::media::MediaEvent;
use crate::options::Options;
use crate::scene::{FrameSink, InstallationScene};
use crate::session::{Mode, SessionState};

// ── Session and scene access ──

impl InstallationEngine {
    /// Read-only access to the shared session record.
    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Current formation mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    /// Read-only access to the scene graph.
    #[must_use]
    pub fn scene(&self) -> &InstallationScene {
        &self.scene
    }

    /// Current runtime options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Advisory buffering diagnostic for the host UI. Never affects
    /// playback state.
    #[must_use]
    pub fn buffering(&self) -> bool {
        self.buffering
    }

    /// Current blended audio level.
    #[must_use]
    pub fn audio_level(&self) -> f32 {
        self.audio_level
    }

    /// Whether the one-time user-interaction gate has fired.
    #[must_use]
    pub fn user_interacted(&self) -> bool {
        self.user_interacted
    }

    /// Smoothed frames-per-second of the tick loop.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }

    #[cfg(test)]
    pub(crate) fn session_mut_for_tests(&mut self) -> &mut SessionState {
        &mut self.session
    }
}

// ── Host lifecycle ──

impl InstallationEngine {
    /// Record the one-time "start" trigger (first user click).
    ///
    /// Until this fires, every playback attempt is made muted, per
    /// platform autoplay policy.
    pub fn notify_user_interaction(&mut self) {
        if !self.user_interacted {
            log::debug!("user interaction gate fired");
        }
        self.user_interacted = true;
    }

    /// Queue a media lifecycle event for the next tick's drain.
    pub fn push_media_event(&mut self, event: MediaEvent) {
        self.events.push_back(event);
    }

    /// Record a per-frame classifier send error.
    ///
    /// One failure never stops the stream; the visuals keep running in
    /// the last-known mode with idle rotation.
    pub fn on_classifier_error(&mut self, message: &str) {
        log::warn!("gesture classifier error: {message}");
    }

    /// Forward a viewport dimension change to the renderer seam.
    pub fn resize(
        &mut self,
        width: u32,
        height: u32,
        sink: &mut dyn FrameSink,
    ) {
        sink.resize(width, height);
    }
}
