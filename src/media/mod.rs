//! Seam traits for the host-provisioned media elements.
//!
//! The engine reacts to video and audio but does not own their
//! provisioning: hosts hand in implementations of [`VideoSurface`] and
//! [`AudioChannel`] wrapping whatever platform media elements exist.
//! Playback is modeled as synchronous fallible calls; a rejected play
//! attempt (autoplay policy) is an error value the engine logs and moves
//! past.

mod stall;

use std::fmt;

pub use stall::StallDetector;

/// Why a playback attempt did not start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// The platform's autoplay policy blocked the attempt.
    PolicyBlocked,
    /// The underlying media element is missing or unusable.
    Unavailable(String),
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PolicyBlocked => {
                write!(f, "playback blocked by platform policy")
            }
            Self::Unavailable(msg) => {
                write!(f, "media element unavailable: {msg}")
            }
        }
    }
}

impl std::error::Error for PlaybackError {}

/// A controllable video element plus its overlay texture.
pub trait VideoSurface {
    /// Attempt to start playback, muted or not.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError`] when the platform refuses the attempt;
    /// the caller decides whether that is fatal (it never is here).
    fn play(&mut self, muted: bool) -> Result<(), PlaybackError>;

    /// Pause playback. Idempotent.
    fn pause(&mut self);

    /// Whether the element is currently paused.
    fn is_paused(&self) -> bool;

    /// Reported playback position in seconds.
    fn current_time(&self) -> f64;

    /// Set the element's volume in `[0, 1]`.
    fn set_volume(&mut self, volume: f32);
}

/// The background audio element.
pub trait AudioChannel {
    /// Set the channel volume in `[0, 1]`.
    fn set_volume(&mut self, volume: f32);

    /// Current channel volume.
    fn volume(&self) -> f32;
}

/// Lifecycle notifications from the host's media elements.
///
/// Hosts push these as they observe element events; the engine drains
/// the inbox once per tick, preserving single-threaded, non-preemptive
/// semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// Playback actually started or resumed.
    Playing,
    /// Playback paused.
    Paused,
    /// The element is waiting on data (buffer underrun).
    Waiting,
    /// The element reported a stall.
    Stalled,
    /// Media metadata became available.
    LoadedMetadata,
}
