//! The installation engine: per-frame choreography and mode-transition
//! side effects.
//!
//! The engine is the frame-loop orchestrator. Hosts call
//! [`ingest_hand_frame`](InstallationEngine::ingest_hand_frame) from the
//! classifier callback and [`tick`](InstallationEngine::tick) once per
//! display refresh; both run on one logical thread. Each tick blends every
//! particle family toward the active formation, synchronizes the video
//! overlay and audio with the current mode, reacts to mode edges with
//! one-shot playback side effects, and submits the prepared frame to the
//! renderer seam.

mod accessors;
mod choreography;
mod media_sync;

use std::collections::VecDeque;

use rand::Rng;
use web_time::{Duration, Instant};

use crate::gesture::{GestureCommand, GestureInterpreter, HandSnapshot};
use crate::media::{
    AudioChannel, MediaEvent, StallDetector, VideoSurface,
};
use crate::options::Options;
use crate::scene::{FrameSink, InstallationScene};
use crate::session::{Mode, SessionState};
use crate::util::clock::AnimationClock;
use crate::util::frame_timing::FrameTiming;

/// The central per-frame orchestrator.
///
/// # Construction
///
/// [`new`](Self::new) generates the formation tables with the thread RNG;
/// [`with_rng`](Self::with_rng) takes an explicit RNG for deterministic
/// setups.
///
/// # Frame loop
///
/// ```ignore
/// // classifier callback:
/// engine.ingest_hand_frame(snapshot.as_ref());
///
/// // display-synchronized callback:
/// engine.tick(Instant::now(), &mut sink);
/// ```
pub struct InstallationEngine {
    /// Runtime tuning.
    options: Options,
    /// Shared session record, written by interpreter and tick.
    session: SessionState,
    /// Gesture classification policy.
    interpreter: GestureInterpreter,
    /// Particle families, overlay, and blended visual parameters.
    scene: InstallationScene,
    /// Elapsed/delta clock driving time-based oscillation.
    clock: AnimationClock,
    /// Per-frame timing and FPS tracking.
    frame_timing: FrameTiming,
    /// Host-provisioned video element.
    video: Box<dyn VideoSurface>,
    /// Host-provisioned audio element.
    audio: Box<dyn AudioChannel>,
    /// Mode recorded at the end of the previous tick, for edge detection.
    previous_mode: Mode,
    /// Whether the one-time user-interaction gate has fired.
    user_interacted: bool,
    /// Blended audio volume.
    audio_level: f32,
    /// Blended yaw velocity while a hand steers the cloud.
    yaw_velocity: f32,
    /// Advisory stall heuristic.
    stall: StallDetector,
    /// Media lifecycle events pushed by the host, drained each tick.
    events: VecDeque<MediaEvent>,
    /// Advisory buffering diagnostic.
    buffering: bool,
}

impl InstallationEngine {
    /// Engine with formation tables sampled from the thread RNG.
    #[must_use]
    pub fn new(
        options: Options,
        video: Box<dyn VideoSurface>,
        audio: Box<dyn AudioChannel>,
        now: Instant,
    ) -> Self {
        let mut rng = rand::rng();
        Self::with_rng(options, video, audio, now, &mut rng)
    }

    /// Engine with formation tables sampled from an explicit RNG.
    pub fn with_rng(
        options: Options,
        video: Box<dyn VideoSurface>,
        audio: Box<dyn AudioChannel>,
        now: Instant,
        rng: &mut impl Rng,
    ) -> Self {
        let scene = InstallationScene::generate(&options, rng);
        let interpreter =
            GestureInterpreter::new(options.gesture.clone());
        let stall = StallDetector::new(
            Duration::from_millis(options.media.stall_timeout_ms),
            options.media.stall_epsilon,
        );
        let audio_level = options.media.nominal_volume;

        Self {
            options,
            session: SessionState::new(),
            interpreter,
            scene,
            clock: AnimationClock::new(now),
            frame_timing: FrameTiming::new(0, now),
            video,
            audio,
            previous_mode: Mode::Tree,
            user_interacted: false,
            audio_level,
            yaw_velocity: 0.0,
            stall,
            events: VecDeque::new(),
            buffering: false,
        }
    }

    /// Advance one frame and submit it to the renderer.
    ///
    /// Must not block; every step is a complete synchronous unit.
    pub fn tick(&mut self, now: Instant, sink: &mut dyn FrameSink) {
        self.clock.tick(now);
        let dt = self.clock.delta();
        let elapsed = self.clock.elapsed();

        self.sync_media(now);
        self.advance_particles(elapsed, dt);

        let frame = self.scene.build_frame(&self.options.display);
        sink.submit(&frame);
        self.frame_timing.end_frame(now);
    }

    /// Process one classifier callback.
    ///
    /// Runs the gesture interpreter synchronously and executes any
    /// command it returns (a gated pinch becomes a playback attempt).
    pub fn ingest_hand_frame(&mut self, snapshot: Option<&HandSnapshot>) {
        let command =
            self.interpreter.interpret(snapshot, &mut self.session);
        if command == Some(GestureCommand::StartVideoPlayback) {
            self.attempt_playback();
        }
    }

    /// Try to start video playback, honoring the user-interaction gate.
    ///
    /// A rejection (autoplay policy) is logged and otherwise ignored;
    /// `playing_video` stays false until an attempt succeeds, and the
    /// next mode edge or pinch retries implicitly.
    fn attempt_playback(&mut self) {
        let muted = !self.user_interacted;
        match self.video.play(muted) {
            Ok(()) => self.session.set_playing_video(true),
            Err(e) => {
                log::warn!("video playback attempt rejected: {e}");
            }
        }
    }
}

impl std::fmt::Debug for InstallationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstallationEngine")
            .field("mode", &self.session.mode())
            .field("previous_mode", &self.previous_mode)
            .field("buffering", &self.buffering)
            .field("user_interacted", &self.user_interacted)
            .finish_non_exhaustive()
    }
}


#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::test_support::{engine_with_stubs, force_mode, RecordingSink};
    use super::*;

    #[test]
    fn construction_defaults() {
        let (engine, _, _) = engine_with_stubs(Instant::now());
        assert_eq!(engine.mode(), Mode::Tree);
        assert!(!engine.buffering());
        assert!(!engine.session().playing_video());
    }

    #[test]
    fn tick_submits_one_frame() {
        let now = Instant::now();
        let (mut engine, _, _) = engine_with_stubs(now);
        let mut sink = RecordingSink::default();

        engine.tick(now + Duration::from_millis(16), &mut sink);
        assert_eq!(sink.frames.len(), 1);

        engine.tick(now + Duration::from_millis(32), &mut sink);
        assert_eq!(sink.frames.len(), 2);
    }

    #[test]
    fn entering_scatter_starts_video_once() {
        let now = Instant::now();
        let (mut engine, video, _) = engine_with_stubs(now);
        let mut sink = RecordingSink::default();

        force_mode(&mut engine, Mode::Scatter);
        engine.tick(now + Duration::from_millis(16), &mut sink);
        engine.tick(now + Duration::from_millis(32), &mut sink);
        engine.tick(now + Duration::from_millis(48), &mut sink);

        assert_eq!(video.borrow().play_calls.len(), 1);
        assert!(engine.session().playing_video());
    }

    #[test]
    fn playback_attempt_is_muted_before_user_interaction() {
        let now = Instant::now();
        let (mut engine, video, _) = engine_with_stubs(now);
        let mut sink = RecordingSink::default();

        force_mode(&mut engine, Mode::Scatter);
        engine.tick(now + Duration::from_millis(16), &mut sink);
        assert_eq!(video.borrow().play_calls, vec![true]);
    }

    #[test]
    fn playback_attempt_is_unmuted_after_user_interaction() {
        let now = Instant::now();
        let (mut engine, video, _) = engine_with_stubs(now);
        let mut sink = RecordingSink::default();

        engine.notify_user_interaction();
        force_mode(&mut engine, Mode::Scatter);
        engine.tick(now + Duration::from_millis(16), &mut sink);
        assert_eq!(video.borrow().play_calls, vec![false]);
    }

    #[test]
    fn rejected_playback_does_not_block_future_edges() {
        let now = Instant::now();
        let (mut engine, video, _) = engine_with_stubs(now);
        let mut sink = RecordingSink::default();
        video.borrow_mut().reject_play = true;

        force_mode(&mut engine, Mode::Scatter);
        engine.tick(now + Duration::from_millis(16), &mut sink);
        assert!(!engine.session().playing_video());
        // Mode was still recorded; no per-tick retries.
        engine.tick(now + Duration::from_millis(32), &mut sink);
        assert_eq!(video.borrow().play_calls.len(), 1);

        // Next edge retries.
        video.borrow_mut().reject_play = false;
        force_mode(&mut engine, Mode::Tree);
        engine.tick(now + Duration::from_millis(48), &mut sink);
        force_mode(&mut engine, Mode::Scatter);
        engine.tick(now + Duration::from_millis(64), &mut sink);
        assert_eq!(video.borrow().play_calls.len(), 2);
        assert!(engine.session().playing_video());
    }

    #[test]
    fn leaving_scatter_pauses_video_exactly_once() {
        let now = Instant::now();
        let (mut engine, video, _) = engine_with_stubs(now);
        let mut sink = RecordingSink::default();

        force_mode(&mut engine, Mode::Scatter);
        engine.tick(now + Duration::from_millis(16), &mut sink);
        assert!(engine.session().playing_video());

        force_mode(&mut engine, Mode::Tree);
        engine.tick(now + Duration::from_millis(32), &mut sink);
        assert!(!engine.session().playing_video());
        let pauses = video.borrow().pause_calls;

        engine.tick(now + Duration::from_millis(48), &mut sink);
        engine.tick(now + Duration::from_millis(64), &mut sink);
        assert_eq!(video.borrow().pause_calls, pauses);
    }

    #[test]
    fn spiral_teleports_on_the_first_scatter_tick() {
        let now = Instant::now();
        let (mut engine, _, _) = engine_with_stubs(now);
        let mut sink = RecordingSink::default();

        engine.tick(now + Duration::from_millis(16), &mut sink);
        force_mode(&mut engine, Mode::Scatter);
        engine.tick(now + Duration::from_millis(32), &mut sink);

        let scene = engine.scene();
        assert_eq!(
            scene.spiral().live(),
            scene.spiral().target(Mode::Scatter)
        );
    }

    #[test]
    fn cloud_converges_toward_the_scatter_table() {
        let now = Instant::now();
        let (mut engine, _, _) = engine_with_stubs(now);
        let mut sink = RecordingSink::default();

        force_mode(&mut engine, Mode::Scatter);
        let initial: f32 = {
            let scene = engine.scene();
            scene
                .cloud()
                .live()
                .iter()
                .zip(scene.cloud().target(Mode::Scatter))
                .map(|(live, target)| (*live - *target).length())
                .sum()
        };

        for i in 1..=120 {
            engine.tick(
                now + Duration::from_millis(16 * i),
                &mut sink,
            );
        }

        let remaining: f32 = {
            let scene = engine.scene();
            scene
                .cloud()
                .live()
                .iter()
                .zip(scene.cloud().target(Mode::Scatter))
                .map(|(live, target)| (*live - *target).length())
                .sum()
        };
        // Breathing keeps the cloud from ever resting exactly on the
        // table, but after 120 ticks it should be far closer than at
        // the flip.
        assert!(
            remaining < initial * 0.1,
            "cloud did not converge: {remaining} of {initial}"
        );
    }

    #[test]
    fn idle_rotation_accumulates_at_the_configured_rate() {
        let now = Instant::now();
        let (mut engine, _, _) = engine_with_stubs(now);
        let mut sink = RecordingSink::default();
        let rate = engine.options().choreography.idle_yaw_rate;

        // 5 seconds of hand-less ticks at 50 Hz.
        for i in 1..=250 {
            engine.tick(now + Duration::from_millis(20 * i), &mut sink);
        }

        let expected = 5.0 * rate;
        assert!(
            (engine.scene().yaw() - expected).abs() < 1e-3,
            "yaw {} != {expected}",
            engine.scene().yaw()
        );
    }

    #[test]
    fn audio_ducks_while_video_plays() {
        let now = Instant::now();
        let (mut engine, _, audio) = engine_with_stubs(now);
        let mut sink = RecordingSink::default();
        let nominal = engine.options().media.nominal_volume;

        for i in 1..=200 {
            engine.tick(now + Duration::from_millis(16 * i), &mut sink);
        }
        assert!((*audio.borrow() - nominal).abs() < 0.01);

        force_mode(&mut engine, Mode::Scatter);
        for i in 201..=400 {
            engine.tick(now + Duration::from_millis(16 * i), &mut sink);
        }
        assert!(*audio.borrow() < 0.01);
    }

    #[test]
    fn stalled_video_raises_the_buffering_diagnostic() {
        let now = Instant::now();
        let (mut engine, video, _) = engine_with_stubs(now);
        let mut sink = RecordingSink::default();

        force_mode(&mut engine, Mode::Scatter);
        video.borrow_mut().time = 1.0;
        engine.tick(now + Duration::from_millis(16), &mut sink);
        assert!(!engine.buffering());

        // Playback time frozen for over the stall window.
        engine.tick(now + Duration::from_millis(400), &mut sink);
        engine.tick(now + Duration::from_millis(1300), &mut sink);
        assert!(engine.buffering());

        // Progress clears the diagnostic; playback state never changed.
        video.borrow_mut().time = 2.0;
        engine.tick(now + Duration::from_millis(1316), &mut sink);
        assert!(!engine.buffering());
        assert!(engine.session().playing_video());
    }

    #[test]
    fn media_events_drive_the_diagnostic() {
        let now = Instant::now();
        let (mut engine, _, _) = engine_with_stubs(now);
        let mut sink = RecordingSink::default();

        engine.push_media_event(MediaEvent::Waiting);
        engine.tick(now + Duration::from_millis(16), &mut sink);
        assert!(engine.buffering());

        engine.push_media_event(MediaEvent::Playing);
        engine.tick(now + Duration::from_millis(32), &mut sink);
        assert!(!engine.buffering());
    }

    #[test]
    fn overlay_pops_in_during_scatter() {
        let now = Instant::now();
        let (mut engine, _, _) = engine_with_stubs(now);
        let mut sink = RecordingSink::default();

        force_mode(&mut engine, Mode::Scatter);
        for i in 1..=300 {
            engine.tick(now + Duration::from_millis(16 * i), &mut sink);
        }

        let media = engine.options().media.clone();
        let overlay = engine.scene().overlay();
        assert!(overlay.opacity > 0.95);
        assert!((overlay.scale - media.overlay_scale).abs() < 0.1);
        assert!(
            (overlay.depth - media.overlay_near_depth).abs() < 0.1
        );
        // Session mirrors the blended opacity for pinch gating.
        assert!(engine.session().video_opacity() > 0.95);
    }

    /// A pinch snapshot whose palm spread sits in the dead zone, so the
    /// mode stays wherever the session already is.
    fn pinch_snapshot() -> HandSnapshot {
        use crate::gesture::landmarks;

        let wrist = glam::Vec2::new(0.5, 0.5);
        let fingertip = glam::Vec2::new(0.8, 0.5);
        let mut points = vec![wrist; landmarks::LANDMARK_COUNT];
        points[landmarks::THUMB_TIP] =
            fingertip + glam::Vec2::new(0.01, 0.0);
        for idx in [
            landmarks::INDEX_TIP,
            landmarks::MIDDLE_TIP,
            landmarks::RING_TIP,
            landmarks::PINKY_TIP,
        ] {
            points[idx] = fingertip;
        }
        HandSnapshot::new(points).unwrap()
    }

    #[test]
    fn pinch_starts_video_after_a_rejected_autoplay() {
        let now = Instant::now();
        let (mut engine, video, _) = engine_with_stubs(now);
        let mut sink = RecordingSink::default();
        video.borrow_mut().reject_play = true;

        force_mode(&mut engine, Mode::Scatter);
        for i in 1..=40 {
            engine.tick(now + Duration::from_millis(16 * i), &mut sink);
        }
        assert!(!engine.session().playing_video());
        assert!(engine.session().video_opacity() > 0.8);
        assert_eq!(video.borrow().play_calls.len(), 1);

        video.borrow_mut().reject_play = false;
        let snapshot = pinch_snapshot();
        engine.ingest_hand_frame(Some(&snapshot));
        assert!(engine.session().playing_video());
        assert_eq!(video.borrow().play_calls.len(), 2);

        // Repeated pinch frames while playing are idempotent.
        engine.ingest_hand_frame(Some(&snapshot));
        assert_eq!(video.borrow().play_calls.len(), 2);
    }

    #[test]
    fn resize_is_forwarded_to_the_sink() {
        let now = Instant::now();
        let (mut engine, _, _) = engine_with_stubs(now);
        let mut sink = RecordingSink::default();

        engine.resize(1920, 1080, &mut sink);
        assert_eq!(sink.resizes, vec![(1920, 1080)]);
    }
}
