//! Reduces classifier snapshots to session-state changes and commands.
//!
//! The interpreter is the only writer of the session's mode, gesture, and
//! hand fields. It runs synchronously inside the classifier callback: no
//! queuing, no concurrency. Playback side effects are not performed here;
//! they are returned as a [`GestureCommand`] for the engine to execute,
//! so the "ignored failure" of a blocked play attempt stays an explicit
//! engine decision.

use super::landmarks::HandSnapshot;
use crate::options::GestureOptions;
use crate::session::{Gesture, Mode, SessionState};

/// An action the interpreter requests from the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureCommand {
    /// A pinch passed the playback gate: attempt to start the video.
    StartVideoPlayback,
}

/// Per-frame gesture classification and mode-switching policy.
#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    options: GestureOptions,
}

impl GestureInterpreter {
    /// Interpreter with the given thresholds.
    #[must_use]
    pub fn new(options: GestureOptions) -> Self {
        Self { options }
    }

    /// Current thresholds.
    #[must_use]
    pub fn options(&self) -> &GestureOptions {
        &self.options
    }

    /// Process one classifier callback.
    ///
    /// With no snapshot the hand is marked lost and mode/gesture stay
    /// sticky. With a snapshot, the open/closed classification may switch
    /// the mode; palm spreads inside the dead zone change nothing. An
    /// independent pinch check overrides the gesture and, when the
    /// session passes the playback gate (scatter mode, overlay opacity
    /// above the gate, video not already playing), returns a playback
    /// command.
    pub fn interpret(
        &self,
        snapshot: Option<&HandSnapshot>,
        session: &mut SessionState,
    ) -> Option<GestureCommand> {
        let Some(snapshot) = snapshot else {
            session.clear_hand();
            return None;
        };

        session.set_hand((snapshot.wrist().x - 0.5) * 2.0);

        let spread = snapshot.palm_spread();
        if spread < self.options.closed_threshold {
            session.set_gesture(Gesture::Closed);
            session.set_mode(Mode::Tree);
        } else if spread > self.options.open_threshold {
            session.set_gesture(Gesture::Open);
            session.set_mode(Mode::Scatter);
        }

        if snapshot.pinch_gap() < self.options.pinch_threshold {
            session.set_gesture(Gesture::Pinch);
            let gated = session.mode() == Mode::Scatter
                && session.video_opacity()
                    > self.options.playback_opacity_gate
                && !session.playing_video();
            if gated {
                return Some(GestureCommand::StartVideoPlayback);
            }
        }

        None
    }
}
