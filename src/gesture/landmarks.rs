//! Hand landmark snapshots from the external classifier.
//!
//! The classifier delivers a fixed-size ordered sequence of normalized
//! 2D points per detected hand. Only five indices are consumed here:
//! the wrist and the four non-thumb fingertips for open/closed
//! classification, plus the thumb tip for pinch detection.

use glam::Vec2;

use crate::error::ArboError;

/// Landmark index of the wrist.
pub const WRIST: usize = 0;
/// Landmark index of the thumb tip.
pub const THUMB_TIP: usize = 4;
/// Landmark index of the index fingertip.
pub const INDEX_TIP: usize = 8;
/// Landmark index of the middle fingertip.
pub const MIDDLE_TIP: usize = 12;
/// Landmark index of the ring fingertip.
pub const RING_TIP: usize = 16;
/// Landmark index of the pinky fingertip.
pub const PINKY_TIP: usize = 20;
/// Number of landmarks in a full hand set.
pub const LANDMARK_COUNT: usize = 21;

/// One hand's landmark set for a single classifier frame.
///
/// Points are in normalized capture coordinates: `x` and `y` in `[0, 1]`
/// with the origin at the top-left of the mirrored camera frame. Any
/// depth channel the classifier produces is dropped before construction.
#[derive(Debug, Clone, PartialEq)]
pub struct HandSnapshot {
    points: Vec<Vec2>,
}

impl HandSnapshot {
    /// Wrap a full landmark set.
    ///
    /// # Errors
    ///
    /// Returns [`ArboError::Landmarks`] when fewer than
    /// [`LANDMARK_COUNT`] points are supplied.
    pub fn new(points: Vec<Vec2>) -> Result<Self, ArboError> {
        if points.len() < LANDMARK_COUNT {
            return Err(ArboError::Landmarks(format!(
                "expected {LANDMARK_COUNT} landmarks, got {}",
                points.len()
            )));
        }
        Ok(Self { points })
    }

    /// Wrist position.
    #[must_use]
    pub fn wrist(&self) -> Vec2 {
        self.points[WRIST]
    }

    /// Thumb-tip position.
    #[must_use]
    pub fn thumb_tip(&self) -> Vec2 {
        self.points[THUMB_TIP]
    }

    /// Index fingertip position.
    #[must_use]
    pub fn index_tip(&self) -> Vec2 {
        self.points[INDEX_TIP]
    }

    /// The four non-thumb fingertips.
    #[must_use]
    pub fn fingertips(&self) -> [Vec2; 4] {
        [
            self.points[INDEX_TIP],
            self.points[MIDDLE_TIP],
            self.points[RING_TIP],
            self.points[PINKY_TIP],
        ]
    }

    /// Average Euclidean distance from the wrist to the four fingertips.
    #[must_use]
    pub fn palm_spread(&self) -> f32 {
        let wrist = self.wrist();
        let total: f32 = self
            .fingertips()
            .iter()
            .map(|tip| tip.distance(wrist))
            .sum();
        total / 4.0
    }

    /// Distance between thumb tip and index fingertip.
    #[must_use]
    pub fn pinch_gap(&self) -> f32 {
        self.thumb_tip().distance(self.index_tip())
    }
}
