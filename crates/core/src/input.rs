//! Normalized per-tick input, the interface to the input collaborator.

use glam::DVec2;

/// One tick's worth of merged input.
///
/// The host merges keyboard and gamepad state into this before calling
/// the session update; the simulation never sees raw device events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputFrame {
    /// Intended movement direction. Diagonals must already be normalized
    /// to unit length; zero means no movement input.
    pub direction: DVec2,
    /// Attack trigger (space / face button / right trigger).
    pub attack: bool,
}

impl InputFrame {
    /// Frame with no input held.
    pub const NEUTRAL: Self = Self {
        direction: DVec2::ZERO,
        attack: false,
    };

    /// Build a frame from raw axis values, normalizing diagonals.
    pub fn from_axes(x: f64, y: f64, attack: bool) -> Self {
        let mut direction = DVec2::new(x, y);
        if direction.x != 0.0 && direction.y != 0.0 {
            direction = direction.normalize();
        }
        Self { direction, attack }
    }
}
