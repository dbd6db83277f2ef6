#![warn(missing_docs)]
//! Core primitives shared across the workspace.

pub mod events;
pub mod input;
pub mod tunables;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use events::{AudioCue, EffectEvent, FrameEvents};
pub use input::InputFrame;
pub use tunables::Tunables;

/// Fixed tick type (60 ticks per second, one tick per display frame).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tick(pub u64);

impl Tick {
    /// First tick in any simulation timeline.
    pub const ZERO: Self = Self(0);

    /// Advance by one tick.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Tick value as a signed number, for timer arithmetic that may
    /// rewind below zero early in a session.
    pub fn signed(self) -> i64 {
        self.0 as i64
    }
}
