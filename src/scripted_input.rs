//! Replays a JSON input script as per-tick input frames.
//!
//! Scripts drive the headless mode deterministically: a sequence of
//! timed steps, each holding a movement direction and the attack button
//! for a number of ticks. Steps flow through the same device-merge path
//! as a real gamepad, deadzone included.

use crate::input::{self, GamepadState, KeyboardState};
use serde::Deserialize;
use std::{fs, io, path::Path};
use thiserror::Error;
use wildshore_core::InputFrame;

/// Errors loading an input script.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The file could not be read.
    #[error("failed to read input script: {0}")]
    Io(#[from] io::Error),
    /// The file is not valid script JSON.
    #[error("failed to parse input script: {0}")]
    Parse(#[from] serde_json::Error),
    /// The file parsed but holds no steps.
    #[error("input script contains no steps")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct ScriptFile {
    steps: Vec<ScriptStep>,
}

#[derive(Debug, Clone, Deserialize)]
struct ScriptStep {
    /// How long this step is held. Every step lasts at least one tick.
    duration_ticks: u64,
    #[serde(default)]
    move_x: f64,
    #[serde(default)]
    move_y: f64,
    #[serde(default)]
    attack: bool,
}

/// Iterator-style playback of a parsed script.
///
/// Once the final step's duration elapses it is held forever, so a
/// script ending in a neutral step idles the player.
#[derive(Debug)]
pub struct ScriptedInputPlayer {
    steps: Vec<ScriptStep>,
    index: usize,
    ticks_in_step: u64,
}

impl ScriptedInputPlayer {
    /// Load and validate a script file.
    pub fn from_path(path: &Path) -> Result<Self, ScriptError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    fn from_json(contents: &str) -> Result<Self, ScriptError> {
        let file: ScriptFile = serde_json::from_str(contents)?;
        if file.steps.is_empty() {
            return Err(ScriptError::Empty);
        }
        Ok(Self {
            steps: file.steps,
            index: 0,
            ticks_in_step: 0,
        })
    }

    /// Produce the input frame for the next tick.
    pub fn next_frame(&mut self) -> InputFrame {
        let step = &self.steps[self.index];
        let pad = GamepadState {
            axis_x: step.move_x,
            axis_y: step.move_y,
            attack: step.attack,
        };
        let frame = input::merge(&KeyboardState::default(), Some(&pad));

        self.ticks_in_step += 1;
        if self.ticks_in_step >= step.duration_ticks && self.index + 1 < self.steps.len() {
            self.index += 1;
            self.ticks_in_step = 0;
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn test_empty_script_is_rejected() {
        let err = ScriptedInputPlayer::from_json(r#"{"steps": []}"#).unwrap_err();
        assert!(matches!(err, ScriptError::Empty));
    }

    #[test]
    fn test_malformed_script_is_rejected() {
        let err = ScriptedInputPlayer::from_json("not json").unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }

    #[test]
    fn test_steps_advance_on_schedule() {
        let mut player = ScriptedInputPlayer::from_json(
            r#"{"steps": [
                {"duration_ticks": 2, "move_x": 1.0},
                {"duration_ticks": 1, "move_y": -1.0, "attack": true}
            ]}"#,
        )
        .unwrap();

        let east = DVec2::new(1.0, 0.0);
        assert_eq!(player.next_frame().direction, east);
        assert_eq!(player.next_frame().direction, east);

        let frame = player.next_frame();
        assert_eq!(frame.direction, DVec2::new(0.0, -1.0));
        assert!(frame.attack);

        // The final step is held forever.
        assert_eq!(player.next_frame().direction, DVec2::new(0.0, -1.0));
    }

    #[test]
    fn test_small_axes_fall_inside_deadzone() {
        let mut player = ScriptedInputPlayer::from_json(
            r#"{"steps": [{"duration_ticks": 1, "move_x": 0.1}]}"#,
        )
        .unwrap();
        assert_eq!(player.next_frame().direction, DVec2::ZERO);
    }
}
