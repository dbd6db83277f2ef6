//! Merges keyboard and gamepad state into the per-tick input frame.

use wildshore_core::InputFrame;

/// Stick displacement below this is treated as centered.
pub const GAMEPAD_DEADZONE: f64 = 0.2;

/// Digital movement keys plus the attack key, sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    /// W / up arrow held.
    pub up: bool,
    /// S / down arrow held.
    pub down: bool,
    /// A / left arrow held.
    pub left: bool,
    /// D / right arrow held.
    pub right: bool,
    /// Space held.
    pub attack: bool,
}

/// Analog stick axes plus the attack button of a connected gamepad.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GamepadState {
    /// Left stick horizontal axis, in [-1, 1].
    pub axis_x: f64,
    /// Left stick vertical axis, in [-1, 1].
    pub axis_y: f64,
    /// Face button or right trigger held.
    pub attack: bool,
}

/// Merge both devices into one frame.
///
/// A stick pushed past the deadzone takes over movement entirely, axis
/// values kept analog; otherwise the keyboard's digital axes apply.
/// Attack triggers on either device.
pub fn merge(keyboard: &KeyboardState, gamepad: Option<&GamepadState>) -> InputFrame {
    let mut x = (keyboard.right as i8 - keyboard.left as i8) as f64;
    let mut y = (keyboard.down as i8 - keyboard.up as i8) as f64;
    let mut attack = keyboard.attack;

    if let Some(pad) = gamepad {
        let px = if pad.axis_x.abs() > GAMEPAD_DEADZONE {
            pad.axis_x
        } else {
            0.0
        };
        let py = if pad.axis_y.abs() > GAMEPAD_DEADZONE {
            pad.axis_y
        } else {
            0.0
        };
        if px != 0.0 || py != 0.0 {
            x = px;
            y = py;
        }
        attack |= pad.attack;
    }

    InputFrame::from_axes(x, y, attack)
}
