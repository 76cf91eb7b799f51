//! Input mode selection and controller events

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// How the player points and moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMode {
    /// Mouse / gaze pointer with click-to-interact
    Pointer,
    /// Tracked controllers with thumbstick locomotion
    Vr,
}

impl InputMode {
    /// Pick the mode for the available hardware
    ///
    /// Missing immersive hardware is an expected situation, not an error;
    /// the session runs identically in pointer mode.
    pub fn select(vr_available: bool) -> Self {
        if vr_available {
            InputMode::Vr
        } else {
            log::warn!("immersive hardware unavailable, falling back to pointer input");
            InputMode::Pointer
        }
    }
}

/// Which controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hand {
    Left,
    Right,
}

/// A controller state change, as plain data
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControllerEvent {
    /// A controller appeared
    Connected { hand: Hand },
    /// A controller went away
    Disconnected { hand: Hand },
    /// Select trigger went down
    TriggerPressed { hand: Hand },
    /// Select trigger came back up
    TriggerReleased { hand: Hand },
    /// Thumbstick deflection changed
    ThumbstickMoved { hand: Hand, value: Vec2 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selection() {
        assert_eq!(InputMode::select(true), InputMode::Vr);
        assert_eq!(InputMode::select(false), InputMode::Pointer);
    }
}
