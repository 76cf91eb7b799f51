//! # manor_input - Input Modes & Locomotion
//!
//! Host-agnostic input handling:
//! - Mode selection with a logged fallback to pointer input when no
//!   immersive hardware is present
//! - Controller events as plain data
//! - Smooth thumbstick locomotion with a dead zone and a collision veto
//!
//! The host translates raw device state into these types; nothing here
//! touches a device API.

pub mod locomotion;
pub mod mode;

pub use locomotion::*;
pub use mode::*;

/// Prelude
pub mod prelude {
    pub use crate::locomotion::{Locomotion, LocomotionConfig};
    pub use crate::mode::{ControllerEvent, Hand, InputMode};
}
