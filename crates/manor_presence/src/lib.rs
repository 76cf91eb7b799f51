//! # manor_presence - Antagonist Presence State Machine
//!
//! Drives the house's antagonist: a hidden countdown, a footsteps warning,
//! a timed appearance in the player's room, and either a quiet departure or
//! a punishment sequence when the player was caught doing something
//! forbidden.
//!
//! All waiting is expressed as [`manor_core::Deadline`]s polled against the
//! session clock, so a reset cancels every pending transition atomically
//! and tests never sleep.

pub mod presence;
pub mod punishment;

pub use presence::*;
pub use punishment::*;

/// Prelude
pub mod prelude {
    pub use crate::presence::{AntagonistPresence, PresenceConfig, PresenceEvent, PresenceState};
    pub use crate::punishment::{PunishmentSequence, PunishmentStep};
}
