//! # manor_session - The Assembled House
//!
//! Wires every subsystem of the Wizard's Manor into one simulation:
//! - The default house layout (rooms, props, cat route, teleport markers)
//! - A single clock and event bus driving presence, patrol, pickups and HUD
//! - Session reset that cancels everything in flight
//!
//! A host embeds a [`Session`], feeds it input and deltas, and renders
//! whatever the accessors report.

pub mod layout;
pub mod session;

pub use layout::*;
pub use session::*;

/// Prelude
pub mod prelude {
    pub use crate::layout::{HouseBounds, PropSpec, Room, TeleportPoint};
    pub use crate::session::{GameState, Session, SessionConfig, SessionError};
}
