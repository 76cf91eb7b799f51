//! # manor_patrol - Waypoint Patrol Engine
//!
//! Moves an ambient agent (the house cat) smoothly between an ordered,
//! cyclic list of waypoints, with idle behaviors between legs.
//!
//! Movement is a constant fractional step per tick toward the current
//! waypoint - deliberately tick-rate-dependent, matching the fixed-interval
//! animation of the original house. There is no path planning; waypoints
//! are assumed walkable in straight lines.

pub mod agent;
pub mod route;

pub use agent::*;
pub use route::*;

/// Prelude
pub mod prelude {
    pub use crate::agent::{IdleBehavior, MovementState, PatrolAgent, PatrolConfig};
    pub use crate::route::{PatrolError, PatrolRoute};
}
