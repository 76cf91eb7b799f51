//! # manor_core - Wizard's Manor Core
//!
//! Zero-dependency primitives shared by every simulation crate:
//! - Unique identifiers for props and agents
//! - The simulated clock (explicitly advanced, never wall-clock)
//! - One-shot cancelable deadlines
//!
//! All timing in the simulation is expressed against [`Clock`] so tests can
//! drive time forward without sleeping.

pub mod clock;
pub mod id;

pub use clock::*;
pub use id::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::clock::{Clock, Deadline};
    pub use crate::id::{Id, IdGenerator};
}
