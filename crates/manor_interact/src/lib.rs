//! # manor_interact - Interactable Registry & Pickup Protocol
//!
//! Tracks every prop the player can point at:
//! - Hover highlighting that always restores the pre-highlight appearance
//! - Hover text with last-entered-wins semantics
//! - A pickup protocol that disables the prop before publishing, so a
//!   pickup can never dispatch twice
//!
//! Pickups land on the [`manor_event::EventBus`] as [`PickupEvent`]s; the
//! registry neither knows nor cares who is listening.

pub mod prop;
pub mod registry;

pub use prop::*;
pub use registry::*;

/// Prelude
pub mod prelude {
    pub use crate::prop::{Appearance, InteractableProp};
    pub use crate::registry::{InteractError, InteractableRegistry, PickupEvent};
}
