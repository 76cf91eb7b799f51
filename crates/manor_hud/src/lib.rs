//! # manor_hud - Player-Facing Overlays
//!
//! Pure view-model state for the three HUD surfaces:
//! - A singleton hover tooltip
//! - A timed message overlay with ordered queueing
//! - The inventory strip with three-letter item tags
//!
//! No rendering happens here; a host reads these models each frame and
//! draws them however it likes.

pub mod overlay;
pub mod strip;
pub mod tooltip;

pub use overlay::*;
pub use strip::*;
pub use tooltip::*;

/// Prelude
pub mod prelude {
    pub use crate::overlay::MessageOverlay;
    pub use crate::strip::{InventoryStrip, StripEntry};
    pub use crate::tooltip::Tooltip;
}
