//! # manor_inventory - Inventory Ledger
//!
//! An ordered ledger of picked-up items:
//! - Duplicates allowed, acquisition order preserved
//! - Removal takes the oldest matching entry
//! - Recipe checks and consumption for spell brewing
//!
//! The ledger is deliberately dumb about where items come from; the session
//! feeds it pickup events off the bus.

pub mod ledger;

pub use ledger::*;

/// Prelude
pub mod prelude {
    pub use crate::ledger::{BrewError, Disposal, InventoryLedger};
}
