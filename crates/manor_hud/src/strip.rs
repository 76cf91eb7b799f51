//! Inventory strip view-model

use manor_items::ItemKind;
use serde::{Deserialize, Serialize};

/// One slot of the inventory strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripEntry {
    /// The held item
    pub kind: ItemKind,
    /// Three-letter tag shown in the slot
    pub label: String,
}

/// The inventory strip along the bottom of the view
///
/// Rebuilt from the ledger after every change; slots appear in acquisition
/// order with three-letter uppercase tags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryStrip {
    entries: Vec<StripEntry>,
}

impl InventoryStrip {
    /// Create an empty strip
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the strip from the ledger contents
    pub fn sync(&mut self, items: &[ItemKind]) {
        self.entries = items
            .iter()
            .map(|kind| StripEntry {
                kind: *kind,
                label: kind.abbreviation(),
            })
            .collect();
    }

    /// Slots in display order
    pub fn entries(&self) -> &[StripEntry] {
        &self.entries
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the strip is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
