//! Ordered item ledger

use manor_items::{ItemKind, Spell};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from brewing against the ledger
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrewError {
    /// A required ingredient is not in the ledger
    #[error("missing ingredient: {0}")]
    MissingIngredient(ItemKind),
}

/// Outcome of offering a picked item to the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposal {
    /// Stored; carries the new count of that kind
    Stored(usize),
    /// Fixtures never enter the inventory
    RejectedFixture,
}

/// An ordered, duplicate-friendly list of held items
///
/// Entries keep acquisition order; removing a kind takes its oldest entry
/// and leaves the relative order of everything else untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryLedger {
    items: Vec<ItemKind>,
}

impl InventoryLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item, returning the new count of that kind
    pub fn add_item(&mut self, kind: ItemKind) -> usize {
        self.items.push(kind);
        log::debug!("inventory: added {} ({} total)", kind, self.items.len());
        self.count_item(kind)
    }

    /// Remove the oldest entry of `kind`
    ///
    /// Returns false if no entry of that kind exists.
    pub fn remove_item(&mut self, kind: ItemKind) -> bool {
        match self.items.iter().position(|entry| *entry == kind) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Offer a picked item to the ledger
    ///
    /// Fixtures are rejected; everything else is stored.
    pub fn on_pickup(&mut self, kind: ItemKind) -> Disposal {
        if kind.is_fixture() {
            log::warn!("inventory: refusing fixture {}", kind);
            return Disposal::RejectedFixture;
        }
        Disposal::Stored(self.add_item(kind))
    }

    /// Whether at least one entry of `kind` is held
    pub fn has_item(&self, kind: ItemKind) -> bool {
        self.items.contains(&kind)
    }

    /// Number of entries of `kind`
    pub fn count_item(&self, kind: ItemKind) -> usize {
        self.items.iter().filter(|entry| **entry == kind).count()
    }

    /// All entries in acquisition order
    pub fn items(&self) -> &[ItemKind] {
        &self.items
    }

    /// Total entry count
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the ledger is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop everything
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Whether every ingredient of `spell` is held
    ///
    /// Duplicate ingredients in a recipe each need their own entry.
    pub fn can_brew(&self, spell: Spell) -> bool {
        let mut scratch = self.items.clone();
        for ingredient in spell.ingredients() {
            match scratch.iter().position(|entry| entry == ingredient) {
                Some(index) => {
                    scratch.remove(index);
                }
                None => return false,
            }
        }
        true
    }

    /// Consume the ingredients of `spell`
    ///
    /// All-or-nothing: on a missing ingredient the ledger is unchanged.
    pub fn consume_recipe(&mut self, spell: Spell) -> Result<(), BrewError> {
        let mut remaining = self.items.clone();
        for ingredient in spell.ingredients() {
            match remaining.iter().position(|entry| entry == ingredient) {
                Some(index) => {
                    remaining.remove(index);
                }
                None => return Err(BrewError::MissingIngredient(*ingredient)),
            }
        }
        self.items = remaining;
        log::info!("inventory: brewed {}", spell.name());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquisition_order_preserved() {
        let mut ledger = InventoryLedger::new();
        ledger.add_item(ItemKind::Wand);
        ledger.add_item(ItemKind::CatHair);
        ledger.add_item(ItemKind::Wand);
        ledger.add_item(ItemKind::Mistletoe);

        assert_eq!(
            ledger.items(),
            &[
                ItemKind::Wand,
                ItemKind::CatHair,
                ItemKind::Wand,
                ItemKind::Mistletoe
            ]
        );
    }

    #[test]
    fn test_remove_takes_oldest_and_keeps_order() {
        // Removing one entry leaves len - 1 entries with the relative
        // order of the survivors unchanged.
        let mut ledger = InventoryLedger::new();
        ledger.add_item(ItemKind::Wand);
        ledger.add_item(ItemKind::CatHair);
        ledger.add_item(ItemKind::Wand);

        assert!(ledger.remove_item(ItemKind::Wand));
        assert_eq!(ledger.items(), &[ItemKind::CatHair, ItemKind::Wand]);
        assert_eq!(ledger.len(), 2);

        assert!(!ledger.remove_item(ItemKind::Acorns));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_add_remove_round_trip() {
        let mut ledger = InventoryLedger::new();
        ledger.add_item(ItemKind::CatHair);
        let len_before = ledger.len();

        ledger.add_item(ItemKind::Wand);
        assert!(ledger.remove_item(ItemKind::Wand));
        assert!(!ledger.has_item(ItemKind::Wand));
        assert_eq!(ledger.len(), len_before);

        // Removing from an empty ledger fails and changes nothing
        let mut empty = InventoryLedger::new();
        assert!(!empty.remove_item(ItemKind::Wand));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_add_returns_kind_count() {
        let mut ledger = InventoryLedger::new();
        assert_eq!(ledger.add_item(ItemKind::Acorns), 1);
        assert_eq!(ledger.add_item(ItemKind::Acorns), 2);
        assert_eq!(ledger.add_item(ItemKind::Wand), 1);
        assert_eq!(ledger.count_item(ItemKind::Acorns), 2);
    }

    #[test]
    fn test_fixture_pickup_rejected() {
        let mut ledger = InventoryLedger::new();
        assert_eq!(
            ledger.on_pickup(ItemKind::Cauldron),
            Disposal::RejectedFixture
        );
        assert!(ledger.is_empty());

        assert_eq!(ledger.on_pickup(ItemKind::Thimble), Disposal::Stored(1));
        assert!(ledger.has_item(ItemKind::Thimble));
    }

    #[test]
    fn test_can_brew_and_consume() {
        let mut ledger = InventoryLedger::new();
        ledger.add_item(ItemKind::CatHair);
        assert!(!ledger.can_brew(Spell::TransformSelf));

        ledger.add_item(ItemKind::MandrakeRoot);
        assert!(ledger.can_brew(Spell::TransformSelf));

        ledger.consume_recipe(Spell::TransformSelf).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_consume_is_all_or_nothing() {
        let mut ledger = InventoryLedger::new();
        ledger.add_item(ItemKind::CatHair);

        let err = ledger.consume_recipe(Spell::TransformSelf).unwrap_err();
        assert_eq!(err, BrewError::MissingIngredient(ItemKind::MandrakeRoot));
        // The cat hair is still there
        assert_eq!(ledger.items(), &[ItemKind::CatHair]);
    }

    #[test]
    fn test_clear() {
        let mut ledger = InventoryLedger::new();
        ledger.add_item(ItemKind::Wand);
        ledger.clear();
        assert!(ledger.is_empty());
    }
}
