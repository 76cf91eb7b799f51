//! Item and fixture kinds

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error for unknown item tags
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown item kind: {0:?}")]
pub struct ItemKindError(pub String);

/// Kind tag for every interactable prop in the house
///
/// Portable items can enter the inventory; fixtures are inspect-only but
/// still carry a kind so hover text and registry lookups work the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    // Portable spell ingredients and tools
    Spellbook,
    Wand,
    EagleFeather,
    ChickenFeather,
    CatHair,
    DogHair,
    Thimble,
    RoseEssence,
    FlyWings,
    MagicStone,
    NightshadeJuice,
    MandrakeRoot,
    FishOil,
    Mistletoe,
    Acorns,
    // Fixtures
    Cauldron,
    FlourBarrel,
    Knife,
    Mirror,
    PorridgePot,
}

impl ItemKind {
    /// All kinds, in display order
    pub const ALL: [ItemKind; 20] = [
        ItemKind::Spellbook,
        ItemKind::Wand,
        ItemKind::EagleFeather,
        ItemKind::ChickenFeather,
        ItemKind::CatHair,
        ItemKind::DogHair,
        ItemKind::Thimble,
        ItemKind::RoseEssence,
        ItemKind::FlyWings,
        ItemKind::MagicStone,
        ItemKind::NightshadeJuice,
        ItemKind::MandrakeRoot,
        ItemKind::FishOil,
        ItemKind::Mistletoe,
        ItemKind::Acorns,
        ItemKind::Cauldron,
        ItemKind::FlourBarrel,
        ItemKind::Knife,
        ItemKind::Mirror,
        ItemKind::PorridgePot,
    ];

    /// Stable tag string
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Spellbook => "spellbook",
            ItemKind::Wand => "wand",
            ItemKind::EagleFeather => "eagle-feather",
            ItemKind::ChickenFeather => "chicken-feather",
            ItemKind::CatHair => "cat-hair",
            ItemKind::DogHair => "dog-hair",
            ItemKind::Thimble => "thimble",
            ItemKind::RoseEssence => "rose-essence",
            ItemKind::FlyWings => "fly-wings",
            ItemKind::MagicStone => "magic-stone",
            ItemKind::NightshadeJuice => "nightshade-juice",
            ItemKind::MandrakeRoot => "mandrake-root",
            ItemKind::FishOil => "fish-oil",
            ItemKind::Mistletoe => "mistletoe",
            ItemKind::Acorns => "acorns",
            ItemKind::Cauldron => "cauldron",
            ItemKind::FlourBarrel => "flour-barrel",
            ItemKind::Knife => "knife",
            ItemKind::Mirror => "mirror",
            ItemKind::PorridgePot => "porridge-pot",
        }
    }

    /// Three-letter tag for the inventory strip
    pub fn abbreviation(&self) -> String {
        self.as_str()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .take(3)
            .collect::<String>()
            .to_ascii_uppercase()
    }

    /// Whether this kind is a fixed piece of furniture
    pub fn is_fixture(&self) -> bool {
        matches!(
            self,
            ItemKind::Cauldron
                | ItemKind::FlourBarrel
                | ItemKind::Knife
                | ItemKind::Mirror
                | ItemKind::PorridgePot
        )
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = ItemKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ItemKindError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for kind in ItemKind::ALL {
            assert_eq!(kind.as_str().parse::<ItemKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let err = "golden-fleece".parse::<ItemKind>().unwrap_err();
        assert_eq!(err, ItemKindError("golden-fleece".to_string()));
    }

    #[test]
    fn test_abbreviation() {
        assert_eq!(ItemKind::Wand.abbreviation(), "WAN");
        assert_eq!(ItemKind::EagleFeather.abbreviation(), "EAG");
    }

    #[test]
    fn test_fixtures() {
        assert!(ItemKind::Cauldron.is_fixture());
        assert!(!ItemKind::Wand.is_fixture());
    }
}
