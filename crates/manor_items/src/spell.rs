//! Spell recipes
//!
//! Pure recipe data; casting effects are the host's concern. The inventory
//! ledger answers "can this be brewed" against these ingredient lists.

use crate::item::ItemKind;
use serde::{Deserialize, Serialize};

/// The spells Manannan keeps in his study
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spell {
    TransformSelf,
    FlyLikeEagle,
    TeleportAway,
    BrewStorm,
    Understanding,
    Invisible,
}

impl Spell {
    /// All spells
    pub const ALL: [Spell; 6] = [
        Spell::TransformSelf,
        Spell::FlyLikeEagle,
        Spell::TeleportAway,
        Spell::BrewStorm,
        Spell::Understanding,
        Spell::Invisible,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Spell::TransformSelf => "Transform Self",
            Spell::FlyLikeEagle => "Fly Like an Eagle",
            Spell::TeleportAway => "Teleport Away",
            Spell::BrewStorm => "Brew Storm",
            Spell::Understanding => "Understanding",
            Spell::Invisible => "Invisible",
        }
    }

    /// Ingredients consumed when the spell is brewed
    pub fn ingredients(&self) -> &'static [ItemKind] {
        match self {
            Spell::TransformSelf => &[ItemKind::CatHair, ItemKind::MandrakeRoot],
            Spell::FlyLikeEagle => &[ItemKind::EagleFeather, ItemKind::FlyWings],
            Spell::TeleportAway => &[ItemKind::Mistletoe, ItemKind::MagicStone],
            Spell::BrewStorm => &[ItemKind::NightshadeJuice, ItemKind::FishOil],
            Spell::Understanding => &[ItemKind::DogHair, ItemKind::RoseEssence],
            Spell::Invisible => &[ItemKind::Thimble, ItemKind::ChickenFeather],
        }
    }
}
