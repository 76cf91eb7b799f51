//! Default house layout
//!
//! Rooms, prop placements, the cat's patrol route and the teleport markers
//! of Manannan's house. Positions are in world space; room furniture
//! offsets are already applied.

use glam::Vec3;
use manor_items::ItemKind;
use serde::{Deserialize, Serialize};

/// Rooms of the house
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Room {
    MainHall,
    Kitchen,
    Study,
    GwydionBedroom,
    ManannanLaboratory,
}

impl Room {
    /// Stable room tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Room::MainHall => "main_hall",
            Room::Kitchen => "kitchen",
            Room::Study => "study",
            Room::GwydionBedroom => "gwydion_bedroom",
            Room::ManannanLaboratory => "manannan_laboratory",
        }
    }
}

/// Where the player starts and returns after a reset
pub const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 1.6, 0.0);

/// Walkable extent of the ground floor
#[derive(Debug, Clone, Copy)]
pub struct HouseBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl HouseBounds {
    /// Whether a point lies inside the walkable extent
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

/// Ground floor extent: study to the west, kitchen to the north
pub const HOUSE_BOUNDS: HouseBounds = HouseBounds {
    min: Vec3::new(-15.0, 0.0, -5.0),
    max: Vec3::new(5.0, 4.0, 15.0),
};

/// A prop placement
#[derive(Debug, Clone, Copy)]
pub struct PropSpec {
    pub kind: ItemKind,
    pub room: Room,
    pub position: Vec3,
    pub description: &'static str,
}

/// Every prop placed in the house
///
/// The kitchen sits at +10 on z and the study at -10 on x relative to the
/// main hall.
pub fn house_props() -> Vec<PropSpec> {
    vec![
        // Main hall
        PropSpec {
            kind: ItemKind::Spellbook,
            room: Room::MainHall,
            position: Vec3::new(-3.0, 1.2, -2.0),
            description: "Manannan's spell book. Better not touch it unless he's away!",
        },
        PropSpec {
            kind: ItemKind::Wand,
            room: Room::MainHall,
            position: Vec3::new(-2.8, 1.2, -1.8),
            description: "Manannan's wand. It seems to emit a faint magical glow.",
        },
        PropSpec {
            kind: ItemKind::Cauldron,
            room: Room::MainHall,
            position: Vec3::new(2.0, 0.3, -3.0),
            description: "A large iron cauldron. Perfect for brewing potions!",
        },
        PropSpec {
            kind: ItemKind::ChickenFeather,
            room: Room::MainHall,
            position: Vec3::new(1.5, 0.8, 1.0),
            description: "A white chicken feather. Useful for certain spells.",
        },
        PropSpec {
            kind: ItemKind::Thimble,
            room: Room::MainHall,
            position: Vec3::new(0.8, 2.15, -4.3),
            description: "A small thimble resting on the mantle.",
        },
        // Kitchen
        PropSpec {
            kind: ItemKind::FishOil,
            room: Room::Kitchen,
            position: Vec3::new(-3.0, 1.05, 7.0),
            description: "A jar of fish oil. It smells terrible.",
        },
        PropSpec {
            kind: ItemKind::MandrakeRoot,
            room: Room::Kitchen,
            position: Vec3::new(3.0, 1.2, 5.7),
            description: "A gnarled mandrake root from the shelf.",
        },
        PropSpec {
            kind: ItemKind::FlourBarrel,
            room: Room::Kitchen,
            position: Vec3::new(-2.5, 0.5, 7.5),
            description: "A barrel of flour for baking bread.",
        },
        PropSpec {
            kind: ItemKind::PorridgePot,
            room: Room::Kitchen,
            position: Vec3::new(0.0, 0.5, 7.0),
            description: "A pot of porridge, still warm.",
        },
        PropSpec {
            kind: ItemKind::Knife,
            room: Room::Kitchen,
            position: Vec3::new(-3.0, 1.1, 7.2),
            description: "A sharp kitchen knife. Best left where it is.",
        },
        // Study
        PropSpec {
            kind: ItemKind::Mistletoe,
            room: Room::Study,
            position: Vec3::new(-13.0, 0.85, 0.0),
            description: "A sprig of mistletoe pressed between papers.",
        },
        PropSpec {
            kind: ItemKind::Mirror,
            room: Room::Study,
            position: Vec3::new(-14.0, 1.5, -3.0),
            description: "An ornate mirror. Your reflection looks nervous.",
        },
        PropSpec {
            kind: ItemKind::EagleFeather,
            room: Room::Study,
            position: Vec3::new(-13.5, 0.85, 0.2),
            description: "An eagle feather. An essential component for the flying spell.",
        },
        PropSpec {
            kind: ItemKind::Acorns,
            room: Room::Study,
            position: Vec3::new(-12.0, 0.1, -4.0),
            description: "A handful of acorns. Might be useful for a spell ingredient.",
        },
    ]
}

/// The cat's route through the ground floor
pub fn cat_waypoints() -> Vec<Vec3> {
    vec![
        Vec3::new(2.0, 0.0, 2.0),    // main hall center
        Vec3::new(-3.0, 0.0, -3.0),  // near the fireplace
        Vec3::new(-8.0, 0.0, 0.0),   // study entrance
        Vec3::new(-12.0, 0.0, -4.0), // study corner
        Vec3::new(-12.0, 0.0, 0.0),  // near the bookshelf
        Vec3::new(-8.0, 0.0, 0.0),   // back to the study entrance
        Vec3::new(0.0, 0.0, 0.0),    // main hall
        Vec3::new(0.0, 0.0, 8.0),    // kitchen entrance
        Vec3::new(-3.0, 0.0, 12.0),  // kitchen corner
        Vec3::new(0.0, 0.0, 8.0),    // back to the kitchen entrance
        Vec3::new(3.0, 0.0, 3.0),    // near the stairs
    ]
}

/// A teleport marker on the floor
#[derive(Debug, Clone, Copy)]
pub struct TeleportPoint {
    pub name: &'static str,
    pub label: &'static str,
    pub position: Vec3,
    /// Where the player lands; `None` marks an unimplemented destination
    pub destination: Option<Vec3>,
}

/// Teleport markers between rooms
pub fn teleport_points() -> Vec<TeleportPoint> {
    vec![
        TeleportPoint {
            name: "main_to_kitchen",
            label: "To Kitchen",
            position: Vec3::new(0.0, 0.0, 5.0),
            destination: Some(Vec3::new(0.0, 1.6, 6.0)),
        },
        TeleportPoint {
            name: "kitchen_to_main",
            label: "To Main Hall",
            position: Vec3::new(0.0, 0.0, 5.0),
            destination: Some(Vec3::new(0.0, 1.6, 4.0)),
        },
        TeleportPoint {
            name: "main_to_study",
            label: "To Study",
            position: Vec3::new(-5.0, 0.0, 0.0),
            destination: Some(Vec3::new(-6.0, 1.6, 0.0)),
        },
        TeleportPoint {
            name: "study_to_main",
            label: "To Main Hall",
            position: Vec3::new(-5.0, 0.0, 0.0),
            destination: Some(Vec3::new(-4.0, 1.6, 0.0)),
        },
        TeleportPoint {
            name: "main_to_upstairs",
            label: "Upstairs",
            position: Vec3::new(4.0, 0.0, -3.0),
            destination: None,
        },
    ]
}
