//! Interactable props

use glam::Vec3;
use manor_core::Id;
use manor_items::ItemKind;
use serde::{Deserialize, Serialize};

/// Surface look of a prop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    /// Base color, linear RGB
    pub color: [f32; 3],
    /// Emissive term, nonzero while highlighted
    pub emissive: [f32; 3],
}

impl Appearance {
    /// A flat color with no glow
    pub fn flat(color: [f32; 3]) -> Self {
        Self {
            color,
            emissive: [0.0, 0.0, 0.0],
        }
    }

    /// This appearance with the hover glow applied
    pub fn highlighted(self) -> Self {
        Self {
            emissive: [0.3, 0.3, 0.0],
            ..self
        }
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::flat([0.8, 0.8, 0.8])
    }
}

/// A single prop the player can hover over and maybe pick up
///
/// Fixtures keep hover text but refuse pickup. The appearance captured
/// before the first highlight is what every un-hover restores, so repeated
/// or interleaved hovers can never bake the glow in.
#[derive(Debug, Clone)]
pub struct InteractableProp {
    id: Id,
    kind: ItemKind,
    description: String,
    position: Vec3,
    appearance: Appearance,
    base_appearance: Option<Appearance>,
    enabled: bool,
}

impl InteractableProp {
    /// Create an enabled prop
    pub fn new(id: Id, kind: ItemKind, description: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            description: description.into(),
            position: Vec3::ZERO,
            appearance: Appearance::default(),
            base_appearance: None,
            enabled: true,
        }
    }

    /// Set the world position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set the starting appearance
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    /// Prop id
    pub fn id(&self) -> Id {
        self.id
    }

    /// Item kind
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Hover text
    pub fn description(&self) -> &str {
        &self.description
    }

    /// World position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current appearance
    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    /// Whether the prop still responds to hover and pickup
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the prop can enter the inventory
    pub fn is_portable(&self) -> bool {
        !self.kind.is_fixture()
    }

    pub(crate) fn apply_highlight(&mut self) {
        if self.base_appearance.is_none() {
            self.base_appearance = Some(self.appearance);
        }
        // Highlight always derives from the stored base
        self.appearance = self.base_appearance.unwrap_or(self.appearance).highlighted();
    }

    pub(crate) fn clear_highlight(&mut self) {
        if let Some(base) = self.base_appearance {
            self.appearance = base;
        }
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
