//! Registry of hoverable, pickable props

use crate::prop::InteractableProp;
use manor_core::Id;
use manor_event::EventBus;
use manor_items::ItemKind;
use std::collections::BTreeMap;
use thiserror::Error;

/// Pickup protocol errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InteractError {
    /// No prop registered under this id
    #[error("unknown interactable: {0}")]
    UnknownProp(Id),
    /// Fixtures cannot be picked up
    #[error("{0} is fixed in place")]
    NotPortable(ItemKind),
    /// The prop was already taken or disabled
    #[error("interactable {0} is disabled")]
    Disabled(Id),
}

/// Published on the bus when a pickup succeeds
///
/// Published exactly once per prop: the prop is disabled before the event
/// leaves the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickupEvent {
    /// The prop that was taken
    pub prop: Id,
    /// What it was
    pub kind: ItemKind,
}

/// All interactables in the house, keyed by id
///
/// Child mesh parts can be registered against their owning prop, so a
/// pointer ray hitting any part resolves to the whole prop. Hover state is
/// last-entered-wins: pointing at a second prop before leaving the first
/// moves the hover text to the second.
#[derive(Debug, Default)]
pub struct InteractableRegistry {
    props: BTreeMap<Id, InteractableProp>,
    parts: BTreeMap<Id, Id>,
    hovered: Option<Id>,
}

impl InteractableRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a prop
    pub fn register(&mut self, prop: InteractableProp) -> Id {
        let id = prop.id();
        log::debug!("registry: registered {} as {}", prop.kind(), id);
        self.props.insert(id, prop);
        id
    }

    /// Map a child mesh part to its owning prop
    pub fn register_part(&mut self, part: Id, prop: Id) {
        self.parts.insert(part, prop);
    }

    /// Resolve a ray hit to a prop id
    ///
    /// Accepts either the prop id itself or any registered part id.
    pub fn resolve(&self, hit: Id) -> Option<Id> {
        if self.props.contains_key(&hit) {
            Some(hit)
        } else {
            self.parts.get(&hit).copied()
        }
    }

    /// Look up a prop
    pub fn prop(&self, id: Id) -> Option<&InteractableProp> {
        self.props.get(&id)
    }

    /// Number of registered props
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Whether no props are registered
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Iterate all props
    pub fn iter(&self) -> impl Iterator<Item = &InteractableProp> {
        self.props.values()
    }

    /// The prop currently under the pointer, if any
    pub fn hovered(&self) -> Option<Id> {
        self.hovered
    }

    /// Hover text for the current hover, if any
    pub fn hover_text(&self) -> Option<&str> {
        self.hovered
            .and_then(|id| self.props.get(&id))
            .map(|prop| prop.description())
    }

    /// Pointer entered a prop (or one of its parts)
    ///
    /// Highlights the prop and takes over the hover; returns the hover
    /// text. Disabled props do not react.
    pub fn hover_enter(&mut self, hit: Id) -> Option<&str> {
        let id = self.resolve(hit)?;
        let prop = self.props.get_mut(&id)?;
        if !prop.is_enabled() {
            return None;
        }
        prop.apply_highlight();
        self.hovered = Some(id);
        self.hover_text()
    }

    /// Pointer left a prop (or one of its parts)
    ///
    /// Restores the prop's pre-highlight appearance. The hover only clears
    /// if this prop still owns it; leaving a prop the pointer already moved
    /// on from never clobbers the newer hover.
    pub fn hover_exit(&mut self, hit: Id) {
        let Some(id) = self.resolve(hit) else {
            return;
        };
        if let Some(prop) = self.props.get_mut(&id) {
            prop.clear_highlight();
        }
        if self.hovered == Some(id) {
            self.hovered = None;
        }
    }

    /// Attempt to pick up a prop
    ///
    /// The prop is disabled and un-hovered before the [`PickupEvent`] is
    /// published, so no retry or double-click can dispatch it twice.
    pub fn pick(&mut self, hit: Id, bus: &EventBus) -> Result<ItemKind, InteractError> {
        let id = self.resolve(hit).ok_or(InteractError::UnknownProp(hit))?;
        let prop = self
            .props
            .get_mut(&id)
            .ok_or(InteractError::UnknownProp(id))?;

        if !prop.is_enabled() {
            return Err(InteractError::Disabled(id));
        }
        if !prop.is_portable() {
            return Err(InteractError::NotPortable(prop.kind()));
        }

        prop.set_enabled(false);
        prop.clear_highlight();
        let kind = prop.kind();
        if self.hovered == Some(id) {
            self.hovered = None;
        }

        log::info!("registry: picked up {} ({})", kind, id);
        bus.publish(PickupEvent { prop: id, kind });
        Ok(kind)
    }

    /// Re-enable every prop and drop hover state
    pub fn reset(&mut self) {
        for prop in self.props.values_mut() {
            prop.set_enabled(true);
            prop.clear_highlight();
        }
        self.hovered = None;
    }
}
