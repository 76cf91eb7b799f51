//! Session wiring

use crate::layout::{self, TeleportPoint, HOUSE_BOUNDS, PLAYER_SPAWN};
use glam::{Vec2, Vec3};
use manor_core::{Clock, Id, IdGenerator};
use manor_event::EventBus;
use manor_hud::{InventoryStrip, MessageOverlay, Tooltip};
use manor_input::{InputMode, Locomotion, LocomotionConfig};
use manor_interact::{InteractError, InteractableProp, InteractableRegistry, PickupEvent};
use manor_inventory::{BrewError, InventoryLedger};
use manor_items::{ItemKind, Spell};
use manor_patrol::{PatrolAgent, PatrolConfig, PatrolError, PatrolRoute};
use manor_presence::{AntagonistPresence, PresenceConfig, PresenceEvent};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Session construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The cat route was invalid
    #[error("invalid patrol route: {0}")]
    Patrol(#[from] PatrolError),
}

/// Overall game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Normal play
    Playing,
    /// Caught; the reset is on its way
    GameOver,
}

/// Everything tunable about a session
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SessionConfig {
    pub presence: PresenceConfig,
    pub patrol: PatrolConfig,
    pub locomotion: LocomotionConfig,
    /// Whether immersive hardware is present
    pub vr_available: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            presence: PresenceConfig::default(),
            patrol: PatrolConfig::default(),
            locomotion: LocomotionConfig::default(),
            vr_available: false,
        }
    }
}

/// One run of the house simulation
///
/// Owns the clock, the event bus and every subsystem, and advances them all
/// from a single [`tick`](Session::tick). Pickups flow from the registry to
/// the ledger over the bus; presence events surface as overlay messages; a
/// completed punishment resets the whole session.
pub struct Session {
    config: SessionConfig,
    clock: Clock,
    bus: EventBus,
    ids: IdGenerator,
    registry: InteractableRegistry,
    ledger: Arc<Mutex<InventoryLedger>>,
    presence: AntagonistPresence,
    cat: PatrolAgent,
    cat_route: PatrolRoute,
    locomotion: Locomotion,
    input_mode: InputMode,
    tooltip: Tooltip,
    overlay: MessageOverlay,
    strip: InventoryStrip,
    teleport_points: Vec<TeleportPoint>,
    player_position: Vec3,
    practicing_magic: bool,
    state: GameState,
    reset_pending: bool,
}

impl Session {
    /// Build a session with the default house layout
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let clock = Clock::new();
        let ids = IdGenerator::new();

        let mut bus = EventBus::new();
        let ledger = Arc::new(Mutex::new(InventoryLedger::new()));
        let sink = ledger.clone();
        bus.subscribe(move |event: &PickupEvent| {
            sink.lock().on_pickup(event.kind);
        });

        let mut registry = InteractableRegistry::new();
        for spec in layout::house_props() {
            registry.register(
                InteractableProp::new(ids.next(), spec.kind, spec.description)
                    .with_position(spec.position),
            );
        }

        let cat_route = PatrolRoute::new(layout::cat_waypoints())?;
        let cat = PatrolAgent::new(cat_route.clone(), config.patrol);
        let presence = AntagonistPresence::new(&clock, config.presence);
        let input_mode = InputMode::select(config.vr_available);

        log::info!(
            "session: {} props, {} waypoints, {:?} input",
            registry.len(),
            cat_route.len(),
            input_mode
        );

        Ok(Self {
            config,
            clock,
            bus,
            ids,
            registry,
            ledger,
            presence,
            cat,
            cat_route,
            locomotion: Locomotion::new(config.locomotion),
            input_mode,
            tooltip: Tooltip::new(),
            overlay: MessageOverlay::new(),
            strip: InventoryStrip::new(),
            teleport_points: layout::teleport_points(),
            player_position: PLAYER_SPAWN,
            practicing_magic: false,
            state: GameState::Playing,
            reset_pending: false,
        })
    }

    /// Advance the whole simulation by `delta` seconds
    pub fn tick(&mut self, delta: f32) {
        self.clock.advance(delta);

        self.presence.poll(&self.clock, self.practicing_magic);
        for event in self.presence.drain_events() {
            if let Some(text) = event.message() {
                self.overlay.show(&self.clock, text);
            }
            match event {
                PresenceEvent::GameOver => self.state = GameState::GameOver,
                PresenceEvent::ResetRequested => self.reset_pending = true,
                _ => {}
            }
        }

        self.cat.advance(delta);
        self.bus.process();
        self.overlay.poll(&self.clock);

        let items: Vec<ItemKind> = self.ledger.lock().items().to_vec();
        self.strip.sync(&items);

        if self.reset_pending {
            self.reset_pending = false;
            self.reset();
        }
    }

    /// Return the session to its initial state
    ///
    /// Everything in flight is canceled; nothing scheduled before the reset
    /// can fire after it.
    pub fn reset(&mut self) {
        log::info!("session: reset");
        self.presence.reset(&self.clock);
        self.registry.reset();
        self.ledger.lock().clear();
        self.bus.clear();
        self.overlay.clear();
        self.tooltip.hide();
        self.strip.sync(&[]);
        self.cat = PatrolAgent::new(self.cat_route.clone(), self.config.patrol);
        self.player_position = PLAYER_SPAWN;
        self.practicing_magic = false;
        self.state = GameState::Playing;
    }

    // --- pointing and picking -------------------------------------------

    /// Pointer entered a prop
    pub fn hover_enter(&mut self, hit: Id) {
        self.registry.hover_enter(hit);
        self.tooltip.sync(self.registry.hover_text());
    }

    /// Pointer left a prop
    pub fn hover_exit(&mut self, hit: Id) {
        self.registry.hover_exit(hit);
        self.tooltip.sync(self.registry.hover_text());
    }

    /// Try to pick up a prop
    ///
    /// Taking the wizard's own tools counts as practicing magic.
    pub fn pick(&mut self, hit: Id) -> Result<ItemKind, InteractError> {
        let kind = self.registry.pick(hit, &self.bus)?;
        self.tooltip.sync(self.registry.hover_text());
        if matches!(kind, ItemKind::Spellbook | ItemKind::Wand) {
            self.practicing_magic = true;
        }
        Ok(kind)
    }

    /// Brew a spell from held ingredients
    ///
    /// Consumes the recipe from the ledger and marks the player as
    /// practicing magic.
    pub fn brew(&mut self, spell: Spell) -> Result<(), BrewError> {
        self.ledger.lock().consume_recipe(spell)?;
        self.practicing_magic = true;
        self.overlay
            .show(&self.clock, format!("You cast: {}", spell.name()));
        Ok(())
    }

    // --- movement ---------------------------------------------------------

    /// One tick of thumbstick movement, kept inside the house
    pub fn move_player(&mut self, stick: Vec2, view_yaw: f32) {
        self.player_position =
            self.locomotion
                .advance(self.player_position, stick, view_yaw, |candidate| {
                    !HOUSE_BOUNDS.contains(candidate)
                });
    }

    /// Use a teleport marker by name
    ///
    /// Returns true if the player moved.
    pub fn teleport(&mut self, name: &str) -> bool {
        let Some(point) = self.teleport_points.iter().find(|p| p.name == name) else {
            log::warn!("session: unknown teleport point {:?}", name);
            return false;
        };
        match point.destination {
            Some(destination) => {
                self.player_position = destination;
                true
            }
            None => {
                self.overlay
                    .show(&self.clock, "Second floor not yet implemented");
                false
            }
        }
    }

    // --- accessors ----------------------------------------------------------

    /// Simulated time
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Play / game over
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Selected input mode
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    /// Player head position
    pub fn player_position(&self) -> Vec3 {
        self.player_position
    }

    /// Whether the next appearance will catch the player
    pub fn practicing_magic(&self) -> bool {
        self.practicing_magic
    }

    /// The interactable registry
    pub fn registry(&self) -> &InteractableRegistry {
        &self.registry
    }

    /// Snapshot of held items in acquisition order
    pub fn inventory(&self) -> Vec<ItemKind> {
        self.ledger.lock().items().to_vec()
    }

    /// The antagonist
    pub fn presence(&self) -> &AntagonistPresence {
        &self.presence
    }

    /// The cat
    pub fn cat(&self) -> &PatrolAgent {
        &self.cat
    }

    /// The hover tooltip
    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// The message overlay
    pub fn overlay(&self) -> &MessageOverlay {
        &self.overlay
    }

    /// The inventory strip
    pub fn strip(&self) -> &InventoryStrip {
        &self.strip
    }

    /// Teleport markers
    pub fn teleport_points(&self) -> &[TeleportPoint] {
        &self.teleport_points
    }

    /// Allocate an id for a host-side object (mesh parts etc.)
    pub fn allocate_id(&self) -> Id {
        self.ids.next()
    }

    /// Find the prop for an item kind
    pub fn prop_id(&self, kind: ItemKind) -> Option<Id> {
        self.registry
            .iter()
            .find(|prop| prop.kind() == kind)
            .map(|prop| prop.id())
    }

    /// Skip the countdown and summon the antagonist now (debug)
    pub fn force_confrontation(&mut self) {
        self.presence.force_confront(&self.clock);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use manor_presence::PresenceState;

    fn session() -> Session {
        Session::new(SessionConfig::default()).unwrap()
    }

    /// Tick in small steps for `span` seconds
    fn run(session: &mut Session, span: f32) {
        let steps = (span / 0.1).ceil() as u32;
        for _ in 0..steps {
            session.tick(0.1);
        }
    }

    #[test]
    fn test_default_layout() {
        let session = session();
        assert_eq!(session.registry().len(), 14);
        assert_eq!(session.input_mode(), InputMode::Pointer);
        assert_eq!(session.state(), GameState::Playing);
        assert_eq!(session.player_position(), PLAYER_SPAWN);
        assert!(session.inventory().is_empty());
    }

    #[test]
    fn test_pickup_reaches_ledger_and_strip() {
        let mut session = session();
        let thimble = session.prop_id(ItemKind::Thimble).unwrap();

        assert_eq!(session.pick(thimble), Ok(ItemKind::Thimble));
        session.tick(0.1);

        assert_eq!(session.inventory(), vec![ItemKind::Thimble]);
        assert_eq!(session.strip().entries()[0].label, "THI");
    }

    #[test]
    fn test_double_pick_stores_once() {
        let mut session = session();
        let feather = session.prop_id(ItemKind::ChickenFeather).unwrap();

        session.pick(feather).unwrap();
        assert!(session.pick(feather).is_err());
        session.tick(0.1);

        assert_eq!(session.inventory().len(), 1);
    }

    #[test]
    fn test_hover_drives_tooltip() {
        let mut session = session();
        let mirror = session.prop_id(ItemKind::Mirror).unwrap();

        session.hover_enter(mirror);
        assert_eq!(
            session.tooltip().text(),
            Some("An ornate mirror. Your reflection looks nervous.")
        );

        session.hover_exit(mirror);
        assert!(!session.tooltip().is_visible());
    }

    #[test]
    fn test_innocent_visit_passes() {
        let mut session = session();
        session.force_confrontation();
        run(&mut session, 0.2);
        assert_eq!(session.presence().state(), PresenceState::Visible);

        run(&mut session, 5.2);
        assert_eq!(session.presence().state(), PresenceState::Hidden);
        assert_eq!(session.state(), GameState::Playing);
    }

    #[test]
    fn test_caught_practicing_magic_resets_session() {
        let mut session = session();
        let wand = session.prop_id(ItemKind::Wand).unwrap();
        session.pick(wand).unwrap();
        session.tick(0.1);
        assert!(session.practicing_magic());

        session.force_confrontation();
        session.tick(0.1);
        assert_eq!(
            session.overlay().current(),
            Some("Manannan catches you practicing magic!")
        );

        // Transformation, game over, then the reset request
        run(&mut session, 3.2);
        assert_eq!(
            session.overlay().current(),
            Some("He transforms you into a cat!")
        );

        run(&mut session, 3.2);
        assert_eq!(session.overlay().current(), Some("GAME OVER"));
        assert_eq!(session.state(), GameState::GameOver);

        run(&mut session, 3.2);
        // Reset: fresh ledger, re-enabled props, back to playing
        assert_eq!(session.state(), GameState::Playing);
        assert!(session.inventory().is_empty());
        assert!(!session.practicing_magic());
        assert_eq!(session.presence().state(), PresenceState::Hidden);
        assert_eq!(session.presence().countdown(), 25);
        assert!(session.pick(wand).is_ok());
    }

    #[test]
    fn test_brew_consumes_and_marks_magic() {
        let mut session = session();
        for kind in [ItemKind::EagleFeather, ItemKind::Mistletoe] {
            let id = session.prop_id(kind).unwrap();
            session.pick(id).unwrap();
        }
        session.tick(0.1);

        // Missing fly wings
        assert_eq!(
            session.brew(Spell::FlyLikeEagle),
            Err(BrewError::MissingIngredient(ItemKind::FlyWings))
        );
        assert!(!session.practicing_magic());
        assert_eq!(session.inventory().len(), 2);
    }

    #[test]
    fn test_teleport() {
        let mut session = session();
        assert!(session.teleport("main_to_kitchen"));
        assert_eq!(session.player_position(), Vec3::new(0.0, 1.6, 6.0));

        assert!(!session.teleport("main_to_upstairs"));
        session.tick(0.0);
        assert_eq!(
            session.overlay().current(),
            Some("Second floor not yet implemented")
        );

        assert!(!session.teleport("main_to_basement"));
    }

    #[test]
    fn test_movement_respects_bounds() {
        let mut session = session();
        // Walk east into the wall
        for _ in 0..10_000 {
            session.move_player(Vec2::new(1.0, 0.0), 0.0);
        }
        let pos = session.player_position();
        assert!(HOUSE_BOUNDS.contains(pos));
        assert!(pos.x <= HOUSE_BOUNDS.max.x);
    }

    #[test]
    fn test_cat_patrols_during_play() {
        let mut session = session();
        let start_arrivals = session.cat().arrivals();
        run(&mut session, 30.0);
        assert!(session.cat().arrivals() > start_arrivals);
    }
}
