//! Antagonist presence state machine

use crate::punishment::{PunishmentSequence, PunishmentStep};
use glam::Vec3;
use manor_core::{Clock, Deadline};
use serde::{Deserialize, Serialize};

/// Where the antagonist waits while hidden
pub const HIDDEN_POSITION: Vec3 = Vec3::new(0.0, -10.0, 0.0);

/// Where the antagonist stands while confronting the player
pub const CONFRONT_POSITION: Vec3 = Vec3::new(0.0, 0.0, -2.0);

/// Whether the antagonist is in the room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresenceState {
    /// Off-stage, countdown running
    Hidden,
    /// In the room, watching the player
    Visible,
}

/// Presence timing parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PresenceConfig {
    /// Countdown ticks between appearances
    pub initial_countdown: u32,
    /// Seconds between countdown ticks
    pub tick_interval: f32,
    /// Remaining ticks at which the footsteps warning is issued
    pub warning_threshold: u32,
    /// Seconds between the warning and the appearance
    pub appear_delay: f32,
    /// Seconds the antagonist stays visible when the player is innocent
    pub visible_duration: f32,
    /// Seconds between punishment steps
    pub punishment_step_delay: f32,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            initial_countdown: 25,
            tick_interval: 5.0,
            warning_threshold: 5,
            appear_delay: 3.0,
            visible_duration: 5.0,
            punishment_step_delay: 3.0,
        }
    }
}

/// What the presence machine reports back to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceEvent {
    /// Footsteps warning issued
    Warning,
    /// The antagonist entered the room
    Appeared,
    /// The antagonist left without incident
    Departed,
    /// Punishment: the catch is announced
    Caught,
    /// Punishment: the player is transformed
    Transformed,
    /// Punishment: game over
    GameOver,
    /// Punishment finished; the session should reset
    ResetRequested,
}

impl PresenceEvent {
    /// Player-facing message for this event, if it has one
    pub fn message(&self) -> Option<&'static str> {
        match self {
            PresenceEvent::Warning => Some("You hear footsteps approaching..."),
            PresenceEvent::Caught => Some("Manannan catches you practicing magic!"),
            PresenceEvent::Transformed => Some("He transforms you into a cat!"),
            PresenceEvent::GameOver => Some("GAME OVER"),
            _ => None,
        }
    }
}

/// The antagonist's hidden-countdown / appearance cycle
///
/// While [`PresenceState::Hidden`], a countdown ticks on a fixed interval.
/// At the warning threshold a footsteps warning fires and the appearance is
/// scheduled; on appearing, the caller-supplied verdict decides between a
/// timed departure and the punishment sequence. The countdown is inert
/// while the antagonist is visible or a punishment is playing out.
#[derive(Debug, Clone)]
pub struct AntagonistPresence {
    config: PresenceConfig,
    state: PresenceState,
    position: Vec3,
    countdown: u32,
    warning_issued: bool,
    next_tick: Deadline,
    appear: Deadline,
    depart: Deadline,
    punishment: Option<PunishmentSequence>,
    events: Vec<PresenceEvent>,
}

impl AntagonistPresence {
    /// Create a hidden antagonist with a full countdown
    pub fn new(clock: &Clock, config: PresenceConfig) -> Self {
        let mut next_tick = Deadline::new();
        next_tick.schedule_in(clock, config.tick_interval);
        Self {
            config,
            state: PresenceState::Hidden,
            position: HIDDEN_POSITION,
            countdown: config.initial_countdown,
            warning_issued: false,
            next_tick,
            appear: Deadline::new(),
            depart: Deadline::new(),
            punishment: None,
            events: Vec::new(),
        }
    }

    /// Current state
    pub fn state(&self) -> PresenceState {
        self.state
    }

    /// Current world position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Ticks remaining until the next appearance
    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    /// Whether the footsteps warning has fired for the current cycle
    pub fn warning_issued(&self) -> bool {
        self.warning_issued
    }

    /// Whether a punishment sequence is playing out
    pub fn punishing(&self) -> bool {
        self.punishment.is_some()
    }

    /// Take all events produced since the last drain, in order
    pub fn drain_events(&mut self) -> Vec<PresenceEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance one countdown tick
    ///
    /// Inert unless hidden with no appearance already scheduled, so ticks
    /// that land during an appearance or a punishment are lost rather than
    /// banked.
    pub fn tick(&mut self, clock: &Clock) {
        if self.state != PresenceState::Hidden
            || self.punishment.is_some()
            || self.appear.is_pending()
        {
            return;
        }

        self.countdown = self.countdown.saturating_sub(1);

        if self.countdown == self.config.warning_threshold && !self.warning_issued {
            self.warning_issued = true;
            self.events.push(PresenceEvent::Warning);
            self.appear.schedule_in(clock, self.config.appear_delay);
        } else if self.countdown == 0 {
            // Threshold skipped (e.g. a tiny countdown); appear without warning
            self.appear.schedule(clock.now());
        }
    }

    /// Make the antagonist appear on the next poll, skipping the countdown
    pub fn force_confront(&mut self, clock: &Clock) {
        if self.state == PresenceState::Hidden && self.punishment.is_none() {
            self.appear.schedule(clock.now());
        }
    }

    /// Poll the machine against the clock
    ///
    /// `forbidden_now` is the punishment verdict; it is read exactly once,
    /// at the moment the antagonist appears. Fires due deadlines, runs the
    /// internal tick cadence and pushes resulting events.
    pub fn poll(&mut self, clock: &Clock, forbidden_now: bool) {
        if self.next_tick.fire(clock) {
            self.next_tick.schedule_in(clock, self.config.tick_interval);
            self.tick(clock);
        }

        if self.appear.fire(clock) {
            self.enter_visible(clock, forbidden_now);
        }

        if self.depart.fire(clock) {
            self.enter_hidden();
        }

        if let Some(sequence) = &mut self.punishment {
            if let Some(step) = sequence.poll(clock) {
                self.events.push(match step {
                    PunishmentStep::Caught => PresenceEvent::Caught,
                    PunishmentStep::Transformed => PresenceEvent::Transformed,
                    PunishmentStep::GameOver => PresenceEvent::GameOver,
                    PunishmentStep::Reset => PresenceEvent::ResetRequested,
                });
            }
            if sequence.is_complete() {
                self.punishment = None;
            }
        }
    }

    /// Return to the hidden baseline, canceling everything in flight
    pub fn reset(&mut self, clock: &Clock) {
        self.state = PresenceState::Hidden;
        self.position = HIDDEN_POSITION;
        self.countdown = self.config.initial_countdown;
        self.warning_issued = false;
        self.appear.cancel();
        self.depart.cancel();
        self.punishment = None;
        self.events.clear();
        self.next_tick.schedule_in(clock, self.config.tick_interval);
    }

    fn enter_visible(&mut self, clock: &Clock, forbidden_now: bool) {
        self.state = PresenceState::Visible;
        self.position = CONFRONT_POSITION;
        self.events.push(PresenceEvent::Appeared);

        if forbidden_now {
            // Committed: the departure timer never runs
            self.punishment = Some(PunishmentSequence::new(
                clock,
                self.config.punishment_step_delay,
            ));
        } else {
            self.depart.schedule_in(clock, self.config.visible_duration);
        }
    }

    fn enter_hidden(&mut self) {
        self.state = PresenceState::Hidden;
        self.position = HIDDEN_POSITION;
        self.countdown = self.config.initial_countdown;
        self.warning_issued = false;
        self.events.push(PresenceEvent::Departed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(clock: &Clock) -> AntagonistPresence {
        AntagonistPresence::new(clock, PresenceConfig::default())
    }

    /// Run `poll` over a span in small steps
    fn run(presence: &mut AntagonistPresence, clock: &mut Clock, span: f32, forbidden: bool) {
        let steps = (span / 0.1).ceil() as u32;
        for _ in 0..steps {
            clock.advance(0.1);
            presence.poll(clock, forbidden);
        }
    }

    #[test]
    fn test_presence_cycle() {
        // From a fresh countdown of 25 with threshold 5: 20 ticks issue
        // exactly one warning and no appearance; the appearance follows
        // 3 seconds later; 5 seconds after that the antagonist is hidden
        // again with the countdown restored.
        let mut clock = Clock::new();
        let mut presence = machine(&clock);

        for _ in 0..20 {
            presence.tick(&clock);
        }
        let events = presence.drain_events();
        assert_eq!(events, vec![PresenceEvent::Warning]);
        assert_eq!(presence.countdown(), 5);
        assert!(presence.warning_issued());
        assert_eq!(presence.state(), PresenceState::Hidden);

        run(&mut presence, &mut clock, 3.1, false);
        assert_eq!(presence.state(), PresenceState::Visible);
        assert_eq!(presence.position(), CONFRONT_POSITION);
        assert_eq!(presence.drain_events(), vec![PresenceEvent::Appeared]);

        run(&mut presence, &mut clock, 5.1, false);
        assert_eq!(presence.state(), PresenceState::Hidden);
        assert_eq!(presence.position(), HIDDEN_POSITION);
        assert_eq!(presence.countdown(), 25);
        assert!(!presence.warning_issued());
        assert_eq!(presence.drain_events(), vec![PresenceEvent::Departed]);
    }

    #[test]
    fn test_warning_fires_once_per_cycle() {
        let mut clock = Clock::new();
        let mut presence = machine(&clock);

        for _ in 0..20 {
            presence.tick(&clock);
        }
        // Ticks past the threshold while the appearance is pending are inert
        for _ in 0..10 {
            presence.tick(&clock);
        }
        assert_eq!(presence.countdown(), 5);

        let warnings = presence
            .drain_events()
            .iter()
            .filter(|e| **e == PresenceEvent::Warning)
            .count();
        assert_eq!(warnings, 1);
    }

    #[test]
    fn test_countdown_inert_while_visible() {
        let mut clock = Clock::new();
        let mut presence = machine(&clock);
        presence.force_confront(&clock);
        clock.advance(0.1);
        presence.poll(&clock, false);
        assert_eq!(presence.state(), PresenceState::Visible);

        let before = presence.countdown();
        presence.tick(&clock);
        presence.tick(&clock);
        assert_eq!(presence.countdown(), before);
    }

    #[test]
    fn test_internal_tick_cadence() {
        let mut clock = Clock::new();
        let mut presence = machine(&clock);

        // Default interval is 5 seconds; 52 seconds is 10 ticks
        run(&mut presence, &mut clock, 52.0, false);
        assert_eq!(presence.countdown(), 15);
    }

    #[test]
    fn test_punishment_sequence_order_and_timing() {
        // When the antagonist appears during a forbidden act: catch message
        // immediately, transformation after one step delay, game over after
        // another, then a reset request. No departure fires.
        let mut clock = Clock::new();
        let mut presence = machine(&clock);

        presence.force_confront(&clock);
        clock.advance(0.1);
        presence.poll(&clock, true);
        presence.poll(&clock, true);
        assert_eq!(
            presence.drain_events(),
            vec![PresenceEvent::Appeared, PresenceEvent::Caught]
        );
        assert!(presence.punishing());

        run(&mut presence, &mut clock, 3.1, true);
        assert_eq!(presence.drain_events(), vec![PresenceEvent::Transformed]);

        run(&mut presence, &mut clock, 3.1, true);
        assert_eq!(presence.drain_events(), vec![PresenceEvent::GameOver]);

        run(&mut presence, &mut clock, 3.1, true);
        assert_eq!(presence.drain_events(), vec![PresenceEvent::ResetRequested]);
        assert!(!presence.punishing());

        // Still visible: the punishment path never schedules a departure
        assert_eq!(presence.state(), PresenceState::Visible);

        run(&mut presence, &mut clock, 10.0, false);
        assert!(presence.drain_events().is_empty());
    }

    #[test]
    fn test_verdict_read_once_at_appearance() {
        let mut clock = Clock::new();
        let mut presence = machine(&clock);
        presence.force_confront(&clock);
        clock.advance(0.1);
        presence.poll(&clock, false); // innocent at the moment of appearance

        // Becoming forbidden afterwards changes nothing for this visit
        run(&mut presence, &mut clock, 5.1, true);
        assert_eq!(presence.state(), PresenceState::Hidden);
        assert!(!presence.punishing());
    }

    #[test]
    fn test_reset_cancels_everything() {
        let mut clock = Clock::new();
        let mut presence = machine(&clock);

        for _ in 0..20 {
            presence.tick(&clock);
        }
        presence.reset(&clock);
        assert_eq!(presence.countdown(), 25);
        assert!(!presence.warning_issued());
        assert!(presence.drain_events().is_empty());

        // The canceled appearance never fires
        run(&mut presence, &mut clock, 10.0, false);
        assert_eq!(presence.state(), PresenceState::Hidden);
    }

    #[test]
    fn test_reset_during_punishment() {
        let mut clock = Clock::new();
        let mut presence = machine(&clock);
        presence.force_confront(&clock);
        clock.advance(0.1);
        presence.poll(&clock, true);
        assert!(presence.punishing());

        presence.reset(&clock);
        assert!(!presence.punishing());
        assert_eq!(presence.state(), PresenceState::Hidden);

        run(&mut presence, &mut clock, 20.0, false);
        let events = presence.drain_events();
        assert!(!events.contains(&PresenceEvent::Transformed));
        assert!(!events.contains(&PresenceEvent::ResetRequested));
    }

    #[test]
    fn test_tiny_countdown_appears_without_warning() {
        let mut clock = Clock::new();
        let config = PresenceConfig {
            initial_countdown: 2,
            warning_threshold: 5,
            ..PresenceConfig::default()
        };
        let mut presence = AntagonistPresence::new(&clock, config);

        presence.tick(&clock);
        presence.tick(&clock);
        assert!(presence.drain_events().is_empty());

        clock.advance(0.1);
        presence.poll(&clock, false);
        assert_eq!(presence.state(), PresenceState::Visible);
    }
}
