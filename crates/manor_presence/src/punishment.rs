//! Punishment sequence
//!
//! Once the antagonist catches the player, a fixed series of steps plays
//! out on a timer and ends with a session reset request. The sequence is
//! committed when it starts; nothing the player does afterwards can stop
//! it short of a full reset.

use manor_core::{Clock, Deadline};
use std::collections::VecDeque;

/// One step of the punishment sequence, in play order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunishmentStep {
    /// The antagonist announces the catch
    Caught,
    /// The player is transformed
    Transformed,
    /// Game over banner
    GameOver,
    /// Ask the session to reset
    Reset,
}

/// A timed walk through the punishment steps
///
/// The first step fires on the next poll; each following step fires after
/// the configured delay. At most one step fires per poll.
#[derive(Debug, Clone)]
pub struct PunishmentSequence {
    pending: VecDeque<PunishmentStep>,
    next: Deadline,
    step_delay: f32,
}

impl PunishmentSequence {
    /// Begin the sequence at the current clock time
    pub fn new(clock: &Clock, step_delay: f32) -> Self {
        let pending = VecDeque::from([
            PunishmentStep::Caught,
            PunishmentStep::Transformed,
            PunishmentStep::GameOver,
            PunishmentStep::Reset,
        ]);
        let mut next = Deadline::new();
        next.schedule(clock.now());
        Self {
            pending,
            next,
            step_delay,
        }
    }

    /// Poll the sequence, returning the step that fired, if any
    pub fn poll(&mut self, clock: &Clock) -> Option<PunishmentStep> {
        if !self.next.fire(clock) {
            return None;
        }
        let step = self.pending.pop_front();
        if !self.pending.is_empty() {
            self.next.schedule_in(clock, self.step_delay);
        }
        step
    }

    /// Whether every step has fired
    pub fn is_complete(&self) -> bool {
        self.pending.is_empty() && !self.next.is_pending()
    }

    /// Steps not yet fired
    pub fn remaining_steps(&self) -> usize {
        self.pending.len()
    }
}
