//! Simulated clock and one-shot deadlines
//!
//! The session owns a single [`Clock`] and advances it once per host update.
//! Components that need to wait ("become visible in 3 seconds") hold a
//! [`Deadline`] and poll it against the clock instead of registering OS
//! timers. A deadline fires at most once per schedule and can be canceled,
//! so a session reset can never be observed by a stale callback.

/// Monotonic simulated time in seconds
///
/// Advanced explicitly by the owner; never reads the wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock {
    now: f32,
}

impl Clock {
    /// Create a clock at time zero
    pub fn new() -> Self {
        Self { now: 0.0 }
    }

    /// Current simulated time in seconds
    #[inline]
    pub fn now(&self) -> f32 {
        self.now
    }

    /// Advance the clock
    ///
    /// Negative deltas are ignored; time never runs backwards.
    pub fn advance(&mut self, delta: f32) {
        if delta > 0.0 {
            self.now += delta;
        }
    }
}

/// A one-shot scheduled moment
///
/// Each `schedule` supersedes any earlier pending schedule; `cancel` makes
/// the deadline inert. The generation counter ticks on every schedule,
/// cancel and fire, which lets callers detect whether a handle they took is
/// still current.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deadline {
    at: Option<f32>,
    generation: u32,
}

impl Deadline {
    /// Create an idle deadline
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the deadline, replacing any pending schedule
    pub fn schedule(&mut self, at: f32) {
        self.at = Some(at);
        self.generation = self.generation.wrapping_add(1);
    }

    /// Schedule relative to a clock
    pub fn schedule_in(&mut self, clock: &Clock, delay: f32) {
        self.schedule(clock.now() + delay);
    }

    /// Cancel any pending schedule
    pub fn cancel(&mut self) {
        if self.at.take().is_some() {
            self.generation = self.generation.wrapping_add(1);
        }
    }

    /// Whether a schedule is pending
    pub fn is_pending(&self) -> bool {
        self.at.is_some()
    }

    /// Time until the deadline fires, if pending
    pub fn remaining(&self, clock: &Clock) -> Option<f32> {
        self.at.map(|at| (at - clock.now()).max(0.0))
    }

    /// Fire the deadline if due
    ///
    /// Returns true at most once per schedule.
    pub fn fire(&mut self, clock: &Clock) -> bool {
        match self.at {
            Some(at) if clock.now() >= at => {
                self.at = None;
                self.generation = self.generation.wrapping_add(1);
                true
            }
            _ => false,
        }
    }

    /// Current generation, for stale-handle detection
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_advance() {
        let mut clock = Clock::new();
        clock.advance(1.5);
        clock.advance(0.5);
        assert_eq!(clock.now(), 2.0);

        // Time never runs backwards
        clock.advance(-10.0);
        assert_eq!(clock.now(), 2.0);
    }

    #[test]
    fn test_deadline_fires_once() {
        let mut clock = Clock::new();
        let mut deadline = Deadline::new();
        deadline.schedule_in(&clock, 3.0);

        clock.advance(2.9);
        assert!(!deadline.fire(&clock));
        assert!(deadline.is_pending());

        clock.advance(0.2);
        assert!(deadline.fire(&clock));
        assert!(!deadline.fire(&clock));
        assert!(!deadline.is_pending());
    }

    #[test]
    fn test_deadline_cancel() {
        let mut clock = Clock::new();
        let mut deadline = Deadline::new();
        deadline.schedule_in(&clock, 1.0);
        deadline.cancel();

        clock.advance(5.0);
        assert!(!deadline.fire(&clock));
    }

    #[test]
    fn test_reschedule_supersedes() {
        let mut clock = Clock::new();
        let mut deadline = Deadline::new();
        deadline.schedule_in(&clock, 1.0);
        let gen = deadline.generation();
        deadline.schedule_in(&clock, 10.0);
        assert_ne!(gen, deadline.generation());

        clock.advance(5.0);
        assert!(!deadline.fire(&clock));
        clock.advance(6.0);
        assert!(deadline.fire(&clock));
    }

    #[test]
    fn test_remaining() {
        let mut clock = Clock::new();
        let mut deadline = Deadline::new();
        deadline.schedule_in(&clock, 3.0);
        clock.advance(1.0);
        assert_eq!(deadline.remaining(&clock), Some(2.0));
    }
}
