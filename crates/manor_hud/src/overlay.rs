//! Timed message overlay

use manor_core::{Clock, Deadline};
use std::collections::VecDeque;

/// Default seconds a message stays on screen
pub const DEFAULT_MESSAGE_DURATION: f32 = 3.0;

/// A banner that shows one message at a time
///
/// Messages queue in arrival order and each holds the screen for the
/// configured duration, so a burst (the punishment sequence) plays out
/// fully instead of the last message clobbering the rest.
#[derive(Debug, Clone)]
pub struct MessageOverlay {
    current: Option<String>,
    queue: VecDeque<String>,
    hide: Deadline,
    duration: f32,
}

impl MessageOverlay {
    /// Create an empty overlay with the default duration
    pub fn new() -> Self {
        Self::with_duration(DEFAULT_MESSAGE_DURATION)
    }

    /// Create an empty overlay with a custom per-message duration
    pub fn with_duration(duration: f32) -> Self {
        Self {
            current: None,
            queue: VecDeque::new(),
            hide: Deadline::new(),
            duration,
        }
    }

    /// Enqueue a message
    ///
    /// Shows immediately if nothing is on screen.
    pub fn show(&mut self, clock: &Clock, text: impl Into<String>) {
        let text = text.into();
        if self.current.is_none() {
            self.display(clock, text);
        } else {
            self.queue.push_back(text);
        }
    }

    /// Advance the overlay; expired messages yield to the queue
    pub fn poll(&mut self, clock: &Clock) {
        if self.hide.fire(clock) {
            match self.queue.pop_front() {
                Some(next) => self.display(clock, next),
                None => self.current = None,
            }
        }
    }

    /// The message currently on screen
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Messages waiting behind the current one
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Drop everything, screen included
    pub fn clear(&mut self) {
        self.current = None;
        self.queue.clear();
        self.hide.cancel();
    }

    fn display(&mut self, clock: &Clock, text: String) {
        log::debug!("overlay: {}", text);
        self.current = Some(text);
        self.hide.schedule_in(clock, self.duration);
    }
}

impl Default for MessageOverlay {
    fn default() -> Self {
        Self::new()
    }
}
