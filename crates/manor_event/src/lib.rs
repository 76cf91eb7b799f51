//! # manor_event - Typed Event Bus
//!
//! Publish/subscribe plumbing between simulation systems:
//! - Typed subscriptions with explicit unsubscribe
//! - FIFO queued delivery, drained once per tick
//! - Single-type channels for direct wiring
//!
//! The pickup protocol rides on this bus: the interactable registry
//! publishes without knowing whether an inventory (or any other consumer)
//! is listening, and consumers never assume delivery order relative to
//! other event types.

use parking_lot::Mutex;
use std::any::{Any, TypeId};
use std::collections::{BTreeMap, VecDeque};

/// Trait for events
pub trait Event: Send + Sync + 'static {}

// Blanket implementation
impl<T: Send + Sync + 'static> Event for T {}

/// Dynamic event handler
type DynamicHandler = Box<dyn Fn(&dyn Any) + Send + Sync>;

/// Queued event with its type tag
struct Envelope {
    type_id: TypeId,
    data: Box<dyn Any + Send + Sync>,
}

/// Subscriber handle returned by [`EventBus::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub u64);

/// Event bus for publishing and subscribing to events
pub struct EventBus {
    /// Pending events, FIFO
    queue: Mutex<VecDeque<Envelope>>,
    /// Typed handlers
    handlers: BTreeMap<TypeId, Vec<(SubscriberId, DynamicHandler)>>,
    /// Next subscriber id
    next_subscriber_id: u64,
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            handlers: BTreeMap::new(),
            next_subscriber_id: 1,
        }
    }

    /// Publish an event
    ///
    /// Queued until [`process`](Self::process); publishing with zero
    /// subscribers is a silent no-op.
    pub fn publish<E: Event>(&self, event: E) {
        self.queue.lock().push_back(Envelope {
            type_id: TypeId::of::<E>(),
            data: Box::new(event),
        });
    }

    /// Subscribe to an event type
    pub fn subscribe<E: Event, F>(&mut self, handler: F) -> SubscriberId
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let id = SubscriberId(self.next_subscriber_id);
        self.next_subscriber_id += 1;

        let wrapped: DynamicHandler = Box::new(move |any: &dyn Any| {
            if let Some(event) = any.downcast_ref::<E>() {
                handler(event);
            }
        });

        self.handlers
            .entry(TypeId::of::<E>())
            .or_default()
            .push((id, wrapped));

        id
    }

    /// Unsubscribe
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        for handlers in self.handlers.values_mut() {
            handlers.retain(|(sub_id, _)| *sub_id != id);
        }
    }

    /// Process all pending events in publish order
    pub fn process(&mut self) {
        // Drain first so handlers that publish do not extend this batch
        let events: Vec<Envelope> = self.queue.lock().drain(..).collect();

        for envelope in events {
            if let Some(handlers) = self.handlers.get(&envelope.type_id) {
                for (_, handler) in handlers {
                    handler(envelope.data.as_ref());
                }
            }
        }
    }

    /// Drop all pending events without dispatching
    pub fn clear(&self) {
        self.queue.lock().clear();
    }

    /// Get pending event count
    pub fn pending_count(&self) -> usize {
        self.queue.lock().len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Channel for single-type events
pub struct EventChannel<E: Event> {
    queue: Mutex<VecDeque<E>>,
}

impl<E: Event> EventChannel<E> {
    /// Create a new channel
    pub fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
        }
    }

    /// Send an event
    pub fn send(&self, event: E) {
        self.queue.lock().push_back(event);
    }

    /// Receive the oldest event
    pub fn receive(&self) -> Option<E> {
        self.queue.lock().pop_front()
    }

    /// Drain all events in send order
    pub fn drain(&self) -> Vec<E> {
        self.queue.lock().drain(..).collect()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }

    /// Get pending count
    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }
}

impl<E: Event> Default for EventChannel<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Prelude
pub mod prelude {
    pub use crate::{Event, EventBus, EventChannel, SubscriberId};
}
