//! Thread-safe event bus using mpsc channels.
//!
//! The bus provides a simple hand-off where:
//! - Any thread can publish events via `EventPublisher::publish()`
//! - The UI thread polls for events via `EventBus::drain()`
//!
//! A publisher may carry a waker so an idle UI loop is nudged to drain.

use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;

use super::types::AppEvent;

/// Callback run after each publish, typically a UI repaint request.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

/// Single-consumer event queue owned by the UI thread.
///
/// # Example
///
/// ```
/// use umpb::events::{AppEvent, EventBus};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(AppEvent::ToggleOverlay);
///
/// let events = bus.drain();
/// assert_eq!(events.len(), 1);
/// ```
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    /// Create a new event bus.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle that can be cloned and sent to other threads.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
            waker: None,
        }
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            // The bus holds its own sender, so Disconnected cannot happen
            // while it is alive.
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events into a Vec, in publish order.
    pub fn drain(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe event publisher.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
    waker: Option<Waker>,
}

impl EventPublisher {
    /// Attach a waker that runs after every successful publish.
    pub fn with_waker(mut self, waker: impl Fn() + Send + Sync + 'static) -> Self {
        self.waker = Some(Arc::new(waker));
        self
    }

    /// Publish an event to the bus.
    ///
    /// Non-blocking. If the bus has been dropped (app shutting down) the
    /// event is discarded.
    pub fn publish(&self, event: AppEvent) {
        if self.sender.send(event).is_err() {
            return;
        }
        if let Some(waker) = &self.waker {
            waker();
        }
    }
}

impl fmt::Debug for EventPublisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventPublisher")
            .field("has_waker", &self.waker.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn test_create_bus() {
        let bus = EventBus::new();
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publish_and_receive_multiple_events() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::ToggleOverlay);
        publisher.publish(AppEvent::TriggerTile(2));

        let events = bus.drain();
        assert_eq!(events, vec![AppEvent::ToggleOverlay, AppEvent::TriggerTile(2)]);
    }

    #[test]
    fn test_drain_empties_queue() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::ToggleOverlay);
        assert_eq!(bus.drain().len(), 1);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publish_from_other_thread() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        let handle = thread::spawn(move || {
            for idx in 0..8 {
                publisher.publish(AppEvent::TriggerTile(idx));
            }
        });
        handle.join().expect("publisher thread panicked");

        let events = bus.drain();
        assert_eq!(events.len(), 8);
        assert_eq!(events[7], AppEvent::TriggerTile(7));
    }

    #[test]
    fn test_waker_runs_per_publish() {
        let bus = EventBus::new();
        let wakes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&wakes);
        let publisher = bus
            .publisher()
            .with_waker(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        publisher.publish(AppEvent::ToggleOverlay);
        publisher.publish(AppEvent::ToggleOverlay);

        assert_eq!(wakes.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_publish_after_bus_dropped_is_silent() {
        let bus = EventBus::new();
        let wakes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&wakes);
        let publisher = bus.publisher().with_waker(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        drop(bus);

        publisher.publish(AppEvent::ToggleOverlay);
        assert_eq!(wakes.load(Ordering::SeqCst), 0);
    }
}
