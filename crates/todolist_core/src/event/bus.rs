//! Synchronous publish/subscribe registry.
//!
//! # Responsibility
//! - Route typed `Event`s to handlers subscribed on the event's `Topic`.
//! - Hand out opaque `SubscriptionId` tokens for later removal.
//!
//! # Invariants
//! - Handlers run on the publishing call stack, in subscription order.
//! - Each dispatch pass iterates a snapshot of the handler list, so handlers
//!   subscribed or removed during dispatch only affect later passes.
//! - Subscription IDs are unique per bus and never reused.
//! - Handlers must not re-publish the topic they were triggered by; the bus
//!   does not detect such cycles.
//!
//! The bus is single-threaded (`Rc` + `RefCell`). Moving the model to
//! several threads requires replacing this with a locked registry.

use crate::event::types::{Event, Topic};
use log::trace;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

type Handler = Rc<dyn Fn(&Event)>;

/// Opaque token identifying one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId {
    topic: Topic,
    seq: u64,
}

impl SubscriptionId {
    /// Topic the subscription was registered on.
    pub fn topic(&self) -> Topic {
        self.topic
    }
}

#[derive(Default)]
struct Registry {
    next_seq: u64,
    handlers: BTreeMap<Topic, Vec<(u64, Handler)>>,
}

/// Shared handle to one event bus. Clones publish to the same registry.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Rc<RefCell<Registry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `topic` and returns its removal token.
    pub fn subscribe<F>(&self, topic: Topic, handler: F) -> SubscriptionId
    where
        F: Fn(&Event) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let seq = registry.next_seq;
        registry.next_seq += 1;
        registry
            .handlers
            .entry(topic)
            .or_default()
            .push((seq, Rc::new(handler)));
        trace!("event=subscribe module=event_bus topic={topic} seq={seq}");
        SubscriptionId { topic, seq }
    }

    /// Removes one subscription.
    ///
    /// Returns `false` when the token is unknown or was already removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut registry = self.registry.borrow_mut();
        let Some(handlers) = registry.handlers.get_mut(&id.topic) else {
            return false;
        };
        let before = handlers.len();
        handlers.retain(|(seq, _)| *seq != id.seq);
        let removed = handlers.len() != before;
        if handlers.is_empty() {
            registry.handlers.remove(&id.topic);
        }
        trace!(
            "event=unsubscribe module=event_bus topic={} seq={} removed={}",
            id.topic,
            id.seq,
            removed
        );
        removed
    }

    /// Delivers `event` to every handler of its topic.
    ///
    /// Publishing on a topic without subscribers is a no-op.
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        let snapshot: Vec<Handler> = {
            let registry = self.registry.borrow();
            match registry.handlers.get(&topic) {
                Some(handlers) => handlers.iter().map(|(_, h)| Rc::clone(h)).collect(),
                None => Vec::new(),
            }
        };
        trace!(
            "event=publish module=event_bus topic={topic} handlers={}",
            snapshot.len()
        );
        for handler in snapshot {
            handler(&event);
        }
    }

    /// Number of handlers currently registered on `topic`.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.registry
            .borrow()
            .handlers
            .get(&topic)
            .map_or(0, Vec::len)
    }

    pub fn has_subscribers(&self, topic: Topic) -> bool {
        self.subscriber_count(topic) > 0
    }
}

impl Debug for EventBus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let registry = self.registry.borrow();
        let counts: BTreeMap<&str, usize> = registry
            .handlers
            .iter()
            .map(|(topic, handlers)| (topic.as_str(), handlers.len()))
            .collect();
        f.debug_struct("EventBus")
            .field("handlers", &counts)
            .finish()
    }
}
