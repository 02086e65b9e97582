//! Coordinator wiring view requests to the model and model changes to the
//! view.
//!
//! # Responsibility
//! - Subscribe to every topic and dispatch through one exhaustive `match`.
//! - Re-render the surface and recompute the bulk checkbox after changes.
//!
//! # Invariants
//! - Holds no list state of its own; every decision reads the collection.
//! - Bus handlers only keep weak references, so dropping the coordinator
//!   detaches it and leaves no reference cycle through the bus.
//!
//! Notification order for one request is fixed by the synchronous bus, e.g.
//! `ui:filter-request` -> `set_filter` -> `filter-changed` (render) ->
//! bulk checkbox recompute.

use crate::event::bus::{EventBus, SubscriptionId};
use crate::event::types::{Event, Topic};
use crate::model::collection::ItemCollection;
use crate::model::filter::Filter;
use crate::view::surface::PresentationSurface;
use log::{debug, info, warn};
use std::cell::RefCell;
use std::rc::Rc;

/// Decides the bulk checkbox state for the current filter.
///
/// Rules:
/// - Empty filtered list: unchecked, whatever the filter.
/// - `All`: checked iff every item is completed. Comparing the filtered
///   length with the global completed count is only valid because `All`
///   shows the whole collection.
/// - `Completed`: checked (every shown item is completed).
/// - `Active`: unchecked (no shown item is completed).
pub fn bulk_checkbox_state(filter: Filter, filtered_len: usize, completed_count: usize) -> bool {
    if filtered_len == 0 {
        return false;
    }
    match filter {
        Filter::All => filtered_len == completed_count,
        Filter::Completed => true,
        Filter::Active => false,
    }
}

struct Wiring {
    collection: Rc<ItemCollection>,
    surface: Rc<RefCell<dyn PresentationSurface>>,
}

impl Wiring {
    fn handle(&self, event: &Event) {
        match event {
            Event::NewItemRequest { text } => {
                if let Err(err) = self.collection.add(text) {
                    warn!(
                        "event=ui_request module=coordinator status=rejected topic={} reason={}",
                        event.topic(),
                        err.reason()
                    );
                }
            }
            Event::ItemAdded { .. } => {
                self.render();
                self.set_bulk_checked(false);
            }
            Event::BulkToggleRequest { completed } => self.collection.toggle_all(*completed),
            Event::ItemsBulkToggled { .. } => self.render(),
            Event::ToggleRequest { id } => {
                if !self.collection.toggle(*id) {
                    debug!(
                        "event=ui_request module=coordinator status=not_found topic={} id={id}",
                        event.topic()
                    );
                }
            }
            Event::ItemToggled { .. } => {
                self.render();
                self.recompute_bulk_checkbox();
            }
            Event::DeleteRequest { id } => {
                if !self.collection.delete(*id) {
                    debug!(
                        "event=ui_request module=coordinator status=not_found topic={} id={id}",
                        event.topic()
                    );
                }
            }
            Event::ItemRemoved { .. } => {
                self.render();
                self.recompute_bulk_checkbox();
            }
            Event::FilterRequest { filter } => {
                self.collection.set_filter(*filter);
                self.recompute_bulk_checkbox();
            }
            Event::FilterChanged { .. } => self.render(),
            Event::CollectionEmpty => self.set_bulk_checked(false),
        }
    }

    fn render(&self) {
        let snapshot = self.collection.snapshot();
        self.surface.borrow_mut().render(&snapshot);
    }

    fn set_bulk_checked(&self, checked: bool) {
        self.surface.borrow_mut().set_bulk_checked(checked);
    }

    fn recompute_bulk_checkbox(&self) {
        let filter = self.collection.active_filter();
        let filtered_len = self.collection.list_items(Some(filter)).len();
        let checked = bulk_checkbox_state(filter, filtered_len, self.collection.count_completed());
        debug!(
            "event=bulk_checkbox module=coordinator filter={filter} shown={filtered_len} checked={checked}"
        );
        self.set_bulk_checked(checked);
    }
}

/// Mediator between a collection and a presentation surface.
pub struct Coordinator {
    bus: EventBus,
    wiring: Rc<Wiring>,
    subscriptions: Vec<SubscriptionId>,
}

impl Coordinator {
    /// Subscribes handlers for every topic on `bus`.
    ///
    /// `collection` must publish on the same bus.
    pub fn attach(
        bus: EventBus,
        collection: Rc<ItemCollection>,
        surface: Rc<RefCell<dyn PresentationSurface>>,
    ) -> Self {
        let wiring = Rc::new(Wiring {
            collection,
            surface,
        });
        let subscriptions = Topic::ALL
            .iter()
            .map(|topic| {
                let weak = Rc::downgrade(&wiring);
                bus.subscribe(*topic, move |event| {
                    if let Some(wiring) = weak.upgrade() {
                        wiring.handle(event);
                    }
                })
            })
            .collect::<Vec<_>>();
        info!(
            "event=coordinator_attach module=coordinator status=ok topics={}",
            subscriptions.len()
        );
        Self {
            bus,
            wiring,
            subscriptions,
        }
    }

    /// Renders the current state and recomputes the bulk checkbox.
    ///
    /// Used for the first frame, before any event has fired.
    pub fn refresh(&self) {
        self.wiring.render();
        self.wiring.recompute_bulk_checkbox();
    }

    /// Removes every handler this coordinator registered.
    ///
    /// Returns how many subscriptions were removed; a second call returns 0.
    pub fn detach(&mut self) -> usize {
        let removed = self
            .subscriptions
            .drain(..)
            .filter(|id| self.bus.unsubscribe(*id))
            .count();
        if removed > 0 {
            info!("event=coordinator_detach module=coordinator status=ok topics={removed}");
        }
        removed
    }

    pub fn is_attached(&self) -> bool {
        !self.subscriptions.is_empty()
    }
}

impl Drop for Coordinator {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::bulk_checkbox_state;
    use crate::model::filter::Filter;

    #[test]
    fn empty_list_is_always_unchecked() {
        for filter in Filter::ALL {
            assert!(!bulk_checkbox_state(filter, 0, 0));
        }
        assert!(!bulk_checkbox_state(Filter::Completed, 0, 3));
    }

    #[test]
    fn all_filter_requires_every_item_completed() {
        assert!(bulk_checkbox_state(Filter::All, 2, 2));
        assert!(!bulk_checkbox_state(Filter::All, 2, 1));
    }

    #[test]
    fn completed_filter_is_checked_when_non_empty() {
        assert!(bulk_checkbox_state(Filter::Completed, 1, 1));
    }

    #[test]
    fn active_filter_is_unchecked() {
        assert!(!bulk_checkbox_state(Filter::Active, 2, 0));
        assert!(!bulk_checkbox_state(Filter::Active, 1, 5));
    }
}
