//! Item collection: the single owner of list state.
//!
//! # Responsibility
//! - Own items and the active filter.
//! - Apply mutations and publish one change notification per mutation.
//! - Answer read-only queries with cloned snapshots.
//!
//! # Invariants
//! - IDs come from `next_id`, which only ever increases for this instance.
//!   Because of that, ID order equals insertion order and the `BTreeMap`
//!   iterates items in insertion order.
//! - A state borrow is never held while publishing, so handlers may read
//!   the collection (or mutate it) from inside a notification.
//! - Failed `delete`/`toggle` calls publish nothing.

use crate::event::bus::EventBus;
use crate::event::types::Event;
use crate::model::filter::Filter;
use crate::model::item::{InvalidInputError, Item, ItemId};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct CollectionState {
    items: BTreeMap<ItemId, Item>,
    next_id: ItemId,
    active_filter: Filter,
}

/// Navigation control state in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterLink {
    pub filter: Filter,
    /// True on exactly the link matching the active filter.
    pub selected: bool,
}

/// Read-only view of the collection handed to presentation surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSnapshot {
    /// Items visible under `active_filter`, in insertion order.
    pub items: Vec<Item>,
    pub active_filter: Filter,
    /// Length of the filtered list, not of the whole collection.
    pub count: usize,
    /// One entry per filter, in navigation order.
    pub links: Vec<FilterLink>,
}

/// In-memory list model publishing change events on an `EventBus`.
#[derive(Debug)]
pub struct ItemCollection {
    bus: EventBus,
    state: RefCell<CollectionState>,
}

impl ItemCollection {
    /// Creates an empty collection showing `Filter::All`.
    pub fn new(bus: EventBus) -> Self {
        Self {
            bus,
            state: RefCell::new(CollectionState::default()),
        }
    }

    /// Adds one item and publishes `item-added`.
    ///
    /// # Errors
    /// - Returns `InvalidInputError::EmptyText` when `text` is blank; no ID is
    ///   consumed and nothing is published.
    pub fn add(&self, text: &str) -> Result<Item, InvalidInputError> {
        let item = {
            let mut state = self.state.borrow_mut();
            let item = Item::new(state.next_id, text)?;
            state.next_id += 1;
            state.items.insert(item.id, item.clone());
            item
        };
        info!(
            "event=item_added module=collection status=ok id={}",
            item.id
        );
        self.bus.publish(Event::ItemAdded { item: item.clone() });
        Ok(item)
    }

    /// Removes one item.
    ///
    /// Returns `false` without publishing when `id` is unknown. On success
    /// publishes `item-removed`, then `collection-empty` if nothing is left.
    pub fn delete(&self, id: ItemId) -> bool {
        let now_empty = {
            let mut state = self.state.borrow_mut();
            if state.items.remove(&id).is_none() {
                debug!("event=item_removed module=collection status=not_found id={id}");
                return false;
            }
            state.items.is_empty()
        };
        info!("event=item_removed module=collection status=ok id={id}");
        self.bus.publish(Event::ItemRemoved { id });
        if now_empty {
            self.bus.publish(Event::CollectionEmpty);
        }
        true
    }

    /// Flips one item's completion flag and publishes `item-toggled`.
    ///
    /// Returns `false` without publishing when `id` is unknown.
    pub fn toggle(&self, id: ItemId) -> bool {
        let completed = {
            let mut state = self.state.borrow_mut();
            let Some(item) = state.items.get_mut(&id) else {
                debug!("event=item_toggled module=collection status=not_found id={id}");
                return false;
            };
            item.completed = !item.completed;
            item.completed
        };
        info!("event=item_toggled module=collection status=ok id={id} completed={completed}");
        self.bus.publish(Event::ItemToggled { id, completed });
        true
    }

    /// Sets every item's completion flag.
    ///
    /// Publishes `items-bulk-toggled` even when the collection is empty.
    pub fn toggle_all(&self, completed: bool) {
        let affected = {
            let mut state = self.state.borrow_mut();
            for item in state.items.values_mut() {
                item.completed = completed;
            }
            state.items.len()
        };
        info!(
            "event=items_bulk_toggled module=collection status=ok completed={completed} count={affected}"
        );
        self.bus.publish(Event::ItemsBulkToggled { completed });
    }

    /// Replaces the active filter and publishes `filter-changed`.
    ///
    /// Publishes even when `filter` equals the current one.
    pub fn set_filter(&self, filter: Filter) {
        self.state.borrow_mut().active_filter = filter;
        info!("event=filter_changed module=collection status=ok filter={filter}");
        self.bus.publish(Event::FilterChanged { filter });
    }

    /// Lists items visible under `filter`, or under the active filter when
    /// `None`.
    pub fn list_items(&self, filter: Option<Filter>) -> Vec<Item> {
        let state = self.state.borrow();
        let filter = filter.unwrap_or(state.active_filter);
        state
            .items
            .values()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect()
    }

    /// Counts completed items regardless of the active filter.
    pub fn count_completed(&self) -> usize {
        self.state
            .borrow()
            .items
            .values()
            .filter(|item| item.completed)
            .count()
    }

    /// Completed items in insertion order.
    pub fn completed_items(&self) -> Vec<Item> {
        self.list_items(Some(Filter::Completed))
    }

    pub fn get(&self, id: ItemId) -> Option<Item> {
        self.state.borrow().items.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().items.is_empty()
    }

    pub fn active_filter(&self) -> Filter {
        self.state.borrow().active_filter
    }

    /// Builds the render snapshot for the active filter.
    pub fn snapshot(&self) -> ListSnapshot {
        let active_filter = self.active_filter();
        let items = self.list_items(Some(active_filter));
        let links = Filter::ALL
            .iter()
            .map(|filter| FilterLink {
                filter: *filter,
                selected: *filter == active_filter,
            })
            .collect();
        ListSnapshot {
            count: items.len(),
            items,
            active_filter,
            links,
        }
    }
}
