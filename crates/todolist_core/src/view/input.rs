//! Raw interaction signals and their translation into `ui:*` events.
//!
//! # Responsibility
//! - Turn surface-level input (keys, clicks, link activation) into semantic
//!   requests on the event bus.
//!
//! # Invariants
//! - The view only publishes; it never calls the collection.
//! - Input that does not map to a request is dropped without publishing.

use crate::event::bus::EventBus;
use crate::event::types::Event;
use crate::model::filter::parse_route;
use crate::model::item::ItemId;
use log::debug;

/// Key name that submits the new-item field.
pub const SUBMIT_KEY: &str = "enter";
/// Element tag of an item's completion checkbox.
pub const TOGGLE_TAG: &str = "input";
/// Element tag of an item's delete control.
pub const DELETE_TAG: &str = "button";
/// Element tag of a navigation link.
pub const LINK_TAG: &str = "a";

/// One raw interaction reported by a presentation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSignal {
    /// Key released in the new-item field, with the field's current value.
    NewItemKey { key: String, value: String },
    /// Bulk checkbox clicked; `checked` is its state after the click.
    BulkCheckboxClicked { checked: bool },
    /// Click inside the item list on an element carrying an ID attribute.
    ListClicked { tag: String, item_id: String },
    /// Click inside the footer, possibly on a navigation link.
    FooterClicked { tag: String, href: Option<String> },
}

/// Input side of the view layer.
#[derive(Debug, Clone)]
pub struct View {
    bus: EventBus,
}

impl View {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }

    /// Translates `signal` and publishes the resulting request, if any.
    ///
    /// Returns whether an event was published. When the new-item field is
    /// submitted, the caller should clear the field only on `true`.
    pub fn dispatch_input(&self, signal: InputSignal) -> bool {
        let Some(event) = translate(signal) else {
            return false;
        };
        debug!(
            "event=ui_request module=view status=ok topic={}",
            event.topic()
        );
        self.bus.publish(event);
        true
    }
}

/// Maps one signal to the request it stands for.
pub fn translate(signal: InputSignal) -> Option<Event> {
    match signal {
        InputSignal::NewItemKey { key, value } => {
            if !key.eq_ignore_ascii_case(SUBMIT_KEY) {
                return None;
            }
            let text = value.trim();
            if text.is_empty() {
                return None;
            }
            Some(Event::NewItemRequest {
                text: text.to_string(),
            })
        }
        InputSignal::BulkCheckboxClicked { checked } => {
            Some(Event::BulkToggleRequest { completed: checked })
        }
        InputSignal::ListClicked { tag, item_id } => {
            let id = parse_item_id(&item_id)?;
            match tag.to_ascii_lowercase().as_str() {
                TOGGLE_TAG => Some(Event::ToggleRequest { id }),
                DELETE_TAG => Some(Event::DeleteRequest { id }),
                _ => None,
            }
        }
        InputSignal::FooterClicked { tag, href } => {
            if !tag.eq_ignore_ascii_case(LINK_TAG) {
                return None;
            }
            let filter = parse_route(href.as_deref()?)?;
            Some(Event::FilterRequest { filter })
        }
    }
}

fn parse_item_id(raw: &str) -> Option<ItemId> {
    match raw.trim().parse::<ItemId>() {
        Ok(id) => Some(id),
        Err(_) => {
            debug!("event=ui_request module=view status=ignored reason=invalid_item_id");
            None
        }
    }
}
