//! Event vocabulary shared by model, view and coordinator.

use crate::model::filter::Filter;
use crate::model::item::{Item, ItemId};
use std::fmt::{Display, Formatter};

/// Named channel on the event bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Topic {
    NewItemRequest,
    ItemAdded,
    BulkToggleRequest,
    ItemsBulkToggled,
    ToggleRequest,
    ItemToggled,
    DeleteRequest,
    ItemRemoved,
    FilterRequest,
    FilterChanged,
    CollectionEmpty,
}

impl Topic {
    /// Every topic, in wiring-table order.
    pub const ALL: [Topic; 11] = [
        Topic::NewItemRequest,
        Topic::ItemAdded,
        Topic::BulkToggleRequest,
        Topic::ItemsBulkToggled,
        Topic::ToggleRequest,
        Topic::ItemToggled,
        Topic::DeleteRequest,
        Topic::ItemRemoved,
        Topic::FilterRequest,
        Topic::FilterChanged,
        Topic::CollectionEmpty,
    ];

    /// Stable topic name used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NewItemRequest => "ui:new-item",
            Self::ItemAdded => "item-added",
            Self::BulkToggleRequest => "ui:bulk-toggle-request",
            Self::ItemsBulkToggled => "items-bulk-toggled",
            Self::ToggleRequest => "ui:toggle-request",
            Self::ItemToggled => "item-toggled",
            Self::DeleteRequest => "ui:delete-request",
            Self::ItemRemoved => "item-removed",
            Self::FilterRequest => "ui:filter-request",
            Self::FilterChanged => "filter-changed",
            Self::CollectionEmpty => "collection-empty",
        }
    }

    /// Returns whether this topic is published by the view layer.
    pub fn is_view_originated(self) -> bool {
        matches!(
            self,
            Self::NewItemRequest
                | Self::BulkToggleRequest
                | Self::ToggleRequest
                | Self::DeleteRequest
                | Self::FilterRequest
        )
    }
}

impl Display for Topic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notification published on the bus, one variant per `Topic`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// View: user submitted new item text.
    NewItemRequest { text: String },
    /// Model: an item was created.
    ItemAdded { item: Item },
    /// View: user clicked the bulk checkbox.
    BulkToggleRequest { completed: bool },
    /// Model: every item now has `completed` set to the payload.
    ItemsBulkToggled { completed: bool },
    /// View: user clicked an item checkbox.
    ToggleRequest { id: ItemId },
    /// Model: one item's completion flag flipped.
    ItemToggled { id: ItemId, completed: bool },
    /// View: user clicked an item delete control.
    DeleteRequest { id: ItemId },
    /// Model: one item was removed.
    ItemRemoved { id: ItemId },
    /// View: user activated a navigation link.
    FilterRequest { filter: Filter },
    /// Model: the active filter was replaced.
    FilterChanged { filter: Filter },
    /// Model: the last item was removed.
    CollectionEmpty,
}

impl Event {
    /// Topic this event is delivered on.
    pub fn topic(&self) -> Topic {
        match self {
            Self::NewItemRequest { .. } => Topic::NewItemRequest,
            Self::ItemAdded { .. } => Topic::ItemAdded,
            Self::BulkToggleRequest { .. } => Topic::BulkToggleRequest,
            Self::ItemsBulkToggled { .. } => Topic::ItemsBulkToggled,
            Self::ToggleRequest { .. } => Topic::ToggleRequest,
            Self::ItemToggled { .. } => Topic::ItemToggled,
            Self::DeleteRequest { .. } => Topic::DeleteRequest,
            Self::ItemRemoved { .. } => Topic::ItemRemoved,
            Self::FilterRequest { .. } => Topic::FilterRequest,
            Self::FilterChanged { .. } => Topic::FilterChanged,
            Self::CollectionEmpty => Topic::CollectionEmpty,
        }
    }
}
