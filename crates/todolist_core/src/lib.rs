//! Core logic for the todo list widget.
//! This crate owns list state and the event protocol that keeps the view in
//! sync with it.

pub mod coordinator;
pub mod event;
pub mod logging;
pub mod model;
pub mod view;

pub use coordinator::{bulk_checkbox_state, Coordinator};
pub use event::bus::{EventBus, SubscriptionId};
pub use event::types::{Event, Topic};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::collection::{FilterLink, ItemCollection, ListSnapshot};
pub use model::filter::{parse_route, Filter};
pub use model::item::{InvalidInputError, Item, ItemId};
pub use view::input::{InputSignal, View};
pub use view::surface::{PresentationSurface, TextSurface};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
