//! List domain model.
//!
//! # Responsibility
//! - Define the item record, the filter enumeration and the collection that
//!   owns both.
//! - Publish change notifications for every successful mutation.
//!
//! # Invariants
//! - Items are owned by `ItemCollection`; callers only see cloned snapshots.
//! - Item IDs come from a per-collection monotonic counter.

pub mod collection;
pub mod filter;
pub mod item;
