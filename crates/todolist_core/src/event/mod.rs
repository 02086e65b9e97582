//! Typed event vocabulary and the synchronous bus that carries it.
//!
//! # Responsibility
//! - Enumerate every topic exchanged between model, view and coordinator.
//! - Dispatch events synchronously to subscribed handlers.

pub mod bus;
pub mod types;
