//! List item domain model.
//!
//! # Responsibility
//! - Define the record owned by `ItemCollection` and copied into snapshots.
//! - Validate user-provided item text before it reaches the collection.
//!
//! # Invariants
//! - `id` is assigned by the owning collection and never reused.
//! - `text` is trimmed and non-empty once an item exists.
//! - `completed` starts as `false`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identifier assigned to every item by its collection.
///
/// Kept as a type alias so signatures read in domain terms.
pub type ItemId = u64;

/// One entry of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Monotonic per-collection ID.
    pub id: ItemId,
    /// Trimmed display text.
    pub text: String,
    /// Completion flag flipped by toggle operations.
    pub completed: bool,
}

impl Item {
    /// Creates an active item after trimming and validating `text`.
    ///
    /// # Errors
    /// - Returns `InvalidInputError::EmptyText` when `text` is blank.
    pub fn new(id: ItemId, text: &str) -> Result<Self, InvalidInputError> {
        let text = normalize_text(text)?;
        Ok(Self {
            id,
            text,
            completed: false,
        })
    }

    /// Returns whether this item still needs work.
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

/// Trims item text and rejects empty results.
pub fn normalize_text(text: &str) -> Result<String, InvalidInputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InvalidInputError::EmptyText);
    }
    Ok(trimmed.to_string())
}

/// Rejected user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    /// Text was empty or whitespace-only.
    EmptyText,
}

impl InvalidInputError {
    /// Stable token for log lines.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::EmptyText => "empty_text",
        }
    }
}

impl Display for InvalidInputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "item text must not be empty"),
        }
    }
}

impl Error for InvalidInputError {}
