//! List filter and route-token mapping.
//!
//! # Invariants
//! - A collection always has exactly one active `Filter`; there is no
//!   "unset" state.
//! - Unrecognized route tokens map to `None` and must not change the filter.

use crate::model::item::Item;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Route token selecting `Filter::All`.
pub const ROUTE_TOKEN_ALL: &str = "";
/// Route token selecting `Filter::Active`.
pub const ROUTE_TOKEN_ACTIVE: &str = "active";
/// Route token selecting `Filter::Completed`.
pub const ROUTE_TOKEN_COMPLETED: &str = "completed";

static ROUTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:#/|/)?([a-z]*)$").expect("valid route regex"));

/// Which items a view of the collection includes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Filter {
    /// Every item.
    #[default]
    All,
    /// Items with `completed == false`.
    Active,
    /// Items with `completed == true`.
    Completed,
}

impl Filter {
    /// All filters in navigation order.
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Maps an exact route token to a filter.
    pub fn from_route_token(token: &str) -> Option<Self> {
        match token {
            ROUTE_TOKEN_ALL => Some(Self::All),
            ROUTE_TOKEN_ACTIVE => Some(Self::Active),
            ROUTE_TOKEN_COMPLETED => Some(Self::Completed),
            _ => None,
        }
    }

    /// Route token this filter is reachable from.
    pub fn route_token(self) -> &'static str {
        match self {
            Self::All => ROUTE_TOKEN_ALL,
            Self::Active => ROUTE_TOKEN_ACTIVE,
            Self::Completed => ROUTE_TOKEN_COMPLETED,
        }
    }

    /// Navigation link target, e.g. `#/active`.
    pub fn href(self) -> String {
        format!("#/{}", self.route_token())
    }

    /// Stable uppercase name used in logs and serialized snapshots.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
        }
    }

    /// Returns whether `item` is visible under this filter.
    pub fn matches(self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.completed,
            Self::Completed => item.completed,
        }
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a navigation target into a filter.
///
/// Accepts exactly the `#/active`, `/active` and bare `active` forms, with
/// no surrounding whitespace. Returns `None` for anything else, which
/// callers treat as "no filter change".
pub fn parse_route(href: &str) -> Option<Filter> {
    let captures = ROUTE_RE.captures(href)?;
    let token = captures.get(1).map_or("", |m| m.as_str());
    Filter::from_route_token(token)
}
