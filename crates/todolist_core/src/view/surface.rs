//! Presentation surface contract and a plain-text implementation.
//!
//! # Invariants
//! - Surfaces only receive snapshots; they never hold a collection handle.
//! - The displayed count is the filtered list length.

use crate::model::collection::ListSnapshot;
use crate::model::filter::Filter;
use std::fmt::Write as _;

/// Rendering side of the view layer.
pub trait PresentationSurface {
    /// Redraws the list, count and navigation from `snapshot`.
    fn render(&mut self, snapshot: &ListSnapshot);
    /// Sets the bulk-toggle checkbox.
    fn set_bulk_checked(&mut self, checked: bool);
}

/// Surface that keeps the last rendered frame as text.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextSurface {
    snapshot: Option<ListSnapshot>,
    bulk_checked: bool,
    renders: usize,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bulk_checked(&self) -> bool {
        self.bulk_checked
    }

    /// Number of `render` calls received so far.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Last snapshot passed to `render`.
    pub fn last_snapshot(&self) -> Option<&ListSnapshot> {
        self.snapshot.as_ref()
    }

    /// Formats the current frame.
    ///
    /// Layout:
    /// ```text
    /// [x] toggle all
    ///   [ ] #0 buy milk
    ///   [x] #1 walk dog
    /// 2 items left  [All] Active Completed
    /// ```
    pub fn frame(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} toggle all", checkbox(self.bulk_checked));
        let Some(snapshot) = &self.snapshot else {
            return out;
        };
        for item in &snapshot.items {
            let _ = writeln!(out, "  {} #{} {}", checkbox(item.completed), item.id, item.text);
        }
        let noun = if snapshot.count == 1 { "item" } else { "items" };
        let _ = write!(out, "{} {noun} left ", snapshot.count);
        for link in &snapshot.links {
            let label = filter_label(link.filter);
            if link.selected {
                let _ = write!(out, " [{label}]");
            } else {
                let _ = write!(out, " {label}");
            }
        }
        out.push('\n');
        out
    }
}

impl PresentationSurface for TextSurface {
    fn render(&mut self, snapshot: &ListSnapshot) {
        self.snapshot = Some(snapshot.clone());
        self.renders += 1;
    }

    fn set_bulk_checked(&mut self, checked: bool) {
        self.bulk_checked = checked;
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn filter_label(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "All",
        Filter::Active => "Active",
        Filter::Completed => "Completed",
    }
}
