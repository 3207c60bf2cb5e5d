//! # Selection
//!
//! The user's current picks, with the order they were made in.
//!
//! ## One Value, Two Views
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  order:     [stock, maps]        ◄── stored (first-selected-first)     │
//! │  selected:  {stock, maps}        ◄── derived from `order`              │
//! │                                                                         │
//! │  toggle(maps)   → [stock]                                               │
//! │  toggle(gantt)  → [stock, gantt]  (appended, never reordered)          │
//! │  clear()        → []                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Membership is answered from the ordered list itself, so the set and the
//! order cannot disagree. Mutation is crate-private: callers go through
//! [`PricingEngine::toggle`](crate::pricing::PricingEngine::toggle) and
//! [`PricingEngine::clear`](crate::pricing::PricingEngine::clear), which apply
//! each change as a single transition.

use serde::Serialize;
use ts_rs::TS;

use crate::types::ProductId;

/// Selected product ids in the order they were added.
///
/// ## Invariants
/// - No duplicates
/// - Earlier entries were selected before later ones
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
pub struct Selection {
    order: Vec<ProductId>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Selection::default()
    }

    /// Whether `id` is selected.
    pub fn contains(&self, id: &str) -> bool {
        self.order.iter().any(|selected| selected == id)
    }

    /// Selected ids, first-selected-first.
    pub fn iter(&self) -> impl Iterator<Item = &ProductId> + '_ {
        self.order.iter()
    }

    /// Selected ids as a slice, first-selected-first.
    pub fn order(&self) -> &[ProductId] {
        &self.order
    }

    /// Number of selected products.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether any product other than Core is selected.
    pub fn has_non_core(&self) -> bool {
        self.order.iter().any(|id| !id.is_core())
    }

    /// Appends `id` if absent. Returns false when it was already selected.
    pub(crate) fn insert(&mut self, id: ProductId) -> bool {
        if self.contains(id.as_str()) {
            return false;
        }
        self.order.push(id);
        true
    }

    /// Removes `id` if present. Returns false when it was not selected.
    pub(crate) fn remove(&mut self, id: &str) -> bool {
        let before = self.order.len();
        self.order.retain(|selected| selected != id);
        self.order.len() != before
    }

    /// Drops every selection.
    pub(crate) fn clear(&mut self) {
        self.order.clear();
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a ProductId;
    type IntoIter = std::slice::Iter<'a, ProductId>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}
