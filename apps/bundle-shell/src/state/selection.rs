//! # Selection State
//!
//! Owns the user's current selection.
//!
//! ## Thread Safety
//! The selection is wrapped in `Arc<Mutex<T>>` so a toggle (membership and
//! order together) and the quote computed from it happen under one lock.
//! Readers never see a half-applied transition.
//!
//! ## Selection Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User Action          Command                 Selection Change          │
//! │  ───────────          ───────                 ────────────────          │
//! │                                                                         │
//! │  toggle stock ───────► toggle_product() ─────► order.push / remove      │
//! │                                                                         │
//! │  clear ──────────────► clear_selection() ────► order.clear()            │
//! │                                                                         │
//! │  quote ──────────────► get_quote() ──────────► (read only)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use bundle_core::Selection;

/// Shared, lock-protected selection.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selection: Arc<Mutex<Selection>>,
}

impl SelectionState {
    /// Creates an empty selection state.
    pub fn new() -> Self {
        SelectionState::default()
    }

    /// Executes a function with read access to the selection.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let quote = selection_state.with_selection(|s| Quote::build(&engine, s));
    /// ```
    pub fn with_selection<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Selection) -> R,
    {
        // A panic mid-toggle cannot leave the selection half-updated, so the
        // value behind a poisoned lock is still consistent.
        let selection = self.selection.lock().unwrap_or_else(PoisonError::into_inner);
        f(&selection)
    }

    /// Executes a function with write access to the selection.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// selection_state.with_selection_mut(|s| engine.toggle(s, "maps"))?;
    /// ```
    pub fn with_selection_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Selection) -> R,
    {
        let mut selection = self.selection.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut selection)
    }

    /// A copy of the current selection.
    pub fn snapshot(&self) -> Selection {
        self.with_selection(Selection::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bundle_core::{Catalog, PricingEngine};

    #[test]
    fn test_mutation_visible_to_readers() {
        let catalog = Catalog::standard();
        let engine = PricingEngine::new(&catalog);
        let state = SelectionState::new();

        state
            .with_selection_mut(|s| engine.toggle(s, "maps"))
            .unwrap();
        assert!(state.with_selection(|s| s.contains("maps")));
        assert_eq!(state.snapshot().len(), 1);
    }

    #[test]
    fn test_clones_share_selection() {
        let catalog = Catalog::standard();
        let engine = PricingEngine::new(&catalog);
        let state = SelectionState::new();
        let other = state.clone();

        other
            .with_selection_mut(|s| engine.toggle(s, "gantt"))
            .unwrap();
        assert!(state.with_selection(|s| s.contains("gantt")));
    }
}
