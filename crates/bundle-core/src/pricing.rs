//! # Selection Pricing Engine
//!
//! Derives every price from a catalog and one selection snapshot.
//!
//! ## Pricing Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Who pays for Core?                                   │
//! │                                                                         │
//! │  order: [stock, maps]                                                   │
//! │           │      │                                                      │
//! │           │      └──► maps  includes Core, not owner ──► add-on   65   │
//! │           └─────────► stock includes Core, owner     ──► base    370   │
//! │                                                                         │
//! │  core tile: covered by stock, not selected ──► "Included" (None)       │
//! │                                                                         │
//! │  total = 370 + 65 = 435                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Owner Stability
//! The bundle owner is the earliest-selected Core-including product, so
//! adding an unrelated product never re-prices something already chosen.
//!
//! Every query is a pure function of `(&Catalog, &Selection)`; nothing is
//! cached, so a value can never be stale relative to the selection it is
//! read from.

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::selection::Selection;
use crate::types::{Product, ProductId, ToggleOutcome};

/// Stateless pricing queries and transitions over a fixed catalog.
#[derive(Debug, Clone, Copy)]
pub struct PricingEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> PricingEngine<'a> {
    /// Creates an engine bound to `catalog` for its lifetime.
    pub fn new(catalog: &'a Catalog) -> Self {
        PricingEngine { catalog }
    }

    /// The catalog this engine prices against.
    #[inline]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Resolves a product id.
    ///
    /// ## Errors
    /// `CoreError::UnknownProduct` if the id is not in the catalog.
    pub fn product(&self, id: &str) -> CoreResult<&'a Product> {
        self.catalog
            .get(id)
            .ok_or_else(|| CoreError::UnknownProduct(id.to_string()))
    }

    // =========================================================================
    // Derived Values
    // =========================================================================

    /// True if Core is selected or any selected product bundles it.
    pub fn core_is_covered(&self, selection: &Selection) -> bool {
        selection
            .iter()
            .filter_map(|id| self.catalog.get(id.as_str()))
            .any(|p| p.is_core() || p.includes_core)
    }

    /// The selected Core-including product billed Core's embedded price.
    ///
    /// Picks the first Core-including product in selection order. Because
    /// a [`Selection`] keeps membership and order in one list, every selected
    /// product is visited here and no catalog-order fallback is needed.
    pub fn core_bundle_owner(&self, selection: &Selection) -> Option<&'a ProductId> {
        selection
            .iter()
            .filter_map(|id| self.catalog.get(id.as_str()))
            .find(|p| p.includes_core)
            .map(|p| &p.id)
    }

    /// Price charged for a product when Core is already covered elsewhere.
    ///
    /// Falls back to `max(base_price - CORE_PRICE, 0)` when the product has
    /// no explicit add-on price.
    pub fn addon_price(&self, product: &Product) -> Money {
        product
            .addon_price
            .unwrap_or_else(|| product.base_price.clamped_sub(self.catalog.core_price()))
    }

    /// Billed price of a product, `None` when it is not selected.
    pub fn selected_price(&self, product: &Product, selection: &Selection) -> Option<Money> {
        if !selection.contains(product.id.as_str()) {
            return None;
        }

        if product.is_core() || !product.includes_core {
            return Some(product.base_price);
        }

        let is_owner = self
            .core_bundle_owner(selection)
            .is_some_and(|owner| *owner == product.id);

        if is_owner {
            Some(product.base_price)
        } else {
            Some(self.addon_price(product))
        }
    }

    /// Price to display on a product's tile.
    ///
    /// `None` means Core is auto-implied and shown as "Included". Unselected
    /// products show a preview: the add-on price for Core-including products
    /// while Core is covered, the base price otherwise.
    pub fn effective_price(&self, product: &Product, selection: &Selection) -> Option<Money> {
        if self.is_auto_implied(product, selection) {
            return None;
        }

        if let Some(price) = self.selected_price(product, selection) {
            return Some(price);
        }

        if !product.is_core() && product.includes_core && self.core_is_covered(selection) {
            Some(self.addon_price(product))
        } else {
            Some(product.base_price)
        }
    }

    /// True only for Core while covered by another product and not itself
    /// selected.
    pub fn is_auto_implied(&self, product: &Product, selection: &Selection) -> bool {
        product.is_core()
            && !selection.contains(product.id.as_str())
            && self.core_is_covered(selection)
    }

    /// True when the displayed price undercuts the list price.
    pub fn is_discounted(&self, product: &Product, selection: &Selection) -> bool {
        self.effective_price(product, selection)
            .is_some_and(|price| price < product.base_price)
    }

    /// Selected or auto-implied: the tile renders as checked.
    pub fn is_active(&self, product: &Product, selection: &Selection) -> bool {
        selection.contains(product.id.as_str()) || self.is_auto_implied(product, selection)
    }

    /// Sum of billed prices over the catalog.
    pub fn total(&self, selection: &Selection) -> Money {
        self.catalog
            .products()
            .iter()
            .filter_map(|p| self.selected_price(p, selection))
            .sum()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Toggles a product in or out of the selection.
    ///
    /// ## Rules
    /// - Core is locked while any other product is selected: it can be
    ///   neither deselected nor selected, and the call is a no-op returning
    ///   `ToggleOutcome::Rejected`
    /// - Otherwise set semantics: absent ids are appended to the order,
    ///   present ids are removed
    ///
    /// ## Errors
    /// `CoreError::UnknownProduct` if the id is not in the catalog; the
    /// selection is left untouched.
    pub fn toggle(&self, selection: &mut Selection, id: &str) -> CoreResult<ToggleOutcome> {
        let product = self.product(id)?;

        if product.is_core() && selection.has_non_core() {
            debug!(product_id = %id, "core toggle rejected, supplied by another product");
            return Ok(ToggleOutcome::Rejected);
        }

        let outcome = if selection.remove(id) {
            ToggleOutcome::Deselected
        } else {
            selection.insert(product.id.clone());
            ToggleOutcome::Selected
        };

        debug!(product_id = %id, ?outcome, selected = selection.len(), "selection toggled");
        Ok(outcome)
    }

    /// Resets the selection to empty.
    pub fn clear(&self, selection: &mut Selection) {
        debug!(cleared = selection.len(), "selection cleared");
        selection.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
