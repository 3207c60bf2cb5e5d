//! # Catalog State
//!
//! Holds the fixed product catalog for the lifetime of the shell.
//!
//! The catalog is never mutated after startup, so it is shared by reference
//! and needs no lock. Commands build a short-lived
//! [`PricingEngine`](bundle_core::PricingEngine) from it per call.

use bundle_core::{Catalog, PricingEngine};

/// Read-only wrapper around the product catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    catalog: Catalog,
}

impl CatalogState {
    /// Wraps an already validated catalog.
    pub fn new(catalog: Catalog) -> Self {
        CatalogState { catalog }
    }

    /// Returns the catalog.
    pub fn inner(&self) -> &Catalog {
        &self.catalog
    }

    /// A pricing engine bound to this catalog.
    pub fn engine(&self) -> PricingEngine<'_> {
        PricingEngine::new(&self.catalog)
    }
}
