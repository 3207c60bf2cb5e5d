//! # bundle-core: Bundle-Aware Selection Pricing
//!
//! This crate prices a small fixed catalog where one product ("Core") is
//! bundled inside several others. At most one selected product, the
//! **bundle owner**, pays for Core; every other Core-including selection
//! gets its add-on price.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Bundle Pricing Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation layer (bundle-shell / UI)             │   │
//! │  │       click tile ──► toggle(id)      read ──► Quote             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bundle-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │ selection │  │  pricing  │  │   quote   │  │   │
//! │  │   │  Product  │  │  order    │  │  owner    │  │ QuoteLine │  │   │
//! │  │   │  Money    │  │  toggle   │  │  prices   │  │   total   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • PURE FUNCTIONS OF STATE            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductId, ToggleOutcome)
//! - [`money`] - Integer money type
//! - [`catalog`] - The fixed, validated product list
//! - [`selection`] - Selected ids with their selection order
//! - [`pricing`] - The pricing engine: ownership, prices, toggles
//! - [`quote`] - Serializable snapshot of all derived values
//! - [`validation`] - Catalog invariants
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use bundle_core::{Catalog, Money, PricingEngine, Quote, Selection, ToggleOutcome};
//!
//! let catalog = Catalog::standard();
//! let engine = PricingEngine::new(&catalog);
//! let mut selection = Selection::new();
//!
//! engine.toggle(&mut selection, "stock")?;
//! engine.toggle(&mut selection, "maps")?;
//!
//! // Stock was picked first, so it carries Core; Maps pays its add-on price
//! assert_eq!(engine.core_bundle_owner(&selection).unwrap(), "stock");
//! assert_eq!(engine.total(&selection), Money::from_cents(370 + 65));
//!
//! // Core is implied and locked while a bundle supplies it
//! assert_eq!(engine.toggle(&mut selection, "core")?, ToggleOutcome::Rejected);
//!
//! let quote = Quote::build(&engine, &selection);
//! assert_eq!(quote.line("core").unwrap().display_price, None);
//! # Ok::<(), bundle_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod quote;
pub mod selection;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bundle_core::Money` instead of
// `use bundle_core::money::Money`

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::PricingEngine;
pub use quote::{Quote, QuoteLine};
pub use selection::Selection;
pub use types::*;
