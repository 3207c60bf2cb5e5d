//! # Domain Types
//!
//! Core domain types used throughout bundle pricing.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   ProductId     │   │  ToggleOutcome  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  "core"         │   │  Selected       │       │
//! │  │  name, subtitle │   │  "stock"        │   │  Deselected     │       │
//! │  │  base_price     │   │  "maps"         │   │  Rejected       │       │
//! │  │  addon_price    │   │  "gantt"        │   └─────────────────┘       │
//! │  │  includes_core  │   └─────────────────┘                             │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

/// Id of the baseline product that other products bundle.
pub const CORE_PRODUCT_ID: &str = "core";

// =============================================================================
// Product Id
// =============================================================================

/// Catalog key of a product.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductId(String);

impl ProductId {
    /// Creates an id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        ProductId(id.into())
    }

    /// Returns the id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the Core product's id.
    #[inline]
    pub fn is_core(&self) -> bool {
        self.0 == CORE_PRODUCT_ID
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId(id)
    }
}

impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ProductId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ProductId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the fixed catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique catalog key.
    pub id: ProductId,

    /// Display name ("Stock").
    pub name: String,

    /// Optional second label ("core inc.").
    pub subtitle: Option<String>,

    /// Price when bought standalone.
    pub base_price: Money,

    /// Reduced price when Core is already covered by another product.
    pub addon_price: Option<Money>,

    /// Selecting this product also grants Core's functionality.
    pub includes_core: bool,

    /// Requires Core without bundling it. Not read by any pricing rule yet.
    pub depends_on_core: bool,
}

impl Product {
    /// Whether this is the Core product.
    #[inline]
    pub fn is_core(&self) -> bool {
        self.id.is_core()
    }
}

// =============================================================================
// Toggle Outcome
// =============================================================================

/// What a `toggle` call did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ToggleOutcome {
    /// The product was added at the end of the order.
    Selected,
    /// The product was removed.
    Deselected,
    /// Core toggle refused because another product supplies it.
    Rejected,
}

impl ToggleOutcome {
    /// Whether the selection changed.
    pub fn changed(&self) -> bool {
        !matches!(self, ToggleOutcome::Rejected)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
