//! # Error Types
//!
//! Domain-specific error types for bundle-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bundle-core errors (this file)                                        │
//! │  ├── CoreError        - Caller misuse of the engine                    │
//! │  └── ValidationError  - Catalog invariant violations                   │
//! │                                                                         │
//! │  bundle-shell errors (in app)                                          │
//! │  └── ApiError         - What the user sees (serialized)                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → stdout                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, field)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by the pricing engine.
///
/// The engine's queries are total over a valid selection; the only runtime
/// failure is a product id that is not in the catalog.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id does not exist in the catalog.
    ///
    /// ## When This Occurs
    /// - The host passed an id typed by the user (`toggle sotck`)
    /// - The presentation layer was built against a different catalog
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// Catalog failed validation at construction time.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The catalog has no products.
    #[error("catalog must contain at least one product")]
    Empty,

    /// A required field or entry is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// A price is below zero.
    #[error("{field} of '{product_id}' must not be negative")]
    Negative { field: String, product_id: String },

    /// Duplicate value (e.g., duplicate product id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
