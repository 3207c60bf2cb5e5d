//! # Validation Module
//!
//! Catalog invariant checks, run once when a [`Catalog`](crate::catalog::Catalog)
//! is constructed.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Invariants                                 │
//! │                                                                         │
//! │  1. At least one product                                               │
//! │  2. Every id and name is non-blank                                     │
//! │  3. Ids are unique                                                     │
//! │  4. Base and add-on prices are >= 0                                    │
//! │  5. Exactly one product has id "core" (its base price is CORE_PRICE)   │
//! │                                                                         │
//! │  Once these hold, every engine query is a total function.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bundle_core::catalog::Catalog;
//! use bundle_core::validation::validate_catalog;
//!
//! let catalog = Catalog::standard();
//! assert!(validate_catalog(catalog.products()).is_ok());
//! assert!(validate_catalog(&[]).is_err());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a full product list.
///
/// Returns the first violation found, checking products in declaration order.
pub fn validate_catalog(products: &[Product]) -> ValidationResult<()> {
    if products.is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        validate_product(product)?;

        if !seen.insert(product.id.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "product id".to_string(),
                value: product.id.to_string(),
            });
        }
    }

    // Uniqueness is already enforced, so a single hit means exactly one
    if !products.iter().any(Product::is_core) {
        return Err(ValidationError::Required {
            field: "core product".to_string(),
        });
    }

    Ok(())
}

/// Validates a single product record.
///
/// ## Example
/// ```rust
/// use bundle_core::catalog::Catalog;
/// use bundle_core::validation::validate_product;
///
/// let catalog = Catalog::standard();
/// assert!(validate_product(catalog.core()).is_ok());
/// ```
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    if product.id.as_str().trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }

    if product.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: format!("name of '{}'", product.id),
        });
    }

    if product.base_price.is_negative() {
        return Err(ValidationError::Negative {
            field: "base price".to_string(),
            product_id: product.id.to_string(),
        });
    }

    if product.addon_price.is_some_and(|p| p.is_negative()) {
        return Err(ValidationError::Negative {
            field: "add-on price".to_string(),
            product_id: product.id.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
