//! # Money Module
//!
//! Provides the `Money` type for catalog prices and derived totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PRICES ARE WHOLE NUMBERS OF THE CATALOG'S UNIT                         │
//! │                                                                         │
//! │  Catalog:   Core 185   Stock 370 (add-on 185)   Maps 250 (add-on 65)   │
//! │                                                                         │
//! │  Whether the unit is dollars or cents is the catalog's business.        │
//! │  The engine only adds, compares and clamps; it never divides, so        │
//! │  no rounding policy is needed and no precision is ever lost.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bundle_core::money::Money;
//!
//! let stock = Money::from_cents(370);
//! let maps_addon = Money::from_cents(65);
//! assert_eq!((stock + maps_addon).cents(), 435);
//!
//! // Add-on fallback never goes below zero
//! let cheap = Money::from_cents(100);
//! assert!(cheap.clamped_sub(Money::from_cents(185)).is_zero());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in the catalog's smallest unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: Plain integer arithmetic; negative catalog prices are
///   rejected by validation, so derived values stay >= 0
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Newtype serde**: Serialized as a bare number (`370`)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from the smallest currency unit.
    ///
    /// ## Example
    /// ```rust
    /// use bundle_core::money::Money;
    ///
    /// let price = Money::from_cents(185);
    /// assert_eq!(price.cents(), 185);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the raw amount.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Subtracts `other`, flooring the result at zero.
    ///
    /// Used for the add-on fallback `max(base - CORE_PRICE, 0)` when a
    /// product declares no explicit add-on price.
    ///
    /// ## Example
    /// ```rust
    /// use bundle_core::money::Money;
    ///
    /// let gantt = Money::from_cents(222);
    /// let core = Money::from_cents(185);
    /// assert_eq!(gantt.clamped_sub(core).cents(), 37);
    /// assert_eq!(core.clamped_sub(gantt).cents(), 0);
    /// ```
    #[inline]
    pub const fn clamped_sub(&self, other: Money) -> Self {
        let diff = self.0.saturating_sub(other.0);
        if diff < 0 {
            Money(0)
        } else {
            Money(diff)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the bare amount. Currency symbols are the host's concern.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Summing an iterator of prices (used by `total`).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(370);
        assert_eq!(money.cents(), 370);
        assert!(!money.is_zero());
        assert!(!money.is_negative());
    }

    #[test]
    fn test_display_is_bare_amount() {
        assert_eq!(Money::from_cents(185).to_string(), "185");
        assert_eq!(Money::zero().to_string(), "0");
    }

    #[test]
    fn test_arithmetic() {
        let mut total = Money::from_cents(370);
        total += Money::from_cents(65);
        assert_eq!(total.cents(), 435);
        assert_eq!((total + Money::from_cents(37)).cents(), 472);
    }

    #[test]
    fn test_sum() {
        let total: Money = [185, 65, 37]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.cents(), 287);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_clamped_sub_floors_at_zero() {
        let base = Money::from_cents(250);
        let core = Money::from_cents(185);
        assert_eq!(base.clamped_sub(core).cents(), 65);
        assert_eq!(Money::from_cents(100).clamped_sub(core), Money::zero());
        assert_eq!(core.clamped_sub(core), Money::zero());
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&Money::from_cents(185)).unwrap();
        assert_eq!(json, "185");
        let back: Money = serde_json::from_str("65").unwrap();
        assert_eq!(back, Money::from_cents(65));
    }
}
