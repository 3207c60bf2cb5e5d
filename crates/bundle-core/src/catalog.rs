//! # Catalog
//!
//! The immutable, ordered product list the engine prices against.
//!
//! Declaration order is the order products are rendered and quoted in.

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Product, ProductId, CORE_PRODUCT_ID};
use crate::validation::validate_catalog;

/// A validated, read-only product catalog.
///
/// ## Invariants
/// - Non-empty, ids unique, prices non-negative
/// - Exactly one product has id `"core"`
///
/// There is no mutating API; a catalog lives for the host's lifetime and can
/// be shared by reference without synchronization.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    core_index: usize,
}

impl Catalog {
    /// Builds a catalog after validating its invariants.
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        validate_catalog(&products)?;
        let core_index = products
            .iter()
            .position(Product::is_core)
            .ok_or_else(|| ValidationError::Required {
                field: "core product".to_string(),
            })?;
        Ok(Catalog {
            products,
            core_index,
        })
    }

    /// The fixed four-product license catalog.
    ///
    /// | id    | base | add-on | subtitle    |
    /// |-------|------|--------|-------------|
    /// | core  | 185  | -      | -           |
    /// | stock | 370  | 185    | "core inc." |
    /// | maps  | 250  | 65     | "core inc." |
    /// | gantt | 222  | 37     | "core inc." |
    pub fn standard() -> Self {
        let bundle = |id: &str, name: &str, base: i64, addon: i64| Product {
            id: ProductId::from(id),
            name: name.to_string(),
            subtitle: Some("core inc.".to_string()),
            base_price: Money::from_cents(base),
            addon_price: Some(Money::from_cents(addon)),
            includes_core: true,
            depends_on_core: false,
        };

        let products = vec![
            Product {
                id: ProductId::from(CORE_PRODUCT_ID),
                name: "Core".to_string(),
                subtitle: None,
                base_price: Money::from_cents(185),
                addon_price: None,
                includes_core: true,
                depends_on_core: false,
            },
            bundle("stock", "Stock", 370, 185),
            bundle("maps", "Maps", 250, 65),
            bundle("gantt", "Gantt", 222, 37),
        ];

        Catalog {
            products,
            core_index: 0,
        }
    }

    /// Products in declaration order.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Whether the catalog has a product with this id.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The Core product.
    #[inline]
    pub fn core(&self) -> &Product {
        &self.products[self.core_index]
    }

    /// `CORE_PRICE`: the Core product's base price.
    #[inline]
    pub fn core_price(&self) -> Money {
        self.core().base_price
    }

    /// Number of products.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Always false for a validated catalog; present for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_standard_catalog_is_valid() {
        let catalog = Catalog::standard();
        assert!(validate_catalog(catalog.products()).is_ok());
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.core().id, "core");
        assert_eq!(catalog.core_price(), Money::from_cents(185));
    }

    #[test]
    fn test_standard_catalog_order_and_prices() {
        let catalog = Catalog::standard();
        let ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["core", "stock", "maps", "gantt"]);

        let maps = catalog.get("maps").unwrap();
        assert_eq!(maps.base_price.cents(), 250);
        assert_eq!(maps.addon_price, Some(Money::from_cents(65)));
        assert!(catalog.products().iter().all(|p| p.includes_core));
        assert!(catalog.products().iter().all(|p| !p.depends_on_core));
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::standard();
        assert!(catalog.contains("gantt"));
        assert!(!catalog.contains("charts"));
        assert!(catalog.get("").is_none());
    }

    #[test]
    fn test_new_finds_core_anywhere() {
        let mut products = Catalog::standard().products().to_vec();
        products.rotate_left(2);
        let catalog = Catalog::new(products).unwrap();
        assert_eq!(catalog.core().id, "core");
        assert_eq!(catalog.products()[0].id, "maps");
    }

    #[test]
    fn test_new_rejects_invalid() {
        let products: Vec<Product> = Catalog::standard()
            .products()
            .iter()
            .filter(|p| !p.is_core())
            .cloned()
            .collect();
        let err = Catalog::new(products).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidCatalog(ValidationError::Required { .. })
        ));
    }
}
