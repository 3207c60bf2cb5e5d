//! # Catalog Commands

use bundle_core::Product;
use tracing::debug;

use crate::state::CatalogState;

/// Lists every product in catalog order.
pub fn list_products(catalog: &CatalogState) -> Vec<Product> {
    debug!("list_products command");
    catalog.inner().products().to_vec()
}
