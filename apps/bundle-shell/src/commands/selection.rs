//! # Selection Commands
//!
//! Commands that change or read the selection.
//!
//! ## Selection Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐  toggle   ┌──────────┐  toggle   ┌──────────────────┐     │
//! │  │  Empty   │─────────►│ One      │─────────►│ Bundle owner +   │     │
//! │  │          │◄─────────│ bundle   │◄─────────│ add-on products  │     │
//! │  └──────────┘  toggle   └──────────┘  toggle   └──────────────────┘     │
//! │        ▲                                                │               │
//! │        └──────────────────── clear ─────────────────────┘               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutation answers with a fresh quote computed under the same lock as
//! the mutation itself.

use bundle_core::{ProductId, Quote, Selection, ToggleOutcome};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::{CatalogState, SelectionState};

/// Selection plus its quote.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResponse {
    /// What a toggle did; `None` for `clear` and `quote`.
    pub outcome: Option<ToggleOutcome>,

    /// Selected ids, first-selected-first.
    pub order: Vec<ProductId>,

    pub quote: Quote,
}

impl SelectionResponse {
    fn build(catalog: &CatalogState, selection: &Selection, outcome: Option<ToggleOutcome>) -> Self {
        SelectionResponse {
            outcome,
            order: selection.order().to_vec(),
            quote: Quote::build(&catalog.engine(), selection),
        }
    }
}

/// Selects or deselects a product.
///
/// ## Behavior
/// - Unselected product: appended to the selection
/// - Selected product: removed
/// - Core while another product is selected: refused, selection unchanged
///
/// ## Errors
/// `NOT_FOUND` if the id is not in the catalog.
pub fn toggle_product(
    catalog: &CatalogState,
    selection: &SelectionState,
    product_id: &str,
) -> Result<SelectionResponse, ApiError> {
    debug!(product_id = %product_id, "toggle_product command");
    let engine = catalog.engine();

    let result = selection.with_selection_mut(|s| {
        let outcome = engine.toggle(s, product_id)?;
        Ok::<SelectionResponse, ApiError>(SelectionResponse::build(catalog, s, Some(outcome)))
    });

    match &result {
        Ok(response) if response.outcome == Some(ToggleOutcome::Rejected) => {
            info!(product_id = %product_id, "core is supplied by a selected product");
        }
        Ok(response) => {
            info!(
                product_id = %product_id,
                outcome = ?response.outcome,
                total = %response.quote.total,
                "selection updated"
            );
        }
        Err(e) => warn!(product_id = %product_id, error = %e, "toggle failed"),
    }

    result
}

/// Clears the selection.
pub fn clear_selection(catalog: &CatalogState, selection: &SelectionState) -> SelectionResponse {
    debug!("clear_selection command");
    let engine = catalog.engine();

    selection.with_selection_mut(|s| {
        engine.clear(s);
        SelectionResponse::build(catalog, s, None)
    })
}

/// Prices the current selection without changing it.
pub fn get_quote(catalog: &CatalogState, selection: &SelectionState) -> SelectionResponse {
    debug!("get_quote command");
    selection.with_selection(|s| SelectionResponse::build(catalog, s, None))
}
