//! # Quote
//!
//! A complete, serializable snapshot of every derived value for one
//! selection. The presentation layer renders a `Quote` and nothing else.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐                    │
//! │  │ Core     │ │ Stock    │ │ Maps     │ │ Gantt    │                    │
//! │  │ Included │ │ $370     │ │ ~250~ 65 │ │ ~222~ 37 │                    │
//! │  │   [x]    │ │   [x]    │ │   [x]    │ │   [ ]    │                    │
//! │  └──────────┘ └──────────┘ └──────────┘ └──────────┘                    │
//! │                                                                         │
//! │  Total $435   [Clear]     ✓ add-on pricing applied                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every field is computed from the same `&Selection`, so a quote is always
//! internally consistent.

use serde::Serialize;
use ts_rs::TS;

use crate::money::Money;
use crate::pricing::PricingEngine;
use crate::selection::Selection;
use crate::types::{Product, ProductId};

/// One product tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuoteLine {
    pub product_id: ProductId,
    pub name: String,
    pub subtitle: Option<String>,

    /// Standalone price, struck through when `discounted`.
    pub list_price: Money,

    /// Price shown on the tile; `None` renders as "Included".
    pub display_price: Option<Money>,

    /// Price actually charged; `None` when not selected.
    pub billed_price: Option<Money>,

    pub selected: bool,
    pub auto_implied: bool,
    pub discounted: bool,

    /// Selected or auto-implied.
    pub active: bool,
}

/// Priced view of a whole selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Quote {
    /// One line per catalog product, in catalog order.
    pub lines: Vec<QuoteLine>,
    pub core_covered: bool,
    pub bundle_owner: Option<ProductId>,
    pub total: Money,

    /// Something is selected, so a clear action makes sense.
    pub can_clear: bool,

    /// Core is covered, so Core-including products are offered at add-on
    /// prices.
    pub addon_pricing_applied: bool,
}

impl Quote {
    /// Prices every catalog product against `selection`.
    pub fn build(engine: &PricingEngine<'_>, selection: &Selection) -> Self {
        let lines = engine
            .catalog()
            .products()
            .iter()
            .map(|product| QuoteLine::build(engine, product, selection))
            .collect();

        let core_covered = engine.core_is_covered(selection);

        Quote {
            lines,
            core_covered,
            bundle_owner: engine.core_bundle_owner(selection).cloned(),
            total: engine.total(selection),
            can_clear: !selection.is_empty(),
            addon_pricing_applied: core_covered,
        }
    }

    /// Finds the line for a product.
    pub fn line(&self, id: &str) -> Option<&QuoteLine> {
        self.lines.iter().find(|line| line.product_id == id)
    }
}

impl QuoteLine {
    fn build(engine: &PricingEngine<'_>, product: &Product, selection: &Selection) -> Self {
        QuoteLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            subtitle: product.subtitle.clone(),
            list_price: product.base_price,
            display_price: engine.effective_price(product, selection),
            billed_price: engine.selected_price(product, selection),
            selected: selection.contains(product.id.as_str()),
            auto_implied: engine.is_auto_implied(product, selection),
            discounted: engine.is_discounted(product, selection),
            active: engine.is_active(product, selection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn quote_for(ids: &[&str]) -> Quote {
        let catalog = Catalog::standard();
        let engine = PricingEngine::new(&catalog);
        let mut selection = Selection::new();
        for id in ids {
            engine.toggle(&mut selection, id).unwrap();
        }
        Quote::build(&engine, &selection)
    }

    #[test]
    fn test_empty_quote() {
        let quote = quote_for(&[]);
        assert_eq!(quote.lines.len(), 4);
        assert_eq!(quote.total, Money::zero());
        assert!(!quote.core_covered);
        assert!(!quote.can_clear);
        assert!(!quote.addon_pricing_applied);
        assert_eq!(quote.bundle_owner, None);
        assert!(quote.lines.iter().all(|line| !line.active));
    }

    #[test]
    fn test_quote_with_two_bundles() {
        let quote = quote_for(&["stock", "maps"]);
        assert_eq!(quote.total, Money::from_cents(435));
        assert_eq!(quote.bundle_owner, Some(ProductId::from("stock")));
        assert!(quote.can_clear);
        assert!(quote.addon_pricing_applied);

        let core = quote.line("core").unwrap();
        assert!(core.auto_implied);
        assert!(core.active);
        assert!(!core.selected);
        assert_eq!(core.display_price, None);
        assert_eq!(core.billed_price, None);

        let maps = quote.line("maps").unwrap();
        assert!(maps.discounted);
        assert_eq!(maps.list_price, Money::from_cents(250));
        assert_eq!(maps.billed_price, Some(Money::from_cents(65)));

        let gantt = quote.line("gantt").unwrap();
        assert!(!gantt.selected);
        assert!(gantt.discounted);
        assert_eq!(gantt.display_price, Some(Money::from_cents(37)));
        assert_eq!(gantt.billed_price, None);
    }

    #[test]
    fn test_total_matches_billed_lines() {
        let quote = quote_for(&["gantt", "core"]);
        let billed: Money = quote.lines.iter().filter_map(|l| l.billed_price).sum();
        assert_eq!(quote.total, billed);
    }

    #[test]
    fn test_quote_json_shape() {
        let json = serde_json::to_value(quote_for(&["stock"])).unwrap();
        assert_eq!(json["total"], 370);
        assert_eq!(json["bundleOwner"], "stock");
        assert_eq!(json["coreCovered"], true);
        assert_eq!(json["lines"][0]["productId"], "core");
        assert!(json["lines"][0]["displayPrice"].is_null());
        assert_eq!(json["lines"][0]["autoImplied"], true);
    }
}
