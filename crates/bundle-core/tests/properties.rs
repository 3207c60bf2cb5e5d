//! Property-based tests for the pricing engine.
//!
//! Random toggle sequences (including unknown ids and Core toggles) are
//! replayed against the standard catalog and the pricing invariants are
//! checked on every reachable selection.

use bundle_core::{Catalog, Money, PricingEngine, ProductId, Selection, ToggleOutcome};
use proptest::prelude::*;

/// Strategy for ids a user can click, plus one the catalog doesn't know.
fn id_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("core"),
        Just("stock"),
        Just("maps"),
        Just("gantt"),
        Just("charts"),
    ]
}

fn known_id_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("core"), Just("stock"), Just("maps"), Just("gantt")]
}

/// Replays toggles, ignoring unknown-id errors, and returns the selection.
fn replay(engine: &PricingEngine<'_>, ids: &[&str]) -> Selection {
    let mut selection = Selection::new();
    for id in ids {
        let _ = engine.toggle(&mut selection, id);
    }
    selection
}

/// Selected ids, ignoring order.
fn members(selection: &Selection) -> Vec<ProductId> {
    let mut ids: Vec<ProductId> = selection.iter().cloned().collect();
    ids.sort();
    ids
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        ..ProptestConfig::default()
    })]

    /// Toggling the same known id twice restores the selected set. When the
    /// id started out unselected the order is restored too; a re-added id
    /// moves to the back.
    #[test]
    fn double_toggle_restores_membership(
        history in prop::collection::vec(id_strategy(), 0..12),
        id in known_id_strategy(),
    ) {
        let catalog = Catalog::standard();
        let engine = PricingEngine::new(&catalog);
        let start = replay(&engine, &history);

        let mut selection = start.clone();
        engine.toggle(&mut selection, id).unwrap();
        engine.toggle(&mut selection, id).unwrap();

        prop_assert_eq!(members(&selection), members(&start));
        if !start.contains(id) || start.order().last().is_some_and(|last| last == id) {
            prop_assert_eq!(selection, start);
        }
    }

    /// Core is locked while any other product is selected.
    #[test]
    fn core_toggle_is_noop_when_bundled(history in prop::collection::vec(id_strategy(), 0..12)) {
        let catalog = Catalog::standard();
        let engine = PricingEngine::new(&catalog);
        let start = replay(&engine, &history);
        prop_assume!(start.has_non_core());

        let mut selection = start.clone();
        let outcome = engine.toggle(&mut selection, "core").unwrap();
        prop_assert_eq!(outcome, ToggleOutcome::Rejected);
        prop_assert_eq!(selection, start);
    }

    /// The owner is the earliest selected Core-including product.
    #[test]
    fn single_earliest_owner(history in prop::collection::vec(id_strategy(), 0..12)) {
        let catalog = Catalog::standard();
        let engine = PricingEngine::new(&catalog);
        let selection = replay(&engine, &history);

        let expected: Option<&ProductId> = selection
            .iter()
            .find(|id| catalog.get(id.as_str()).is_some_and(|p| p.includes_core));
        prop_assert_eq!(engine.core_bundle_owner(&selection), expected);

        let full_price_bundles = catalog
            .products()
            .iter()
            .filter(|p| p.includes_core && !p.is_core())
            .filter(|p| engine.selected_price(p, &selection) == Some(p.base_price))
            .filter(|p| engine.addon_price(p) != p.base_price)
            .count();
        prop_assert!(full_price_bundles <= 1);
    }

    /// Adding a Core-including product keeps the owner's price and adds the
    /// newcomer's add-on price.
    #[test]
    fn adding_bundle_never_reprices_owner(
        history in prop::collection::vec(id_strategy(), 0..12),
        id in prop_oneof![Just("stock"), Just("maps"), Just("gantt")],
    ) {
        let catalog = Catalog::standard();
        let engine = PricingEngine::new(&catalog);
        let before = replay(&engine, &history);
        prop_assume!(!before.contains(id));
        let owner_id = engine.core_bundle_owner(&before);
        prop_assume!(owner_id.is_some());
        let owner = engine.product(owner_id.unwrap().as_str()).unwrap();
        let owner_price = engine.selected_price(owner, &before);

        let mut after = before.clone();
        engine.toggle(&mut after, id).unwrap();

        let added = engine.product(id).unwrap();
        prop_assert_eq!(engine.core_bundle_owner(&after), Some(&owner.id));
        prop_assert_eq!(engine.selected_price(owner, &after), owner_price);
        prop_assert_eq!(
            engine.total(&after),
            engine.total(&before) + engine.addon_price(added)
        );
    }

    /// The total is exactly the sum of billed prices.
    #[test]
    fn total_is_sum_of_selected_prices(history in prop::collection::vec(id_strategy(), 0..12)) {
        let catalog = Catalog::standard();
        let engine = PricingEngine::new(&catalog);
        let selection = replay(&engine, &history);

        let sum: Money = catalog
            .products()
            .iter()
            .map(|p| engine.selected_price(p, &selection).unwrap_or_default())
            .sum();
        prop_assert_eq!(engine.total(&selection), sum);
        prop_assert!(!engine.total(&selection).is_negative());
    }

    /// Core is displayed as "Included" exactly when covered but not selected.
    #[test]
    fn auto_implied_only_for_uncharged_core(history in prop::collection::vec(id_strategy(), 0..12)) {
        let catalog = Catalog::standard();
        let engine = PricingEngine::new(&catalog);
        let selection = replay(&engine, &history);

        for product in catalog.products() {
            let implied = engine.is_auto_implied(product, &selection);
            prop_assert_eq!(implied, engine.effective_price(product, &selection).is_none());
            if implied {
                prop_assert!(product.is_core());
                prop_assert!(engine.selected_price(product, &selection).is_none());
            }
        }
    }
}

#[test]
fn unknown_id_leaves_selection_untouched() {
    let catalog = Catalog::standard();
    let engine = PricingEngine::new(&catalog);
    let mut selection = replay(&engine, &["maps", "stock"]);
    let before = selection.clone();

    assert!(engine.toggle(&mut selection, "charts").is_err());
    assert_eq!(selection, before);
}
