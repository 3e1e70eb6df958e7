use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use snapshelf_core::{ExpiryPrediction, IExpiryStrategy, ItemAttributes};
use snapshelf_prediction::{PredictionService, RuleBasedStrategy};

const CATEGORIES: &[&str] = &[
    "dairy", "meat", "poultry", "fish", "produce", "vegetables", "fruits", "bakery", "bread",
    "eggs", "condiments", "canned", "frozen", "spices", "",
];
const STORAGES: &[&str] = &["fridge", "freezer", "pantry", "garage", ""];
const KNOWN_STORAGES: &[&str] = &["fridge", "freezer", "pantry"];

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..40_000)
        .prop_map(|offset| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + Days::new(offset))
}

/// A known or unknown key, or arbitrary text.
fn arb_key(known: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None::<String>),
        prop::sample::select(known).prop_map(|s| Some(s.to_string())),
        "\\PC{0,12}".prop_map(Some),
    ]
}

/// Same key with random case and padding.
fn mangle(key: &str, upper: bool, pad: usize) -> String {
    let cased = if upper { key.to_uppercase() } else { key.to_string() };
    format!("{}{}{}", " ".repeat(pad), cased, "\t".repeat(pad))
}

fn arb_item() -> impl Strategy<Value = ItemAttributes> {
    (
        "\\PC{1,20}",
        arb_key(CATEGORIES),
        arb_key(STORAGES),
        prop::option::of(arb_date()),
    )
        .prop_map(|(name, category, storage_location, purchase_date)| ItemAttributes {
            name,
            category,
            storage_location,
            purchase_date,
        })
}

fn same_output(a: &ExpiryPrediction, b: &ExpiryPrediction) -> bool {
    a.expiry_date() == b.expiry_date()
        && a.confidence().value().to_bits() == b.confidence().value().to_bits()
        && a.reasoning() == b.reasoning()
}

proptest! {
    #[test]
    fn confidence_is_always_in_range(item in arb_item(), today in arb_date()) {
        let p = RuleBasedStrategy::new().predict_as_of(&item, today);
        prop_assert!((0.0..=1.0).contains(&p.confidence().value()));
    }

    #[test]
    fn expiry_never_precedes_purchase(item in arb_item(), today in arb_date()) {
        let p = RuleBasedStrategy::new().predict_as_of(&item, today);
        let purchase = item.purchase_date.unwrap_or(today);
        prop_assert!(p.expiry_date() >= purchase);
    }

    #[test]
    fn reasoning_is_never_empty(item in arb_item(), today in arb_date()) {
        let p = RuleBasedStrategy::new().predict_as_of(&item, today);
        prop_assert!(!p.reasoning().trim().is_empty());
    }

    #[test]
    fn predictions_are_deterministic(item in arb_item(), today in arb_date()) {
        let strategy = RuleBasedStrategy::new();
        let first = strategy.predict_as_of(&item, today);
        let second = strategy.predict_as_of(&item, today);
        prop_assert!(same_output(&first, &second));
    }

    #[test]
    fn matching_ignores_case_and_padding(
        category in prop::sample::select(CATEGORIES),
        storage in prop::sample::select(STORAGES),
        upper in any::<bool>(),
        pad in 0usize..3,
        today in arb_date(),
    ) {
        let strategy = RuleBasedStrategy::new();
        let plain = ItemAttributes::new("item").with_category(category).with_storage(storage);
        let mangled = ItemAttributes::new("item")
            .with_category(mangle(category, upper, pad))
            .with_storage(mangle(storage, !upper, pad));
        prop_assert!(same_output(
            &strategy.predict_as_of(&plain, today),
            &strategy.predict_as_of(&mangled, today),
        ));
    }

    #[test]
    fn storage_only_outranks_fallback(
        storage in prop::sample::select(KNOWN_STORAGES),
        today in arb_date(),
    ) {
        let strategy = RuleBasedStrategy::new();
        let stored = ItemAttributes::new("x").with_storage(storage);
        let storage_only = strategy.predict_as_of(&stored, today);
        let fallback = strategy.predict_as_of(&ItemAttributes::new("x"), today);
        prop_assert!(storage_only.confidence() > fallback.confidence());
    }

    #[test]
    fn select_best_is_a_maximal_member(item in arb_item(), today in arb_date()) {
        let service = PredictionService::new();
        let all = service.predict_with_all_strategies_as_of(&item, today);
        let best = service.select_best_as_of(&item, today);
        prop_assert!(all.contains(&best));
        prop_assert!(all.iter().all(|p| p.confidence() <= best.confidence()));
    }
}
