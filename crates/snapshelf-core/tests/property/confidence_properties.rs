use proptest::prelude::*;
use snapshelf_core::models::item_attributes::normalize;
use snapshelf_core::Confidence;

proptest! {
    #[test]
    fn confidence_always_clamped(value in any::<f64>()) {
        let c = Confidence::new(value).value();
        prop_assert!((0.0..=1.0).contains(&c));
    }

    #[test]
    fn in_range_values_are_preserved(value in 0.0f64..=1.0) {
        prop_assert_eq!(Confidence::new(value).value(), value);
    }

    #[test]
    fn normalize_is_idempotent(raw in "\\PC{0,16}") {
        let once = normalize(Some(raw.as_str()));
        let twice = normalize(once.as_deref());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalize_ignores_padding_and_case(raw in "[a-zA-Z]{1,12}", pad in 0usize..4) {
        let padded = format!("{}{}{}", " ".repeat(pad), raw.to_uppercase(), " ".repeat(pad));
        prop_assert_eq!(
            normalize(Some(padded.as_str())),
            normalize(Some(raw.to_lowercase().as_str()))
        );
    }
}
