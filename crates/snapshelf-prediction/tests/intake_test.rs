use std::sync::Arc;

use chrono::NaiveDate;
use snapshelf_core::config::IntakeConfig;
use snapshelf_prediction::{DraftEnricher, DraftItem, PredictionService};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn enricher(config: IntakeConfig) -> DraftEnricher {
    DraftEnricher::new(Arc::new(PredictionService::new()), config)
}

fn draft(name: &str, category: Option<&str>, location: Option<&str>) -> DraftItem {
    DraftItem {
        name: name.to_string(),
        category: category.map(str::to_string),
        location: location.map(str::to_string),
        ..Default::default()
    }
}

#[test]
fn missing_expiry_is_predicted() {
    let enriched = enricher(IntakeConfig::default())
        .enrich_as_of(draft("Milk", Some("dairy"), Some("fridge")), today());

    assert_eq!(
        enriched.draft.expiration_date,
        NaiveDate::from_ymd_opt(2024, 1, 8)
    );
    assert_eq!(enriched.draft.confidence_score, Some(0.85));
    assert_eq!(
        enriched.draft.notes.as_deref(),
        Some("[Auto-predicted: Based on category 'dairy' stored in 'fridge': typical shelf life is 7 days]")
    );
    assert!(enriched.prediction.is_some());
    assert!(!enriched.needs_review);
}

#[test]
fn existing_expiry_is_left_alone() {
    let mut item = draft("Milk", Some("dairy"), Some("fridge"));
    item.expiration_date = NaiveDate::from_ymd_opt(2024, 2, 1);
    let enriched = enricher(IntakeConfig::default()).enrich_as_of(item.clone(), today());

    assert_eq!(enriched.draft, item);
    assert!(enriched.prediction.is_none());
    assert!(!enriched.needs_review);
}

#[test]
fn prediction_can_be_disabled() {
    let config = IntakeConfig {
        predict_expiry: false,
        ..Default::default()
    };
    let item = draft("Milk", Some("dairy"), Some("fridge"));
    let enriched = enricher(config).enrich_as_of(item.clone(), today());
    assert_eq!(enriched.draft, item);
    assert!(enriched.prediction.is_none());
}

#[test]
fn caller_confidence_is_kept() {
    let mut item = draft("Milk", Some("dairy"), Some("fridge"));
    item.confidence_score = Some(0.42);
    let enriched = enricher(IntakeConfig::default()).enrich_as_of(item, today());
    assert_eq!(enriched.draft.confidence_score, Some(0.42));
    assert!(enriched.draft.expiration_date.is_some());
}

#[test]
fn existing_notes_get_prediction_on_new_line() {
    let mut item = draft("Bagels", Some("bakery"), Some("pantry"));
    item.notes = Some("from the corner shop".to_string());
    let enriched = enricher(IntakeConfig::default()).enrich_as_of(item, today());
    let notes = enriched.draft.notes.unwrap();
    assert!(notes.starts_with("from the corner shop\n[Auto-predicted: "));
    assert!(notes.ends_with("typical shelf life is 5 days]"));
}

#[test]
fn purchase_date_on_draft_is_used() {
    let mut item = draft("Eggs", Some("eggs"), Some("fridge"));
    item.purchase_date = NaiveDate::from_ymd_opt(2023, 12, 20);
    let enriched = enricher(IntakeConfig::default()).enrich_as_of(item, today());
    assert_eq!(
        enriched.draft.expiration_date,
        NaiveDate::from_ymd_opt(2024, 1, 10)
    );
}

#[test]
fn low_confidence_prediction_is_flagged_for_review() {
    let enriched =
        enricher(IntakeConfig::default()).enrich_as_of(draft("Mystery", None, None), today());
    assert!(enriched.needs_review);
    assert_eq!(enriched.draft.confidence_score, Some(0.30));
}

#[test]
fn review_threshold_is_configurable() {
    let config = IntakeConfig {
        review_threshold: 0.9,
        ..Default::default()
    };
    let enriched =
        enricher(config).enrich_as_of(draft("Milk", Some("dairy"), Some("fridge")), today());
    assert!(enriched.needs_review);
}

#[test]
fn draft_deserializes_with_only_a_name() {
    let item: DraftItem = serde_json::from_str(r#"{"name":"Apples","location":"pantry"}"#).unwrap();
    let enriched = enricher(IntakeConfig::default()).enrich_as_of(item, today());
    assert_eq!(
        enriched.draft.expiration_date,
        NaiveDate::from_ymd_opt(2024, 1, 31)
    );
}
