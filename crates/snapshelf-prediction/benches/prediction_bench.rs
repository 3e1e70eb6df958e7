use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use snapshelf_core::{IExpiryStrategy, ItemAttributes};
use snapshelf_prediction::{PredictionService, RuleBasedStrategy};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// One item per fallback tier.
fn sample_items() -> Vec<ItemAttributes> {
    vec![
        ItemAttributes::new("Milk").with_category(" Dairy ").with_storage("FRIDGE"),
        ItemAttributes::new("Paprika").with_category("spices").with_storage("pantry"),
        ItemAttributes::new("Mystery"),
    ]
}

fn bench_rule_based_predict(c: &mut Criterion) {
    let strategy = RuleBasedStrategy::new();
    let items = sample_items();
    c.bench_function("rule_based_predict_3_tiers", |b| {
        b.iter(|| {
            for item in &items {
                black_box(strategy.predict_as_of(black_box(item), today()));
            }
        })
    });
}

fn bench_select_best(c: &mut Criterion) {
    let service = PredictionService::new();
    let items = sample_items();
    c.bench_function("service_select_best_3_tiers", |b| {
        b.iter(|| {
            for item in &items {
                black_box(service.select_best_as_of(black_box(item), today()));
            }
        })
    });
}

criterion_group!(benches, bench_rule_based_predict, bench_select_best);
criterion_main!(benches);
