//! Draft intake enrichment.
//!
//! When a draft item arrives without an expiration date, fill it in from the
//! prediction service before the draft is stored. Persisting the draft and
//! promoting it to inventory happen elsewhere.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use snapshelf_core::config::IntakeConfig;
use snapshelf_core::intake_span;
use snapshelf_core::traits::local_today;
use snapshelf_core::{ExpiryPrediction, ItemAttributes};

use crate::engine::PredictionService;

/// An unconfirmed item as submitted by the user or an upstream scanner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftItem {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl DraftItem {
    fn attributes(&self) -> ItemAttributes {
        ItemAttributes {
            name: self.name.clone(),
            category: self.category.clone(),
            storage_location: self.location.clone(),
            purchase_date: self.purchase_date,
        }
    }
}

/// A draft after enrichment, with the prediction that was applied (if any).
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedDraft {
    pub draft: DraftItem,
    pub prediction: Option<ExpiryPrediction>,
    /// The applied prediction fell below the configured review threshold.
    pub needs_review: bool,
}

/// Applies expiry predictions to incoming drafts.
#[derive(Debug, Clone)]
pub struct DraftEnricher {
    service: Arc<PredictionService>,
    config: IntakeConfig,
}

impl DraftEnricher {
    pub fn new(service: Arc<PredictionService>, config: IntakeConfig) -> Self {
        Self { service, config }
    }

    pub fn enrich(&self, draft: DraftItem) -> EnrichedDraft {
        self.enrich_as_of(draft, local_today())
    }

    /// Fill a missing expiration date, keep a caller-set confidence, and
    /// record the reasoning in the notes.
    pub fn enrich_as_of(&self, mut draft: DraftItem, today: NaiveDate) -> EnrichedDraft {
        let _span = intake_span!(draft.expiration_date.is_some()).entered();

        if !self.config.predict_expiry || draft.expiration_date.is_some() {
            return EnrichedDraft {
                draft,
                prediction: None,
                needs_review: false,
            };
        }

        let prediction = self.service.predict_expiry_as_of(&draft.attributes(), today);

        draft.expiration_date = Some(prediction.expiry_date());
        if draft.confidence_score.is_none() {
            draft.confidence_score = Some(prediction.confidence().value());
        }
        let note = format!("[Auto-predicted: {}]", prediction.reasoning());
        draft.notes = Some(match draft.notes.take() {
            Some(existing) if !existing.is_empty() => format!("{existing}\n{note}"),
            _ => note,
        });

        let needs_review = prediction
            .confidence()
            .is_below(self.config.review_threshold);
        if needs_review {
            tracing::info!(
                confidence = prediction.confidence().value(),
                threshold = self.config.review_threshold,
                "auto-predicted expiry flagged for review"
            );
        }

        EnrichedDraft {
            draft,
            prediction: Some(prediction),
            needs_review,
        }
    }
}
