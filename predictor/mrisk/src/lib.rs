//! Maternal high-risk pregnancy predictor.
//!
//! Ties the validator and the prediction adapter together behind one entry
//! point, [`validate_and_score`], and renders the outcome for the terminal or
//! as JSON.

pub mod config;
pub mod render;

use log::debug;
use mrisk_features::{validate, FeatureRecord, RawFields, ValidationError};
use mrisk_model::{Classifier, PredictionAdapter, PredictionError, PredictionResult};
use thiserror::Error;

pub use config::{Config, OutputFormat, DEFAULT_MODEL_PATH};
pub use render::Report;

/// Why a request produced no prediction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Prediction(#[from] PredictionError),
}

impl ScoreError {
    /// Messages to show the user, in order
    pub fn messages(&self) -> Vec<String> {
        match self {
            ScoreError::Validation(err) => err.messages(),
            ScoreError::Prediction(err) => vec![err.to_string()],
        }
    }
}

/// A scored request: the row the model saw and what it said
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub record: FeatureRecord,
    pub result: PredictionResult,
}

/// Validate the form and, only if every check passes, score the row
pub fn assess<C: Classifier + ?Sized>(
    raw: &RawFields,
    adapter: &PredictionAdapter<'_, C>,
) -> Result<Assessment, ScoreError> {
    let record = validate(raw)?;
    let result = adapter.score(&record)?;
    debug!(
        "assessment: {:?} at probability {:.4}",
        result.label, result.probability
    );
    Ok(Assessment { record, result })
}

pub fn validate_and_score<C: Classifier + ?Sized>(
    raw: &RawFields,
    adapter: &PredictionAdapter<'_, C>,
) -> Result<PredictionResult, ScoreError> {
    assess(raw, adapter).map(|assessment| assessment.result)
}
