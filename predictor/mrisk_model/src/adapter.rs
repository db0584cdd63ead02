use log::{debug, warn};
use mrisk_features::FeatureRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classifier::{Classifier, ClassifierError};

/// Scoring failed; the message is shown to the user and nothing is rendered
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("Prediction failed: {0}")]
    Classifier(#[from] ClassifierError),
    #[error("Prediction failed: model returned no class probabilities")]
    EmptyProbabilities,
    #[error("Prediction failed: model returned a probability that is not a number")]
    NotANumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLabel {
    Normal,
    HighRisk,
}

impl RiskLabel {
    /// Class `1` is high risk; every other class renders as normal
    pub fn from_class(class: i64) -> Self {
        if class == 1 {
            RiskLabel::HighRisk
        } else {
            RiskLabel::Normal
        }
    }

    pub fn class(self) -> u8 {
        match self {
            RiskLabel::Normal => 0,
            RiskLabel::HighRisk => 1,
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            RiskLabel::Normal => "NORMAL PREGNANCY",
            RiskLabel::HighRisk => "HIGH-RISK PREGNANCY",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: RiskLabel,
    /// High-risk probability in `[0, 1]`
    pub probability: f64,
}

/// Pick the high-risk entry: index 1 for two or more classes, index 0 for a
/// single-class output.
pub fn high_risk_probability(probabilities: &[f64]) -> Option<f64> {
    match probabilities {
        [] => None,
        [only] => Some(*only),
        [_, positive, ..] => Some(*positive),
    }
}

/// Bring a probability onto the `[0, 1]` scale.
///
/// Values above 1 are taken as percentages and divided by 100; the result is
/// then clamped. NaN is passed through for the caller to reject.
pub fn normalize_probability(raw: f64) -> f64 {
    let scaled = if raw > 1.0 { raw / 100.0 } else { raw };
    scaled.clamp(0.0, 1.0)
}

/// Scores validated rows with a borrowed classifier.
///
/// The classifier is owned by whoever loaded it; the adapter only reads it.
pub struct PredictionAdapter<'a, C: Classifier + ?Sized> {
    classifier: &'a C,
}

impl<'a, C: Classifier + ?Sized> PredictionAdapter<'a, C> {
    pub fn new(classifier: &'a C) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &'a C {
        self.classifier
    }

    pub fn score(&self, record: &FeatureRecord) -> Result<PredictionResult, PredictionError> {
        let class = self.classifier.predict_label(record)?;
        let probabilities = self.classifier.predict_probabilities(record)?;
        debug!(
            "model '{}' returned class {class} with probabilities {probabilities:?}",
            self.classifier.name()
        );

        if class != 0 && class != 1 {
            warn!("model returned non-binary class {class}; rendering it as normal");
        }

        let raw = high_risk_probability(&probabilities).ok_or(PredictionError::EmptyProbabilities)?;
        if raw.is_nan() {
            return Err(PredictionError::NotANumber);
        }
        if raw > 1.0 {
            warn!("probability {raw} is above 1, treating it as a percentage");
        }

        Ok(PredictionResult {
            label: RiskLabel::from_class(class),
            probability: normalize_probability(raw),
        })
    }
}
