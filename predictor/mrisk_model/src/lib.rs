//! Scoring side of the maternal risk predictor.
//!
//! A trained model sits behind the [`Classifier`] capability. The
//! [`PredictionAdapter`] borrows one, scores a validated
//! [`mrisk_features::FeatureRecord`], and reports a [`PredictionResult`]
//! whose probability is always in `[0, 1]`, whatever scale the model emits.
//! [`ArtifactModel`] is the JSON model format the binary loads at startup.

pub mod adapter;
pub mod artifact;
pub mod classifier;

pub use adapter::{
    high_risk_probability, normalize_probability, PredictionAdapter, PredictionError,
    PredictionResult, RiskLabel,
};
pub use artifact::{ArtifactModel, ColumnSpec, Encoding, LoadError, OutputScale};
pub use classifier::{Classifier, ClassifierError};
