use mrisk_features::FeatureRecord;
use thiserror::Error;

/// Errors a classifier can raise while scoring a row
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifierError {
    #[error("feature names mismatch: model expects {expected:?}, row has {found:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
    #[error("unseen category {value:?} in column '{column}'")]
    UnseenCategory { column: String, value: String },
    #[error("could not convert {value:?} in column '{column}' to a number")]
    NotNumeric { column: String, value: String },
    #[error("{0}")]
    Backend(String),
}

/// Read-only scoring operations of a trained binary classifier.
///
/// Both operations take a single row. Implementations must be safe to call
/// from several threads at once; the model is loaded once and shared.
pub trait Classifier: Send + Sync {
    /// Model identifier, for logs
    fn name(&self) -> &str;

    /// Predicted class for the row (`1` means high risk)
    fn predict_label(&self, record: &FeatureRecord) -> Result<i64, ClassifierError>;

    /// Per-class probabilities for the row, ordered by class
    fn predict_probabilities(&self, record: &FeatureRecord) -> Result<Vec<f64>, ClassifierError>;
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn predict_label(&self, record: &FeatureRecord) -> Result<i64, ClassifierError> {
        (**self).predict_label(record)
    }

    fn predict_probabilities(&self, record: &FeatureRecord) -> Result<Vec<f64>, ClassifierError> {
        (**self).predict_probabilities(record)
    }
}
