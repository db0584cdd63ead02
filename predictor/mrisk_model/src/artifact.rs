//! JSON model artifact: a logistic scorer over the raw form columns.
//!
//! The artifact names its columns in training order and says how each raw
//! cell is encoded. Categorical levels it never saw, text that is not a
//! number, and rows whose columns differ from the artifact's are scoring
//! errors, never panics.
//!
//! ```json
//! {
//!   "name": "maternal-risk-v3",
//!   "bias": -4.2,
//!   "columns": [
//!     {"name": "Age", "encoding": {"kind": "numeric", "weight": 0.05}},
//!     {"name": "Anemia", "encoding": {"kind": "categorical",
//!       "levels": {"": 0.0, "Normal": 0.0, "Mild": 0.4}}},
//!     {"name": "Blood Pressure", "encoding": {"kind": "blood_pressure",
//!       "systolic_weight": 0.02, "diastolic_weight": 0.01}}
//!   ]
//! }
//! ```

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use mrisk_features::{BloodPressure, FeatureRecord, FeatureValue};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classifier::{Classifier, ClassifierError};

/// Startup failures. Any of these halts the service.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Model file not found: `{}`", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to load model: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to load model: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Failed to load model: {0}")]
    Invalid(String),
}

/// Scale the artifact reports probabilities on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputScale {
    #[default]
    Unit,
    /// 0 to 100
    Percent,
}

impl OutputScale {
    fn factor(self) -> f64 {
        match self {
            OutputScale::Unit => 1.0,
            OutputScale::Percent => 100.0,
        }
    }
}

/// How a raw cell becomes a contribution to the logit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Encoding {
    Numeric {
        weight: f64,
    },
    Categorical {
        levels: BTreeMap<String, f64>,
    },
    BloodPressure {
        systolic_weight: f64,
        diastolic_weight: f64,
    },
}

impl Encoding {
    fn contribution(&self, column: &str, value: &FeatureValue) -> Result<f64, ClassifierError> {
        match self {
            Encoding::Numeric { weight } => Ok(weight * numeric_cell(column, value)?),
            Encoding::Categorical { levels } => {
                let key = value.to_string();
                levels
                    .get(&key)
                    .copied()
                    .ok_or_else(|| ClassifierError::UnseenCategory {
                        column: column.to_string(),
                        value: key,
                    })
            }
            Encoding::BloodPressure {
                systolic_weight,
                diastolic_weight,
            } => {
                let text = value.to_string();
                let reading =
                    BloodPressure::parse_exact(&text).map_err(|_| ClassifierError::NotNumeric {
                        column: column.to_string(),
                        value: text.clone(),
                    })?;
                Ok(systolic_weight * f64::from(reading.systolic_mmhg())
                    + diastolic_weight * f64::from(reading.diastolic_mmhg()))
            }
        }
    }
}

fn numeric_cell(column: &str, value: &FeatureValue) -> Result<f64, ClassifierError> {
    match value {
        FeatureValue::Int(i) => Ok(*i as f64),
        FeatureValue::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| ClassifierError::NotNumeric {
                column: column.to_string(),
                value: s.clone(),
            }),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub encoding: Encoding,
}

fn default_threshold() -> f64 {
    0.5
}

fn default_classes() -> Vec<i64> {
    vec![0, 1]
}

/// A trained model as shipped on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactModel {
    pub name: String,
    pub columns: Vec<ColumnSpec>,
    pub bias: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Class labels, negative class first
    #[serde(default = "default_classes")]
    pub classes: Vec<i64>,
    #[serde(default)]
    pub output_scale: OutputScale,
}

impl ArtifactModel {
    /// Read and check an artifact file
    pub fn load(path: impl AsRef<Path>) -> Result<ArtifactModel, LoadError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        let model = Self::from_json(&text)?;
        info!(
            "loaded model '{}' from {} ({} columns)",
            model.name,
            path.display(),
            model.columns.len()
        );
        Ok(model)
    }

    pub fn from_json(text: &str) -> Result<ArtifactModel, LoadError> {
        let model: ArtifactModel = serde_json::from_str(text)?;
        model.check()?;
        Ok(model)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Structural checks that do not depend on any row
    pub fn check(&self) -> Result<(), LoadError> {
        if self.columns.is_empty() {
            return Err(LoadError::Invalid("model declares no columns".into()));
        }
        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.name.as_str()) {
                return Err(LoadError::Invalid(format!(
                    "column '{}' is declared twice",
                    column.name
                )));
            }
        }
        if self.classes.is_empty() || self.classes.len() > 2 {
            return Err(LoadError::Invalid(format!(
                "expected one or two classes, found {}",
                self.classes.len()
            )));
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(LoadError::Invalid(format!(
                "threshold {} is outside [0, 1]",
                self.threshold
            )));
        }
        if !self.bias.is_finite() {
            return Err(LoadError::Invalid("bias is not finite".into()));
        }
        Ok(())
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    fn check_schema(&self, record: &FeatureRecord) -> Result<(), ClassifierError> {
        let found = record.column_names();
        if self.column_names().eq(found.iter().copied()) {
            Ok(())
        } else {
            Err(ClassifierError::SchemaMismatch {
                expected: self.column_names().map(str::to_string).collect(),
                found: found.iter().map(|s| s.to_string()).collect(),
            })
        }
    }

    /// Probability of the second class before output scaling
    fn positive_probability(&self, record: &FeatureRecord) -> Result<f64, ClassifierError> {
        self.check_schema(record)?;
        let mut logit = self.bias;
        for (spec, (_, value)) in self.columns.iter().zip(record.iter()) {
            logit += spec.encoding.contribution(&spec.name, value)?;
        }
        let p = sigmoid(logit);
        debug!("model '{}': logit {logit:.4}, p {p:.4}", self.name);
        Ok(p)
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

impl Classifier for ArtifactModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict_label(&self, record: &FeatureRecord) -> Result<i64, ClassifierError> {
        let p = self.positive_probability(record)?;
        let class = match self.classes.as_slice() {
            [only] => *only,
            [negative, positive, ..] => {
                if p >= self.threshold {
                    *positive
                } else {
                    *negative
                }
            }
            [] => return Err(ClassifierError::Backend("model has no classes".into())),
        };
        Ok(class)
    }

    fn predict_probabilities(&self, record: &FeatureRecord) -> Result<Vec<f64>, ClassifierError> {
        let p = self.positive_probability(record)?;
        let factor = self.output_scale.factor();
        let probabilities = if self.classes.len() == 1 {
            vec![factor]
        } else {
            vec![(1.0 - p) * factor, p * factor]
        };
        Ok(probabilities)
    }
}
