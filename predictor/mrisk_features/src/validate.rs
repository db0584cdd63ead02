//! Field checks that turn form input into a [`FeatureRecord`].
//!
//! Every check runs on every call so the user sees all problems at once.
//! Dropdown fields are not checked: an unselected dropdown reaches the model
//! as an empty string.

use std::fmt;

use log::debug;
use thiserror::Error;

use crate::feature::Feature;
use crate::fields::RawFields;
use crate::number::{is_float, is_integer};
use crate::pressure::BloodPressure;
use crate::record::FeatureRecord;

/// A single failed field check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FieldError {
    #[error("Gestational Age must be a number")]
    GestationalAge,
    #[error("Weight must be a number")]
    Weight,
    #[error("Height must be a number")]
    Height,
    #[error("Fetal Heart Rate must be a number")]
    FetalHeartRate,
    #[error("Blood Pressure must be in format `120/80`")]
    BloodPressure,
}

impl FieldError {
    pub fn feature(self) -> Feature {
        match self {
            FieldError::GestationalAge => Feature::GestationalAge,
            FieldError::Weight => Feature::Weight,
            FieldError::Height => Feature::Height,
            FieldError::FetalHeartRate => Feature::FetalHeartRate,
            FieldError::BloodPressure => Feature::BloodPressure,
        }
    }
}

/// Every field check that failed, in check order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// User-facing messages, one per failed field
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("\n"))
    }
}

impl std::error::Error for ValidationError {}

/// Check the raw form values and build the classifier row.
///
/// Blood pressure is stored as the matched `sys/dia` only; text after a
/// valid reading is dropped without an error.
pub fn validate(raw: &RawFields) -> Result<FeatureRecord, ValidationError> {
    let mut errors = Vec::new();

    if !is_integer(&raw.gestational_age) {
        errors.push(FieldError::GestationalAge);
    }
    if !is_float(&raw.weight) {
        errors.push(FieldError::Weight);
    }
    if !is_float(&raw.height) {
        errors.push(FieldError::Height);
    }
    if !is_integer(&raw.fetal_heart_rate) {
        errors.push(FieldError::FetalHeartRate);
    }

    let pressure = match BloodPressure::parse_prefix(&raw.blood_pressure) {
        Ok((pressure, rest)) => {
            if !rest.is_empty() {
                debug!("discarding {rest:?} after blood pressure reading {pressure}");
            }
            Some(pressure)
        }
        Err(err) => {
            debug!("blood pressure rejected: {err}");
            errors.push(FieldError::BloodPressure);
            None
        }
    };

    match pressure {
        Some(pressure) if errors.is_empty() => {
            let record = FeatureRecord::assemble(raw, &pressure);
            debug!("validated feature record: {record:?}");
            Ok(record)
        }
        _ => {
            debug!("validation failed on {} field(s)", errors.len());
            Err(ValidationError { errors })
        }
    }
}
