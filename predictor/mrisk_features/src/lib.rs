//! Patient input handling for the maternal risk predictor.
//!
//! Raw form values arrive as [`RawFields`], go through [`validate`], and come
//! out either as a [`FeatureRecord`] in the column order the classifier was
//! trained on or as a [`ValidationError`] listing every field that failed.

pub mod feature;
pub mod fields;
pub mod number;
pub mod pressure;
pub mod record;
pub mod validate;

pub use feature::{Feature, FeatureKind, FEATURE_COUNT};
pub use fields::{RawFields, AGE_RANGE, DEFAULT_AGE};
pub use pressure::{BloodPressure, PressureError};
pub use record::{FeatureRecord, FeatureValue};
pub use validate::{validate, FieldError, ValidationError};
