use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::feature::{Feature, FEATURE_COUNT};
use crate::fields::RawFields;
use crate::pressure::BloodPressure;

/// A single cell of the feature row
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Int(i64),
    Text(String),
}

impl FeatureValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FeatureValue::Int(i) => Some(*i),
            FeatureValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FeatureValue::Int(_) => None,
            FeatureValue::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Int(i) => write!(f, "{i}"),
            FeatureValue::Text(s) => f.write_str(s),
        }
    }
}

/// The classifier's input row: fifteen cells in training column order.
///
/// Only [`crate::validate`] builds one, so a record always comes from input
/// that passed every check. Numeric fields other than age stay text, exactly
/// as typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeatureRecord {
    values: [FeatureValue; FEATURE_COUNT],
}

impl FeatureRecord {
    pub(crate) fn assemble(raw: &RawFields, pressure: &BloodPressure) -> Self {
        let values = Feature::ALL.map(|feature| match feature {
            Feature::Age => FeatureValue::Int(raw.age),
            Feature::BloodPressure => FeatureValue::Text(pressure.to_string()),
            other => FeatureValue::Text(raw.text(other).unwrap_or_default().to_string()),
        });
        Self { values }
    }

    pub fn get(&self, feature: Feature) -> &FeatureValue {
        &self.values[feature.index()]
    }

    /// Cell for a training column name, if the row has that column
    pub fn column(&self, name: &str) -> Option<&FeatureValue> {
        Feature::from_column(name).map(|feature| self.get(feature))
    }

    pub fn age(&self) -> i64 {
        self.get(Feature::Age).as_int().unwrap_or_default()
    }

    pub fn blood_pressure(&self) -> &str {
        self.get(Feature::BloodPressure)
            .as_text()
            .unwrap_or_default()
    }

    /// Column names in row order
    pub fn column_names(&self) -> [&'static str; FEATURE_COUNT] {
        Feature::ALL.map(Feature::column)
    }

    pub fn values(&self) -> &[FeatureValue] {
        &self.values
    }

    /// `(column name, value)` pairs in row order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FeatureValue)> + '_ {
        Feature::ALL
            .iter()
            .zip(self.values.iter())
            .map(|(feature, value)| (feature.column(), value))
    }
}

/// Serializes as a JSON object keyed by column name, in row order
impl Serialize for FeatureRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FEATURE_COUNT))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}
