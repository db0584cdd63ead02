use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::feature::Feature;

/// Ages the form accepts. Enforced by the form, not by [`crate::validate`].
pub const AGE_RANGE: RangeInclusive<i64> = 10..=70;

/// Age the form starts with
pub const DEFAULT_AGE: i64 = 25;

/// Values exactly as the form collected them.
///
/// Everything except `age` is free text. Dropdowns that were left unselected
/// arrive as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFields {
    /// Optional patient name; only used when rendering the verdict
    pub name: String,
    pub age: i64,
    pub gravida: String,
    pub tt_injection: String,
    pub gestational_age: String,
    pub weight: String,
    pub height: String,
    pub blood_pressure: String,
    pub anemia: String,
    pub jaundice: String,
    pub fetal_position: String,
    pub fetal_heart_rate: String,
    pub urine_albumin: String,
    pub urine_sugar: String,
    pub vdrl: String,
    pub hrsag: String,
}

impl Default for RawFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: DEFAULT_AGE,
            gravida: String::new(),
            tt_injection: String::new(),
            gestational_age: String::new(),
            weight: String::new(),
            height: String::new(),
            blood_pressure: String::new(),
            anemia: String::new(),
            jaundice: String::new(),
            fetal_position: String::new(),
            fetal_heart_rate: String::new(),
            urine_albumin: String::new(),
            urine_sugar: String::new(),
            vdrl: String::new(),
            hrsag: String::new(),
        }
    }
}

impl RawFields {
    /// Raw text for a feature, or `None` for [`Feature::Age`] which is not text
    pub fn text(&self, feature: Feature) -> Option<&str> {
        let value = match feature {
            Feature::Age => return None,
            Feature::Gravida => &self.gravida,
            Feature::TtInjection => &self.tt_injection,
            Feature::GestationalAge => &self.gestational_age,
            Feature::Weight => &self.weight,
            Feature::Height => &self.height,
            Feature::BloodPressure => &self.blood_pressure,
            Feature::Anemia => &self.anemia,
            Feature::Jaundice => &self.jaundice,
            Feature::FetalPosition => &self.fetal_position,
            Feature::FetalHeartRate => &self.fetal_heart_rate,
            Feature::UrineAlbumin => &self.urine_albumin,
            Feature::UrineSugar => &self.urine_sugar,
            Feature::Vdrl => &self.vdrl,
            Feature::Hrsag => &self.hrsag,
        };
        Some(value.as_str())
    }

    /// Name to show next to the verdict
    pub fn display_name(&self) -> &str {
        match self.name.trim() {
            "" => "Patient",
            name => name,
        }
    }
}
