use serde::{Deserialize, Serialize};

/// Number of columns in a feature row
pub const FEATURE_COUNT: usize = 15;

/// How a feature's raw value is checked and stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureKind {
    /// Native integer supplied by the form
    Integer,
    /// Text that must parse as a base-10 integer; stored as text
    IntegerText,
    /// Text that must parse as a float; stored as text
    FloatText,
    /// `sys/dia` reading; stored in canonical form
    BloodPressure,
    /// Dropdown selection; stored as is, never checked
    Choice,
}

/// One column of the classifier's input row.
///
/// Declaration order is the training column order. Reordering the variants
/// changes the row the model receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Feature {
    Age,
    Gravida,
    TtInjection,
    GestationalAge,
    Weight,
    Height,
    BloodPressure,
    Anemia,
    Jaundice,
    FetalPosition,
    FetalHeartRate,
    UrineAlbumin,
    UrineSugar,
    Vdrl,
    Hrsag,
}

impl Feature {
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::Age,
        Feature::Gravida,
        Feature::TtInjection,
        Feature::GestationalAge,
        Feature::Weight,
        Feature::Height,
        Feature::BloodPressure,
        Feature::Anemia,
        Feature::Jaundice,
        Feature::FetalPosition,
        Feature::FetalHeartRate,
        Feature::UrineAlbumin,
        Feature::UrineSugar,
        Feature::Vdrl,
        Feature::Hrsag,
    ];

    /// Position of this feature in the row
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column name as spelled in the training data
    pub fn column(self) -> &'static str {
        match self {
            Feature::Age => "Age",
            Feature::Gravida => "Gravida",
            Feature::TtInjection => "TranslationTT Injection",
            Feature::GestationalAge => "Gestational Age",
            Feature::Weight => "Weight",
            Feature::Height => "Height",
            Feature::BloodPressure => "Blood Pressure",
            Feature::Anemia => "Anemia",
            Feature::Jaundice => "Jaundice",
            Feature::FetalPosition => "Fetal Position",
            Feature::FetalHeartRate => "Fetal Heart Rate",
            Feature::UrineAlbumin => "Urine Test – Albumin",
            Feature::UrineSugar => "Urine Test – Sugar",
            Feature::Vdrl => "VDRL",
            Feature::Hrsag => "HRsAG",
        }
    }

    /// Human-facing label used in messages
    pub fn label(self) -> &'static str {
        match self {
            Feature::TtInjection => "TT Injection",
            Feature::UrineAlbumin => "Urine Albumin",
            Feature::UrineSugar => "Urine Sugar",
            other => other.column(),
        }
    }

    pub fn kind(self) -> FeatureKind {
        match self {
            Feature::Age => FeatureKind::Integer,
            Feature::GestationalAge | Feature::FetalHeartRate => FeatureKind::IntegerText,
            Feature::Weight | Feature::Height => FeatureKind::FloatText,
            Feature::BloodPressure => FeatureKind::BloodPressure,
            _ => FeatureKind::Choice,
        }
    }

    /// Options the form offers for a dropdown field, without the empty
    /// "unselected" entry. Empty for free-text and numeric fields.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            Feature::Gravida | Feature::TtInjection => &["1st", "2nd", "3rd"],
            Feature::Anemia => &["Normal", "Mild", "Moderate", "Severe"],
            Feature::Jaundice => &["Normal", "Yes"],
            Feature::FetalPosition => &["Normal", "Abnormal"],
            Feature::UrineAlbumin => &["Normal", "Higher"],
            Feature::UrineSugar => &["No", "Yes"],
            Feature::Vdrl | Feature::Hrsag => &["Negative", "Positive"],
            _ => &[],
        }
    }

    /// Look a feature up by its training column name
    pub fn from_column(name: &str) -> Option<Feature> {
        Feature::ALL.into_iter().find(|f| f.column() == name)
    }
}
