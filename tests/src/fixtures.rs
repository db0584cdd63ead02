//! Shared inputs for the integration tests

use std::path::PathBuf;

use mrisk_features::RawFields;
use mrisk_model::ArtifactModel;

/// Path of the demo artifact shipped in `demos/`
pub fn demo_model_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("demos")
        .join("best_tuned_model.json")
}

/// The example patient in `demos/`, as `mrisk predict --input` reads it
pub fn demo_patient_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("demos")
        .join("patient.json")
}

pub fn demo_model() -> ArtifactModel {
    ArtifactModel::load(demo_model_path()).expect("demo model loads")
}

/// A complete, valid form for a low-risk patient
pub fn example_fields() -> RawFields {
    RawFields {
        name: String::new(),
        age: 28,
        gravida: "2nd".into(),
        tt_injection: "1st".into(),
        gestational_age: "32".into(),
        weight: "65.5".into(),
        height: "5.4".into(),
        blood_pressure: "120/80".into(),
        anemia: "Mild".into(),
        jaundice: "Normal".into(),
        fetal_position: "Normal".into(),
        fetal_heart_rate: "140".into(),
        urine_albumin: "Normal".into(),
        urine_sugar: "No".into(),
        vdrl: "Negative".into(),
        hrsag: "Negative".into(),
    }
}

/// A complete, valid form with every risk marker present
pub fn high_risk_fields() -> RawFields {
    RawFields {
        name: "High Risk".into(),
        age: 35,
        gravida: "3rd".into(),
        tt_injection: String::new(),
        gestational_age: "30".into(),
        weight: "80".into(),
        height: "5.0".into(),
        blood_pressure: "160/110".into(),
        anemia: "Severe".into(),
        jaundice: "Yes".into(),
        fetal_position: "Abnormal".into(),
        fetal_heart_rate: "170".into(),
        urine_albumin: "Higher".into(),
        urine_sugar: "Yes".into(),
        vdrl: "Positive".into(),
        hrsag: "Positive".into(),
    }
}

#[cfg(test)]
pub(crate) fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}
