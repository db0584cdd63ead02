use mrisk::{assess, validate_and_score, OutputFormat, Report, ScoreError};
use mrisk_features::{validate, Feature, FeatureValue, FieldError, RawFields};
use mrisk_model::{ArtifactModel, OutputScale, PredictionAdapter, PredictionError, RiskLabel};
use pretty_assertions::assert_eq;

use crate::fixtures::{
    demo_model, demo_patient_path, example_fields, high_risk_fields, init_test_logger,
};

#[test]
fn example_form_validates_to_expected_row() {
    init_test_logger();
    let record = validate(&example_fields()).expect("example form is valid");

    assert_eq!(record.blood_pressure(), "120/80");
    assert_eq!(record.get(Feature::Age), &FeatureValue::Int(28));
    for (feature, typed) in [
        (Feature::GestationalAge, "32"),
        (Feature::Weight, "65.5"),
        (Feature::Height, "5.4"),
        (Feature::FetalHeartRate, "140"),
    ] {
        assert_eq!(record.get(feature), &FeatureValue::Text(typed.into()));
    }
    assert_eq!(
        record.column_names().to_vec(),
        vec![
            "Age",
            "Gravida",
            "TranslationTT Injection",
            "Gestational Age",
            "Weight",
            "Height",
            "Blood Pressure",
            "Anemia",
            "Jaundice",
            "Fetal Position",
            "Fetal Heart Rate",
            "Urine Test – Albumin",
            "Urine Test – Sugar",
            "VDRL",
            "HRsAG",
        ]
    );
}

#[test]
fn demo_model_scores_example_as_normal() {
    init_test_logger();
    let model = demo_model();
    let adapter = PredictionAdapter::new(&model);
    let result = validate_and_score(&example_fields(), &adapter).unwrap();

    assert_eq!(result.label, RiskLabel::Normal);
    assert!(
        (result.probability - 0.2979).abs() < 1e-3,
        "got {}",
        result.probability
    );
}

#[test]
fn demo_model_flags_high_risk_patient() {
    let model = demo_model();
    let adapter = PredictionAdapter::new(&model);
    let result = validate_and_score(&high_risk_fields(), &adapter).unwrap();

    assert_eq!(result.label, RiskLabel::HighRisk);
    assert!(result.probability > 0.99);
    assert!(result.probability <= 1.0);
}

#[test]
fn percent_scale_model_reports_same_probability() {
    let unit = demo_model();
    let percent = ArtifactModel {
        output_scale: OutputScale::Percent,
        ..unit.clone()
    };

    let from_unit = validate_and_score(&example_fields(), &PredictionAdapter::new(&unit)).unwrap();
    let from_percent =
        validate_and_score(&example_fields(), &PredictionAdapter::new(&percent)).unwrap();

    assert_eq!(from_unit.label, from_percent.label);
    assert!((from_unit.probability - from_percent.probability).abs() < 1e-12);
}

#[test]
fn unknown_dropdown_value_is_a_prediction_error() {
    let model = demo_model();
    let adapter = PredictionAdapter::new(&model);
    let raw = RawFields {
        anemia: "Extreme".into(),
        ..example_fields()
    };

    let err = validate_and_score(&raw, &adapter).unwrap_err();
    match &err {
        ScoreError::Prediction(PredictionError::Classifier(_)) => {}
        other => panic!("expected a classifier error, got {other:?}"),
    }
    assert_eq!(
        err.messages(),
        vec!["Prediction failed: unseen category \"Extreme\" in column 'Anemia'"]
    );
}

#[test]
fn unselected_dropdowns_reach_the_model() {
    let model = demo_model();
    let adapter = PredictionAdapter::new(&model);
    let raw = RawFields {
        gravida: String::new(),
        tt_injection: String::new(),
        urine_sugar: String::new(),
        ..example_fields()
    };

    let assessment = assess(&raw, &adapter).expect("empty dropdowns are scored");
    assert_eq!(assessment.record.get(Feature::Gravida), &FeatureValue::Text(String::new()));
}

#[test]
fn three_bad_fields_give_three_messages() {
    let model = demo_model();
    let adapter = PredictionAdapter::new(&model);
    let raw = RawFields {
        gestational_age: "twelve".into(),
        weight: "heavy".into(),
        blood_pressure: "130-85".into(),
        ..example_fields()
    };

    let err = validate_and_score(&raw, &adapter).unwrap_err();
    let ScoreError::Validation(validation) = &err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(
        validation.errors(),
        &[
            FieldError::GestationalAge,
            FieldError::Weight,
            FieldError::BloodPressure
        ]
    );
    assert_eq!(
        err.messages(),
        vec![
            "Gestational Age must be a number",
            "Weight must be a number",
            "Blood Pressure must be in format `120/80`",
        ]
    );
}

#[test]
fn blood_pressure_suffix_is_scored_as_canonical_reading() {
    let model = demo_model();
    let adapter = PredictionAdapter::new(&model);
    let plain = validate_and_score(&example_fields(), &adapter).unwrap();
    let suffixed = validate_and_score(
        &RawFields {
            blood_pressure: "120/80 mmHg".into(),
            ..example_fields()
        },
        &adapter,
    )
    .unwrap();
    assert_eq!(plain, suffixed);
}

#[test]
fn same_form_scores_the_same_twice() {
    let model = demo_model();
    let adapter = PredictionAdapter::new(&model);
    let first = assess(&example_fields(), &adapter).unwrap();
    let second = assess(&example_fields(), &adapter).unwrap();
    assert_eq!(first, second);
}

#[test]
fn report_renders_from_a_real_assessment() {
    let model = demo_model();
    let adapter = PredictionAdapter::new(&model);
    let raw = RawFields {
        name: "Amina".into(),
        ..example_fields()
    };
    let assessment = assess(&raw, &adapter).unwrap();
    let text = Report::new(&raw, &assessment).to_text().unwrap();

    assert!(text.starts_with("Amina → NORMAL PREGNANCY\nHigh-Risk Probability: 29.8%\n"));
    assert!(text.contains("\"Age\": 28"));
}

#[test]
fn demo_patient_file_matches_example_form() {
    let text = std::fs::read_to_string(demo_patient_path()).unwrap();
    let raw: RawFields = serde_json::from_str(&text).unwrap();
    assert_eq!(raw.name, "Demo Patient");
    assert_eq!(
        RawFields {
            name: String::new(),
            ..raw
        },
        example_fields()
    );
}

#[test]
fn json_report_is_machine_readable() {
    let model = demo_model();
    let adapter = PredictionAdapter::new(&model);
    let raw = high_risk_fields();
    let assessment = assess(&raw, &adapter).unwrap();
    let json = Report::new(&raw, &assessment)
        .render(OutputFormat::Json)
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["patient"], "High Risk");
    assert_eq!(value["label"], 1);
    assert_eq!(value["verdict"], "HIGH-RISK PREGNANCY");
    assert_eq!(value["input"]["Blood Pressure"], "160/110");
    assert_eq!(value["input"]["TranslationTT Injection"], "");
    let probability = value["probability"].as_f64().unwrap();
    assert!((probability - assessment.result.probability).abs() < 1e-12);
}
