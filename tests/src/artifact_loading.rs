use std::fs;

use mrisk::{validate_and_score, ScoreError};
use mrisk_model::{ArtifactModel, ClassifierError, LoadError, PredictionAdapter, PredictionError};

use crate::fixtures::{demo_model, demo_model_path, example_fields};

#[test]
fn demo_artifact_covers_every_column() {
    let model = demo_model();
    assert_eq!(model.columns.len(), 15);
    assert_eq!(model.name, "maternal-risk-logistic-v1");
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best_tuned_model.json");

    let err = ArtifactModel::load(&path).unwrap_err();
    assert!(matches!(err, LoadError::NotFound(_)));
    assert_eq!(
        err.to_string(),
        format!("Model file not found: `{}`", path.display())
    );
}

#[test]
fn garbage_file_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    fs::write(&path, "\u{80}pickle protocol 4").unwrap();

    let err = ArtifactModel::load(&path).unwrap_err();
    assert!(err.to_string().starts_with("Failed to load model: "), "{err}");
}

#[test]
fn structurally_bad_artifact_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    fs::write(
        &path,
        r#"{"name": "empty", "bias": 0.0, "columns": [], "classes": [0, 1]}"#,
    )
    .unwrap();

    let err = ArtifactModel::load(&path).unwrap_err();
    assert!(matches!(err, LoadError::Invalid(_)));
    assert_eq!(err.to_string(), "Failed to load model: model declares no columns");
}

#[test]
fn artifact_copied_to_temp_dir_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("copy.json");
    fs::copy(demo_model_path(), &path).unwrap();
    assert_eq!(ArtifactModel::load(&path).unwrap(), demo_model());
}

#[test]
fn renamed_column_is_a_schema_mismatch_at_scoring_time() {
    let mut model = demo_model();
    model.columns[2].name = "TT Injection".into();
    // Loads fine; the mismatch only shows against a real row.
    let model = ArtifactModel::from_json(&model.to_json().unwrap()).unwrap();

    let adapter = PredictionAdapter::new(&model);
    let err = validate_and_score(&example_fields(), &adapter).unwrap_err();
    match err {
        ScoreError::Prediction(PredictionError::Classifier(ClassifierError::SchemaMismatch {
            expected,
            found,
        })) => {
            assert_eq!(expected[2], "TT Injection");
            assert_eq!(found[2], "TranslationTT Injection");
        }
        other => panic!("expected schema mismatch, got {other:?}"),
    }
}
