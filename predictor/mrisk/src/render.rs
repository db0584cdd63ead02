//! Terminal and JSON output.

use mrisk_features::{Feature, FeatureKind, FeatureRecord, RawFields};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::Assessment;

/// What gets shown for one scored request
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub patient: &'a str,
    /// 0 normal, 1 high risk
    pub label: u8,
    pub verdict: &'static str,
    pub probability: f64,
    pub input: &'a FeatureRecord,
}

impl<'a> Report<'a> {
    pub fn new(raw: &'a RawFields, assessment: &'a Assessment) -> Self {
        Self {
            patient: raw.display_name(),
            label: assessment.result.label.class(),
            verdict: assessment.result.label.verdict(),
            probability: assessment.result.probability,
            input: &assessment.record,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => self.to_text(),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }

    pub fn to_text(&self) -> Result<String, serde_json::Error> {
        let input = serde_json::to_string_pretty(self.input)?;
        Ok(format!(
            "{} → {}\nHigh-Risk Probability: {}\n\nInput Data:\n{}\n",
            self.patient,
            self.verdict,
            format_percent(self.probability),
            input
        ))
    }
}

/// `0.853` becomes `85.3%`
pub fn format_percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

#[derive(Debug, Serialize)]
struct FieldRow {
    column: &'static str,
    label: &'static str,
    kind: FeatureKind,
    options: &'static [&'static str],
}

/// The row layout the model expects, for the `fields` command
pub fn render_fields(format: OutputFormat) -> Result<String, serde_json::Error> {
    let rows: Vec<FieldRow> = Feature::ALL
        .iter()
        .map(|f| FieldRow {
            column: f.column(),
            label: f.label(),
            kind: f.kind(),
            options: f.options(),
        })
        .collect();

    if format == OutputFormat::Json {
        return serde_json::to_string_pretty(&rows);
    }

    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        let kind = match row.kind {
            FeatureKind::Integer => "integer".to_string(),
            FeatureKind::IntegerText => "whole number".to_string(),
            FeatureKind::FloatText => "number".to_string(),
            FeatureKind::BloodPressure => "sys/dia, e.g. 120/80".to_string(),
            FeatureKind::Choice => format!("one of: {}", row.options.join(", ")),
        };
        out.push_str(&format!("{:>2}. {:<24} {}\n", i + 1, row.column, kind));
    }
    Ok(out)
}
