use schemars::schema_for;
use serde_json::Value;

use crate::models::analysis::HccAnalysisResult;

/// Field names in the analysis response payload.
pub mod field {
    pub const PATIENT_DETAILS: &str = "patientDetails";
    pub const PATIENT_SUMMARY: &str = "patientSummary";
    pub const TOTAL_RAF_SCORE: &str = "totalRafScore";
    pub const ESTIMATED_MONTHLY_PAYMENT: &str = "estimatedMonthlyPayment";
    pub const CONDITIONS: &str = "conditions";
    pub const CLINICAL_RECOMMENDATIONS: &str = "clinicalRecommendations";
    pub const DOCUMENTATION_GAPS: &str = "documentationGaps";
}

/// Top-level fields the model must always emit.
///
/// The list fields carry `#[serde(default)]` so a missing key still
/// deserializes, which also drops them from the derived `required` array.
/// The schema shown to the model re-adds them: the model is told to emit
/// empty lists rather than omit the keys. The two nullable scalars stay
/// optional.
pub const REQUIRED_FIELDS: &[&str] = &[
    field::PATIENT_DETAILS,
    field::PATIENT_SUMMARY,
    field::CONDITIONS,
    field::CLINICAL_RECOMMENDATIONS,
    field::DOCUMENTATION_GAPS,
];

/// Build the JSON Schema for [`HccAnalysisResult`] as sent to the model.
///
/// # Panics
///
/// Panics if the derived schema is not a JSON object or fails to serialize.
/// The schema is generated from static type definitions, so a panic
/// indicates a schema definition bug.
pub fn response_schema() -> Value {
    let schema = schema_for!(HccAnalysisResult);
    let mut value = serde_json::to_value(&schema)
        .unwrap_or_else(|e| panic!("analysis schema failed to serialize: {e}"));

    {
        let Value::Object(root) = &mut value else {
            panic!("analysis schema is not a JSON object");
        };
        let required = root
            .entry("required")
            .or_insert_with(|| Value::Array(Vec::new()));
        let Value::Array(required) = required else {
            panic!("analysis schema 'required' is not an array");
        };
        for &name in REQUIRED_FIELDS {
            if !required.iter().any(|v| v.as_str() == Some(name)) {
                required.push(Value::String(name.to_string()));
            }
        }
    }

    value
}

/// The response schema rendered as pretty-printed JSON for prompt embedding.
pub fn response_schema_text() -> String {
    serde_json::to_string_pretty(&response_schema())
        .unwrap_or_else(|e| panic!("analysis schema failed to render: {e}"))
}
