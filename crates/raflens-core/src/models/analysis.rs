use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Patient demographics extracted from the report text.
///
/// Every field is optional: an HCC report frequently carries scores and
/// condition codes without any identifying information, and the extractor
/// must not invent what the text does not state.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatientDetails {
    /// Medical Record Number if found in text.
    pub mrn: Option<String>,
    /// Date of Birth if found in text.
    pub dob: Option<String>,
    /// Patient Gender if found in text.
    pub gender: Option<String>,
}

impl PatientDetails {
    /// True when no demographic field was found in the report.
    pub fn is_empty(&self) -> bool {
        self.mrn.is_none() && self.dob.is_none() && self.gender.is_none()
    }
}

/// A single Hierarchical Condition Category identified in the report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HccCondition {
    /// The HCC code (e.g., HCC19).
    pub code: String,
    /// The name of the condition.
    pub description: String,
    /// The risk weight associated if available.
    pub weight: Option<f64>,
    /// Brief clinical significance of this finding.
    pub interpretation: String,
}

/// The structured output of one report analysis.
///
/// This is the schema the model is instructed to fill. The three list
/// fields default to empty so an omitted key deserializes the same as an
/// empty array.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HccAnalysisResult {
    /// Patient identifiers found in the report, if any.
    pub patient_details: PatientDetails,
    /// A concise summary of the patient's risk profile suitable for a physician.
    pub patient_summary: String,
    /// The total Risk Adjustment Factor score if mentioned or calculated, otherwise null.
    pub total_raf_score: Option<f64>,
    /// The estimated monthly payment amount if mentioned in the text (e.g. '$1,200'), otherwise null.
    pub estimated_monthly_payment: Option<String>,
    /// Conditions identified in the report.
    #[serde(default)]
    pub conditions: Vec<HccCondition>,
    /// Actionable steps for the medical team.
    #[serde(default)]
    pub clinical_recommendations: Vec<String>,
    /// Potential missing specificity or documentation improvements needed.
    #[serde(default)]
    pub documentation_gaps: Vec<String>,
}
