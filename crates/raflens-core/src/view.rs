use serde::Serialize;
use ts_rs::TS;

use crate::models::analysis::{HccAnalysisResult, HccCondition};
use crate::statistics::{self, ConditionStatistics};

/// Fallback copy shown when a report section came back empty.
pub mod notice {
    pub const DEMOGRAPHICS_NOT_FOUND: &str = "Patient demographics not found in report.";
    pub const NO_CONDITIONS: &str = "No significant HCC conditions identified in report.";
    pub const NO_RECOMMENDATIONS: &str = "No specific actions found.";
    pub const NO_GAPS: &str = "No documentation gaps identified.";
}

/// Patient demographics prepared for display.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DemographicsView {
    pub mrn: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    /// True when no demographic field was found and the
    /// [`notice::DEMOGRAPHICS_NOT_FOUND`] copy should show instead.
    pub not_found: bool,
}

/// One analysis result shaped for rendering.
///
/// A pure projection of [`HccAnalysisResult`]: statistics are computed here
/// once so the UI never re-derives them.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReportView {
    pub demographics: DemographicsView,
    pub patient_summary: String,
    pub total_raf_score: Option<f64>,
    pub estimated_monthly_payment: Option<String>,
    pub statistics: ConditionStatistics,
    pub conditions: Vec<HccCondition>,
    pub clinical_recommendations: Vec<String>,
    pub documentation_gaps: Vec<String>,
}

impl ReportView {
    /// Project an extraction result into its display shape.
    pub fn from_result(result: &HccAnalysisResult) -> Self {
        Self {
            demographics: DemographicsView {
                mrn: result.patient_details.mrn.clone(),
                dob: result.patient_details.dob.clone(),
                gender: result.patient_details.gender.clone(),
                not_found: result.patient_details.is_empty(),
            },
            patient_summary: result.patient_summary.clone(),
            total_raf_score: result.total_raf_score,
            estimated_monthly_payment: result.estimated_monthly_payment.clone(),
            statistics: statistics::derive_statistics(&result.conditions),
            conditions: result.conditions.clone(),
            clinical_recommendations: result.clinical_recommendations.clone(),
            documentation_gaps: result.documentation_gaps.clone(),
        }
    }
}
