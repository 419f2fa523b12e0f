//! Prompt assembly for report analysis.
//!
//! The user prompt embeds the report and financial text verbatim, with no
//! length limit and no truncation. The system instruction carries the
//! auditor persona, the response format directive, and the full response
//! schema.

use raflens_core::schema;

/// Persona instruction, fixed across calls.
pub const ANALYSIS_SYSTEM_PROMPT: &str = "\
You are an expert Medical Risk Adjustment Auditor. \
Your output must be accurate, professional, and directly useful for clinical staff.";

/// Output format directive appended to the system instruction.
pub const RESPONSE_FORMAT_DIRECTIVE: &str = "\
Respond with a single JSON object conforming to the response schema below. \
Do not add commentary, markdown fences, or any text outside the JSON object. \
Emit empty arrays rather than omitting list fields.";

/// Marker substituted when no usable financial text was supplied.
pub const NO_FINANCIAL_DATA: &str = "None provided";

/// Build the full system instruction: persona, format directive, schema.
pub fn system_instruction() -> String {
    format!(
        "{ANALYSIS_SYSTEM_PROMPT}\n\n{RESPONSE_FORMAT_DIRECTIVE}\n\nRESPONSE SCHEMA:\n{}",
        schema::response_schema_text()
    )
}

/// Assemble the user prompt for one analysis call.
///
/// `report_text` is embedded verbatim. `financial_text` is embedded
/// verbatim when present and non-blank; otherwise the
/// [`NO_FINANCIAL_DATA`] marker takes its place, so the model never sees
/// an empty section.
pub fn build_analysis_prompt(report_text: &str, financial_text: Option<&str>) -> String {
    let financial = match financial_text {
        Some(text) if !text.trim().is_empty() => text,
        _ => NO_FINANCIAL_DATA,
    };

    format!(
        "\
Analyze the following Risk Adjustment Factor (RAF) calculation/HCC report and optional financial data.
Act as a Senior HCC Coder and Medical Auditor.
Your goal is to translate this technical report into a human-friendly interpretation for doctors and nurses.
Focus on clinical complexity, disease interactions, and documentation quality.

INSTRUCTIONS:
1. Extract patient demographics (MRN, DOB, Gender) from the text if available.
2. Analyze the conditions and scores.
3. If financial data is provided, extract the monthly payment and total RAF score if present.
4. Return the structured analysis as a single JSON object matching the response schema.

REPORT TEXT:
{report_text}

ADDITIONAL FINANCIAL/SCORE DATA:
{financial}"
    )
}
