//! Structured response parsing.
//!
//! Models occasionally wrap JSON output in a markdown code fence despite
//! the format directive, so the parser strips one surrounding fence before
//! deserializing.

use raflens_core::models::analysis::HccAnalysisResult;

use crate::error::ExtractionError;

/// Parse the raw response text into an [`HccAnalysisResult`].
///
/// A payload that is blank after fence stripping fails with
/// [`ExtractionError::EmptyResponse`]. A payload that does not deserialize
/// into the schema, or that carries a condition with a blank `code`, fails
/// with [`ExtractionError::MalformedResponse`]. Missing list fields
/// deserialize as empty lists.
pub fn parse_analysis(raw: &str) -> Result<HccAnalysisResult, ExtractionError> {
    let text = strip_code_fences(raw);
    if text.is_empty() {
        return Err(ExtractionError::EmptyResponse);
    }

    let result: HccAnalysisResult = serde_json::from_str(text).map_err(|e| {
        ExtractionError::MalformedResponse(format!(
            "failed to parse HccAnalysisResult: {e}. Response: {text}"
        ))
    })?;

    if let Some(condition) = result.conditions.iter().find(|c| c.code.trim().is_empty()) {
        return Err(ExtractionError::MalformedResponse(format!(
            "condition '{}' has a blank code",
            condition.description
        )));
    }

    Ok(result)
}

/// Strip one surrounding markdown code fence, if present.
///
/// Handles ```json ... ``` and ``` ... ```. Text without a closing fence
/// is returned whole and left to the JSON parser to reject.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();

    if let Some(without_prefix) = trimmed.strip_prefix("```") {
        let without_prefix = without_prefix.strip_prefix("json").unwrap_or(without_prefix);
        if let Some(end) = without_prefix.rfind("```") {
            return without_prefix[..end].trim();
        }
    }

    trimmed
}
