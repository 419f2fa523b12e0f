use raflens_bedrock::prompt::{
    build_analysis_prompt, system_instruction, ANALYSIS_SYSTEM_PROMPT, NO_FINANCIAL_DATA,
};

#[test]
fn report_text_embedded_verbatim() {
    let report = "HCC19 Diabetes w/o Complication {weight: 0.105}\n\tLine two — unusual chars: 50% \"quoted\"";
    let prompt = build_analysis_prompt(report, None);

    assert!(prompt.contains(report));
}

#[test]
fn financial_text_embedded_when_present() {
    let prompt = build_analysis_prompt(
        "Sufficiently long report text.",
        Some("Monthly payment: $1,450. Total RAF: 1.802"),
    );

    assert!(prompt.contains("Monthly payment: $1,450. Total RAF: 1.802"));
    assert!(!prompt.contains(NO_FINANCIAL_DATA));
}

#[test]
fn missing_financial_text_uses_marker() {
    let prompt = build_analysis_prompt("Sufficiently long report text.", None);

    assert!(prompt.contains(&format!(
        "ADDITIONAL FINANCIAL/SCORE DATA:\n{NO_FINANCIAL_DATA}"
    )));
}

#[test]
fn blank_financial_text_uses_marker() {
    for blank in ["", "   ", " \n\t "] {
        let prompt = build_analysis_prompt("Sufficiently long report text.", Some(blank));
        assert!(
            prompt.contains(NO_FINANCIAL_DATA),
            "expected marker for {blank:?}"
        );
    }
}

#[test]
fn instructions_enumerate_exactly_four_steps() {
    let prompt = build_analysis_prompt("Sufficiently long report text.", None);

    assert!(prompt.contains("INSTRUCTIONS:"));
    assert!(prompt.contains("\n1. Extract patient demographics"));
    assert!(prompt.contains("\n2. Analyze the conditions and scores."));
    assert!(prompt.contains("\n3. If financial data is provided"));
    assert!(prompt.contains("\n4. Return the structured analysis"));
    assert!(!prompt.contains("\n5."));
}

#[test]
fn report_section_precedes_financial_section() {
    let prompt = build_analysis_prompt("Sufficiently long report text.", Some("Total RAF: 1.0"));

    let report_at = prompt.find("REPORT TEXT:").expect("report header missing");
    let financial_at = prompt
        .find("ADDITIONAL FINANCIAL/SCORE DATA:")
        .expect("financial header missing");
    assert!(report_at < financial_at);
}

#[test]
fn long_report_is_not_truncated() {
    let report = "HCC85 Congestive Heart Failure 0.331\n".repeat(2_000);
    let prompt = build_analysis_prompt(&report, None);

    assert!(prompt.contains(&report));
    assert!(prompt.len() > report.len());
}

#[test]
fn system_instruction_carries_persona_directive_and_schema() {
    let instruction = system_instruction();

    assert!(instruction.starts_with(ANALYSIS_SYSTEM_PROMPT));
    assert!(instruction.contains("single JSON object"));
    assert!(instruction.contains("RESPONSE SCHEMA:"));
    // Spot-check that the schema body made it in.
    assert!(instruction.contains("patientDetails"));
    assert!(instruction.contains("documentationGaps"));
}
