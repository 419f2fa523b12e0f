//! Report analysis via the Bedrock Converse API.
//!
//! One analysis is one Converse call: the assembled prompt goes out, the
//! structured JSON comes back, and any failure surfaces as a typed
//! [`ExtractionError`]. There is no internal retry; resubmission is the
//! caller's decision.

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, Message, SystemContentBlock,
};
use tracing::info;
use uuid::Uuid;

use raflens_core::models::analysis::HccAnalysisResult;

use crate::error::ExtractionError;
use crate::parse;
use crate::prompt;

/// Inference profile used when the caller does not pick a model.
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

/// Reports shorter than this (in characters, after trimming) are rejected
/// before any model call.
pub const MIN_REPORT_LEN: usize = 10;

/// A configured Bedrock analysis client.
///
/// Construction is fail-fast: an unusable configuration is an
/// [`ExtractionError::Config`] at build time, not a transport error on
/// first use.
#[derive(Debug, Clone)]
pub struct ReportAnalyzer {
    client: Client,
    model_id: String,
}

impl ReportAnalyzer {
    /// Build an analyzer from resolved AWS configuration.
    pub fn new(
        config: &aws_config::SdkConfig,
        model_id: impl Into<String>,
    ) -> Result<Self, ExtractionError> {
        let model_id = model_id.into();
        if model_id.trim().is_empty() {
            return Err(ExtractionError::Config("model id is empty".to_string()));
        }
        if config.region().is_none() {
            return Err(ExtractionError::Config(
                "no AWS region configured".to_string(),
            ));
        }
        if config.credentials_provider().is_none() {
            return Err(ExtractionError::Config(
                "no AWS credentials provider configured".to_string(),
            ));
        }

        Ok(Self {
            client: Client::new(config),
            model_id,
        })
    }

    /// Build an analyzer using [`DEFAULT_MODEL_ID`].
    pub fn with_default_model(config: &aws_config::SdkConfig) -> Result<Self, ExtractionError> {
        Self::new(config, DEFAULT_MODEL_ID)
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Analyze one report, invoking the model exactly once.
    ///
    /// Rejects reports shorter than [`MIN_REPORT_LEN`] characters without
    /// making a call. On success the returned result always carries its
    /// list fields, empty when the model found nothing.
    pub async fn analyze_report(
        &self,
        report_text: &str,
        financial_text: Option<&str>,
    ) -> Result<HccAnalysisResult, ExtractionError> {
        if report_text.trim().chars().count() < MIN_REPORT_LEN {
            return Err(ExtractionError::InputTooShort {
                min: MIN_REPORT_LEN,
            });
        }

        let analysis_id = Uuid::new_v4();
        info!(
            analysis_id = %analysis_id,
            model = self.model_id.as_str(),
            report_len = report_text.len(),
            "starting report analysis"
        );

        let user_prompt = prompt::build_analysis_prompt(report_text, financial_text);

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(prompt::system_instruction()))
            .messages(
                Message::builder()
                    .role(ConversationRole::User)
                    .content(ContentBlock::Text(user_prompt))
                    .build()
                    .map_err(|e| ExtractionError::Invocation(e.to_string()))?,
            )
            .send()
            .await
            .map_err(|e| ExtractionError::Invocation(e.into_service_error().to_string()))?;

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or(ExtractionError::EmptyResponse)?;

        let response_text = output_message
            .content()
            .iter()
            .filter_map(|block| {
                if let ContentBlock::Text(text) = block {
                    Some(text.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        let result = parse::parse_analysis(&response_text)?;

        info!(
            analysis_id = %analysis_id,
            conditions = result.conditions.len(),
            "report analysis complete"
        );

        Ok(result)
    }
}
