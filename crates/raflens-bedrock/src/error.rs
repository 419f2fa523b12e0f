use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("report text is too short to analyze (minimum {min} characters)")]
    InputTooShort { min: usize },

    #[error("model returned no textual payload")]
    EmptyResponse,

    #[error("response did not conform to the analysis schema: {0}")]
    MalformedResponse(String),

    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("analyzer configuration error: {0}")]
    Config(String),
}
