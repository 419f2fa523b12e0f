//! raflens-bedrock
//!
//! Bedrock model invocation and structured analysis parsing.

pub mod analyze;
pub mod error;
pub mod parse;
pub mod prompt;
