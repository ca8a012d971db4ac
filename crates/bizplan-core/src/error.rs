use thiserror::Error;

/// Message surfaced for every failed pitch request, whatever the cause.
pub const PITCH_FAILURE_MESSAGE: &str =
    "Failed to generate pitch. Please check your API key and try again.";

#[derive(Error, Debug)]
pub enum BizPlanError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("A pitch is already being generated")]
    AlreadyGenerating,

    #[error("{}", PITCH_FAILURE_MESSAGE)]
    PitchGeneration,
}

pub type Result<T> = std::result::Result<T, BizPlanError>;
