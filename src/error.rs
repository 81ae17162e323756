//! Error handling for the placement readiness analyzer

use thiserror::Error;

/// Rejection reasons for resume text and profile values, raised before any
/// score is computed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please paste your resume.")]
    EmptyResume,

    #[error("resume text seems invalid.")]
    InvalidResume,

    #[error("resume text looks like repeated spam.")]
    RepeatedSpam,

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: String,
        max: String,
        value: String,
    },
}

#[derive(Error, Debug)]
pub enum PlacementError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input validation failed: {0}")]
    InputValidation(#[from] ValidationError),

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Text extraction failed: {0}")]
    Extraction(String),

    #[error("Placement estimation failed: {0}")]
    Estimation(String),

    #[error("Model loading error: {0}")]
    ModelLoading(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, PlacementError>;
