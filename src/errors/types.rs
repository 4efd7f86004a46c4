use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No responses received")]
    EmptySubmission,

    #[error("Invalid submission: {0}")]
    InvalidPayload(String),

    #[error("No responses found")]
    NoResponses,

    #[error("Malformed response record: {0}")]
    MalformedRecord(String),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
