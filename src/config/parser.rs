use std::path::Path;
use crate::errors::QuizError;
use super::types::QuizConfig;
use tracing::{debug, warn};

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub async fn parse_config(path: &Path) -> Result<QuizConfig, QuizError> {
    if !path.exists() {
        return Err(QuizError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(QuizError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config = parse_config_str(&content)?;
    debug!(path = %path.display(), "Loaded configuration");
    Ok(config)
}

pub fn parse_config_str(content: &str) -> Result<QuizConfig, QuizError> {
    // An empty file means "all defaults"
    if content.trim().is_empty() {
        return Ok(QuizConfig::default());
    }

    let config: QuizConfig = serde_yaml::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}

/// Detect settings that would make the service misbehave at request time.
pub fn validate_config(config: &QuizConfig) -> Result<(), QuizError> {
    if config.server.port == 0 {
        return Err(QuizError::Config("server.port must be non-zero".into()));
    }

    let report = &config.report;
    if report.filename.trim().is_empty() {
        return Err(QuizError::Config("report.filename must not be empty".into()));
    }
    if report.filename.contains('"') || report.filename.contains('/') {
        return Err(QuizError::Config(format!(
            "report.filename contains forbidden characters: {}",
            report.filename
        )));
    }
    if !report.filename.to_lowercase().ends_with(".pdf") {
        warn!(filename = %report.filename, "Report filename does not end in .pdf");
    }

    if report.company_question == report.email_question {
        return Err(QuizError::Config(
            "report.company_question and report.email_question must differ".into(),
        ));
    }

    Ok(())
}
