pub mod commands;
pub mod report;
pub mod serve;
pub mod validate;

pub use commands::{Cli, Commands};

use crate::config::{parse_config, QuizConfig};
use crate::errors::QuizError;
use commands::StorageArgs;

/// Load the config file if one was given, then apply command-line overrides.
pub async fn resolve_config(args: &StorageArgs) -> Result<QuizConfig, QuizError> {
    let mut config = match &args.config {
        Some(path) => parse_config(path).await?,
        None => QuizConfig::default(),
    };

    if let Some(questions) = &args.questions {
        config.storage.questions_path = questions.clone();
    }
    if let Some(responses) = &args.responses {
        config.storage.responses_path = responses.clone();
    }
    Ok(config)
}
