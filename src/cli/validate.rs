use crate::cli::commands::ValidateArgs;
use crate::cli::resolve_config;
use crate::errors::QuizError;
use crate::models::QuestionBank;
use crate::store::ResponseStore;

pub async fn handle_validate(args: ValidateArgs) -> Result<(), QuizError> {
    let config = resolve_config(&args.storage).await?;
    if let Some(path) = &args.storage.config {
        println!("Configuration is valid: {}", path.display());
    }

    let path = &config.storage.questions_path;
    let bank = QuestionBank::load(path).await.map_err(|e| {
        QuizError::Config(format!("Question bank {} is invalid: {}", path.display(), e))
    })?;

    let common = bank.common.len();
    let categorized = bank.categorized_count();
    println!("Question bank is valid: {}", path.display());
    println!(
        "  {} common, {} categorized across {} categories, {} total",
        common,
        categorized,
        bank.compliance_categories.len(),
        bank.flatten().len()
    );

    let store = ResponseStore::new(&config.storage.responses_path);
    println!(
        "Response store {}: {} submissions",
        store.path().display(),
        store.count()?
    );
    Ok(())
}
