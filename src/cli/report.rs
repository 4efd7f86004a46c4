use crate::cli::commands::ReportArgs;
use crate::cli::resolve_config;
use crate::errors::QuizError;
use crate::reporting::generate_report;
use crate::store::ResponseStore;
use tracing::info;

pub async fn handle_report(args: ReportArgs) -> Result<(), QuizError> {
    let config = resolve_config(&args.storage).await?;
    let store = ResponseStore::new(&config.storage.responses_path);

    let bytes = generate_report(&store, &config.storage.questions_path, &config.report).await?;
    tokio::fs::write(&args.output, &bytes).await?;

    info!(path = %args.output.display(), bytes = bytes.len(), "Report written");
    println!("Report written to {}", args.output.display());
    Ok(())
}
