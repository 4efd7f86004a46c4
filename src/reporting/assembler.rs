use std::path::Path;
use crate::config::ReportConfig;
use crate::errors::QuizError;
use crate::questions::RecommendationMap;
use crate::store::ResponseStore;
use super::document::ReportDocument;
use super::layout::paginate;
use super::pdf::render;
use tracing::info;

/// Render the latest stored submission as PDF bytes.
///
/// The recommendation map is rebuilt from the question bank on every call
/// so edits to the bank show up without a restart.
pub async fn generate_report(
    store: &ResponseStore,
    questions_path: &Path,
    config: &ReportConfig,
) -> Result<Vec<u8>, QuizError> {
    let record = store.latest()?;
    let recommendations = RecommendationMap::load(questions_path).await?;

    let document = ReportDocument::build(&record, &recommendations, config);
    let pages = paginate(&document);
    let bytes = render(&document.title, &pages)?;

    info!(
        company = %document.company,
        entries = document.entries.len(),
        pages = pages.len(),
        bytes = bytes.len(),
        "Generated report"
    );
    Ok(bytes)
}
