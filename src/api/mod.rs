pub mod errors;
pub mod models;
pub mod routes;

use std::path::PathBuf;
use std::sync::Arc;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use crate::config::{QuizConfig, ReportConfig};
use crate::errors::QuizError;
use crate::store::ResponseStore;

#[derive(Clone)]
pub struct AppState {
    pub questions_path: PathBuf,
    pub store: ResponseStore,
    pub report: Arc<ReportConfig>,
}

impl AppState {
    pub fn new(questions_path: impl Into<PathBuf>, store: ResponseStore, report: ReportConfig) -> Self {
        Self {
            questions_path: questions_path.into(),
            store,
            report: Arc::new(report),
        }
    }
}

pub fn create_app_state(config: &QuizConfig) -> Result<AppState, QuizError> {
    let store = ResponseStore::new(&config.storage.responses_path);
    store.initialize()?;
    Ok(AppState::new(
        &config.storage.questions_path,
        store,
        config.report.clone(),
    ))
}

/// API routes only.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(routes::health::health_check))
        .route("/questions", get(routes::questions::get_questions))
        .route("/submit", post(routes::submit::submit))
        .route("/get-report", get(routes::report::get_report))
        .with_state(state)
}

/// API routes plus the quiz pages and their static assets, with CORS and
/// request tracing.
pub fn build_app(state: AppState, pages_dir: PathBuf, static_dir: PathBuf) -> Router {
    build_router(state)
        .route_service("/", ServeFile::new(pages_dir.join("index.html")))
        .route_service("/quiz", ServeFile::new(pages_dir.join("quiz.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
