use crate::api;
use crate::cli::commands::ServeArgs;
use crate::cli::resolve_config;
use crate::errors::QuizError;
use tracing::info;

pub async fn handle_serve(args: ServeArgs) -> Result<(), QuizError> {
    let mut config = resolve_config(&args.storage).await?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(pages) = args.pages {
        config.storage.pages_dir = pages;
    }
    if let Some(static_dir) = args.static_dir {
        config.storage.static_dir = static_dir;
    }

    info!(
        host = %config.server.host,
        port = config.server.port,
        questions = %config.storage.questions_path.display(),
        responses = %config.storage.responses_path.display(),
        "Starting questionnaire server"
    );

    let state = api::create_app_state(&config)?;
    let app = api::build_app(
        state,
        config.storage.pages_dir.clone(),
        config.storage.static_dir.clone(),
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| QuizError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
