use axum::Json;
use serde_json::{json, Value};

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "build": {
            "timestamp": env!("BUILD_TIMESTAMP"),
            "git_hash": option_env!("GIT_HASH"),
        },
    }))
}
