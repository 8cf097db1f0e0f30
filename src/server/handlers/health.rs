use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::server::app::AppState;

/// Liveness probe: reports healthy only after a live database ping.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "API up and connected to the database"),
        (status = 500, description = "Database unreachable")
    )
)]
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match state.db.ping().await {
        Ok(()) => Ok(Json(json!({
            "status": "ok",
            "message": "API running and connected to the database",
            "timestamp": Utc::now().to_rfc3339(),
        }))),
        Err(err) => {
            tracing::error!("database ping failed: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "error",
                    "message": "failed to reach the database",
                })),
            ))
        }
    }
}
