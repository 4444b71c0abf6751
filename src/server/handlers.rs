use super::types::{ContentResponse, ErrorResponse, HealthResponse};
use crate::relay::{ErrorKind, Relay, classify};
use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, Uri},
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Server is running".to_string(),
    })
}

pub async fn content(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ContentResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.relay.answer(&body).await {
        Ok(generation) => Ok(Json(ContentResponse {
            result: generation.text,
        })),
        Err(e) => {
            let kind = classify(&e);
            match kind {
                ErrorKind::MissingInput => info!("Rejected content request: {}", e),
                _ => error!(?kind, "AI error: {}", e),
            }
            Err((kind.status(), Json(ErrorResponse::from_kind(kind))))
        }
    }
}

pub async fn not_found(uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": format!("No route for {}", uri.path()) })),
    )
}
