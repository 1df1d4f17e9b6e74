use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::path::PathBuf;
use tower_http::services::ServeFile;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::TranslateError;
use crate::prompt::Genre;
use crate::state::AppState;
use crate::translate::{TranslatePayload, TranslateResponse};

pub fn create_routes(state: &AppState) -> Router<AppState> {
    let index = PathBuf::from(&state.config.system_config.static_dir).join("index.html");

    Router::new()
        // Landing page
        .route_service("/", ServeFile::new(index))
        .route("/translate", post(translate))
        .route("/api/health", get(health_check))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "provider": state.translator.provider_name(),
        "model": state.config.llm_config.model,
        "genres": Genre::ALL.map(Genre::key),
    }))
}

async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslatePayload>, JsonRejection>,
) -> Result<Json<TranslateResponse>, TranslateError> {
    let request_id = Uuid::new_v4();
    let Json(payload) = payload.map_err(|e| TranslateError::InvalidBody(e.body_text()))?;
    debug!("[{}] Received data: {:?}", request_id, payload);

    let request = payload.into_request()?;
    let translation = state.translator.translate(&request).await?;

    info!(
        "[{}] Translated {} chars of {} text into {}",
        request_id,
        request.text.chars().count(),
        request.text_type,
        request.target_language
    );
    Ok(Json(TranslateResponse { translation }))
}
