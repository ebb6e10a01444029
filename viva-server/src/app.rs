use crate::signaling::{SignalingService, ws_handler};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use viva_core::{ParticipantId, RoomId};

/// HTTP surface of the signaling service.
pub fn router(service: SignalingService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ws", get(ws_handler))
        .route("/health", get(health))
        .route("/rooms/{room_id}/participants", get(participants))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn participants(
    Path(room_id): Path<String>,
    State(service): State<SignalingService>,
) -> Result<Json<Vec<ParticipantId>>, StatusCode> {
    service
        .hub()
        .members(RoomId::from(room_id))
        .await
        .map(Json)
        .map_err(|_| StatusCode::SERVICE_UNAVAILABLE)
}
