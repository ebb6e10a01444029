pub mod test_health_check_returns_ok;
pub mod test_participants_lists_room_members;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use viva_server::{SignalingService, router};

async fn get_json(service: SignalingService, uri: &str) -> (StatusCode, Value) {
    let response = router(service)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}
