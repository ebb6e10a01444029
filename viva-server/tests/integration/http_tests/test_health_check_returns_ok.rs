use axum::http::StatusCode;
use viva_server::SignalingService;

use crate::integration::{create_test_hub_without_agent, init_tracing};
use super::get_json;

#[tokio::test]
async fn test_health_check_returns_ok() {
    init_tracing();

    let hub = create_test_hub_without_agent();
    let service = SignalingService::new(hub.hub.clone(), vec![]);

    let (status, body) = get_json(service, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
