use axum::http::StatusCode;
use viva_server::SignalingService;

use crate::integration::{create_test_hub_without_agent, init_tracing};
use super::get_json;

#[tokio::test]
async fn test_participants_lists_room_members() {
    init_tracing();

    let hub = create_test_hub_without_agent();
    hub.join("room-1", "bob").await;
    hub.join("room-1", "alice").await;
    let service = SignalingService::new(hub.hub.clone(), vec![]);

    let (status, body) = get_json(service.clone(), "/rooms/room-1/participants").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!(["alice", "bob"]));

    let (_, body) = get_json(service, "/rooms/empty/participants").await;
    assert_eq!(body, serde_json::json!([]));
}
