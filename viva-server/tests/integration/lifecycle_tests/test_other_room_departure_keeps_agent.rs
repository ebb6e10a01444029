use viva_core::RoomId;

use crate::integration::{create_test_hub, init_tracing};

#[tokio::test]
async fn test_other_room_departure_keeps_agent() {
    init_tracing();

    let hub = create_test_hub();

    let _alice = hub.join("room-1", "alice").await;
    let bob = hub.join("room-2", "bob").await;
    hub.hub.disconnect(bob).await;

    assert_eq!(hub.active_agent_room().await, Some(RoomId::from("room-1")));
    assert!(hub.launcher.stopped().await.is_empty());
}
