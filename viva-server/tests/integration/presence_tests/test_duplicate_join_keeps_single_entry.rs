use viva_core::ParticipantId;

use crate::integration::{create_test_hub_without_agent, init_tracing};

#[tokio::test]
async fn test_duplicate_join_keeps_single_entry() {
    init_tracing();

    let hub = create_test_hub_without_agent();

    let first = hub.join("room-1", "alice").await;
    let _second = hub.join("room-1", "alice").await;

    assert_eq!(hub.members("room-1").await, vec![ParticipantId::from("alice")]);

    hub.hub.disconnect(first).await;
    assert!(hub.members("room-1").await.is_empty());
}
