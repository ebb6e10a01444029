use viva_core::ParticipantId;

use crate::integration::{create_test_hub_without_agent, init_tracing};

#[tokio::test]
async fn test_membership_matches_joined_minus_left() {
    init_tracing();

    let hub = create_test_hub_without_agent();

    let alice = hub.join("room-1", "alice").await;
    let _bob = hub.join("room-1", "bob").await;
    let _carol = hub.join("room-2", "carol").await;
    hub.hub.disconnect(alice).await;

    assert_eq!(hub.members("room-1").await, vec![ParticipantId::from("bob")]);
    assert_eq!(hub.members("room-2").await, vec![ParticipantId::from("carol")]);
}
