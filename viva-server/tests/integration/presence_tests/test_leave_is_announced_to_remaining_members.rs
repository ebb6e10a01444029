use viva_core::ParticipantId;

use crate::integration::{create_test_hub_without_agent, init_tracing};

#[tokio::test]
async fn test_leave_is_announced_to_remaining_members() {
    init_tracing();

    let hub = create_test_hub_without_agent();

    let alice = hub.join("room-1", "alice").await;
    let bob = hub.join("room-1", "bob").await;
    hub.hub.disconnect(bob).await;
    hub.members("room-1").await;

    assert_eq!(
        hub.signaling.left_seen_by(alice).await,
        vec![ParticipantId::from("bob")]
    );
}
