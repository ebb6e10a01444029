use serde_json::json;
use viva_core::{ClientMessage, ParticipantId};

use crate::integration::{create_test_hub_without_agent, init_tracing};

#[tokio::test]
async fn test_relay_to_absent_participant_is_silently_dropped() {
    init_tracing();

    let hub = create_test_hub_without_agent();

    let candidate = hub.join("room-1", "alice").await;
    let agent = hub.join("room-1", "bot-1").await;
    hub.hub.disconnect(agent).await;
    hub.members("room-1").await;
    let before = hub.signaling.total().await;

    hub.hub
        .signal(
            candidate,
            ClientMessage::WebrtcOffer {
                to: ParticipantId::from("bot-1"),
                offer: json!({"type": "offer"}),
            },
        )
        .await
        .expect("sender is not told about the missing target");
    hub.members("room-1").await;

    assert_eq!(hub.signaling.total().await, before);
}
