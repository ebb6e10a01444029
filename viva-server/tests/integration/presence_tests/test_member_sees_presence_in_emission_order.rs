use viva_core::ServerMessage;

use crate::integration::{create_test_hub_without_agent, init_tracing};

#[tokio::test]
async fn test_member_sees_presence_in_emission_order() {
    init_tracing();

    let hub = create_test_hub_without_agent();

    let alice = hub.join("room-1", "alice").await;
    let bob = hub.join("room-1", "bob").await;
    let _carol = hub.join("room-1", "carol").await;
    hub.hub.disconnect(bob).await;
    hub.members("room-1").await;

    assert_eq!(
        hub.signaling.frames_for(alice).await,
        vec![
            ServerMessage::ParticipantJoined {
                participant_id: "bob".into(),
            },
            ServerMessage::ParticipantJoined {
                participant_id: "carol".into(),
            },
            ServerMessage::ParticipantLeft {
                participant_id: "bob".into(),
            },
        ]
    );
}
