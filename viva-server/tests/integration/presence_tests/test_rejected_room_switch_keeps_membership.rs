use viva_core::{ClientMessage, ParticipantId, RoomId};

use crate::integration::{create_test_hub, init_tracing};

#[tokio::test]
async fn test_rejected_room_switch_keeps_membership() {
    init_tracing();

    let hub = create_test_hub();

    let candidate = hub.join("room-1", "alice").await;
    let _namesake = hub.join("room-2", "alice").await;
    hub.settled_members("room-1").await;

    hub.hub
        .signal(
            candidate,
            ClientMessage::JoinRoom {
                room_id: RoomId::from("room-2"),
                participant_id: ParticipantId::from("alice"),
            },
        )
        .await
        .unwrap();

    assert!(hub.members("room-1").await.contains(&ParticipantId::from("alice")));
    assert_eq!(hub.members("room-2").await, vec![ParticipantId::from("alice")]);
    assert!(hub.launcher.stopped().await.is_empty());
    assert_eq!(hub.active_agent_room().await, Some(RoomId::from("room-1")));
}
