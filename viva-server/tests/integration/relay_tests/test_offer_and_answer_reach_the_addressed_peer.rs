use serde_json::json;
use viva_core::{ClientMessage, ParticipantId, ServerMessage};

use crate::integration::{create_test_hub_without_agent, init_tracing};

#[tokio::test]
async fn test_offer_and_answer_reach_the_addressed_peer() {
    init_tracing();

    let hub = create_test_hub_without_agent();

    let candidate = hub.join("room-1", "alice").await;
    let agent = hub.join("room-1", "bot-1").await;

    let offer = json!({"type": "offer", "sdp": "v=0 offer"});
    let answer = json!({"type": "answer", "sdp": "v=0 answer"});
    hub.hub
        .signal(
            agent,
            ClientMessage::WebrtcOffer {
                to: ParticipantId::from("alice"),
                offer: offer.clone(),
            },
        )
        .await
        .unwrap();
    hub.hub
        .signal(
            candidate,
            ClientMessage::WebrtcAnswer {
                to: ParticipantId::from("bot-1"),
                answer: answer.clone(),
            },
        )
        .await
        .unwrap();
    hub.members("room-1").await;

    let to_candidate = hub.signaling.frames_for(candidate).await;
    assert_eq!(
        to_candidate.last(),
        Some(&ServerMessage::WebrtcOffer {
            from: ParticipantId::from("bot-1"),
            offer,
        })
    );

    let to_agent = hub.signaling.frames_for(agent).await;
    assert_eq!(
        to_agent,
        vec![ServerMessage::WebrtcAnswer {
            from: ParticipantId::from("alice"),
            answer,
        }]
    );
}
