use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use bytes::Bytes;
use serde_json::{Value, json};
use viva_client::{AgentApi, ClientError, EncodedAudio, HttpAgentApi};
use viva_core::{ReportResponse, RoomId};

use crate::integration::init_tracing;

type Received = Arc<Mutex<Vec<(String, Value)>>>;

async fn start_interview(State(received): State<Received>, Json(body): Json<Value>) -> Json<Value> {
    received.lock().unwrap().push(("start-interview".to_owned(), body));
    Json(json!({ "audioUrl": "/audio/intro.mp3" }))
}

async fn next_question() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "model overloaded")
}

async fn process_audio(State(received): State<Received>, Json(body): Json<Value>) -> Json<Value> {
    received.lock().unwrap().push(("process-audio".to_owned(), body));
    Json(json!({ "status": "no_speech", "audioUrl": null }))
}

async fn get_report(Path(room_id): Path<String>) -> Json<Value> {
    Json(json!({
        "status": "in_progress",
        "message": format!("{} is still in progress", room_id),
    }))
}

/// Serves a stub agent API on an ephemeral port and returns its base URL.
async fn spawn_stub(received: Received) -> String {
    let app = Router::new()
        .route("/agent/start-interview", post(start_interview))
        .route("/agent/next-question", post(next_question))
        .route("/agent/process-audio", post(process_audio))
        .route("/agent/get-report/{room_id}", get(get_report))
        .with_state(received);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_requests_use_camel_case_bodies() {
    init_tracing();

    let received = Received::default();
    let api = HttpAgentApi::new(spawn_stub(received.clone()).await);
    let room = RoomId::from("r1");

    let intro = api.start_interview(&room, "Ada").await.unwrap();
    assert_eq!(intro.audio_url, "/audio/intro.mp3");

    let audio = EncodedAudio::new("audio/wav", Bytes::from_static(b"RIFF"));
    let reply = api.process_audio(&room, &audio).await.unwrap();
    assert!(reply.is_no_speech());
    assert_eq!(reply.audio_url, None);

    let received = received.lock().unwrap().clone();
    assert_eq!(
        received,
        vec![
            (
                "start-interview".to_owned(),
                json!({ "roomId": "r1", "candidateName": "Ada" })
            ),
            (
                "process-audio".to_owned(),
                json!({ "roomId": "r1", "audioData": "UklGRg==" })
            ),
        ]
    );
}

#[tokio::test]
async fn test_error_status_becomes_api_error() {
    init_tracing();

    let api = HttpAgentApi::new(spawn_stub(Received::default()).await);

    let err = api.next_question(&RoomId::from("r1")).await.unwrap_err();

    match err {
        ClientError::Api { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "model overloaded");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_in_progress_report_is_a_normal_answer() {
    init_tracing();

    let api = HttpAgentApi::new(spawn_stub(Received::default()).await);

    let report = api.report(&RoomId::from("r9")).await.unwrap();

    let ReportResponse::InProgress { message, .. } = report else {
        panic!("expected in-progress report");
    };
    assert_eq!(message.as_deref(), Some("r9 is still in progress"));
}

#[tokio::test]
async fn test_room_id_with_reserved_characters_reaches_the_report_route() {
    init_tracing();

    let api = HttpAgentApi::new(spawn_stub(Received::default()).await);

    let report = api.report(&RoomId::from("team a/b?x=1")).await.unwrap();

    let ReportResponse::InProgress { message, .. } = report else {
        panic!("expected in-progress report");
    };
    assert_eq!(message.as_deref(), Some("team a/b?x=1 is still in progress"));
}

#[tokio::test]
async fn test_unreachable_api_is_a_transport_error() {
    init_tracing();

    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = HttpAgentApi::new(base)
        .next_question(&RoomId::from("r1"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
}
