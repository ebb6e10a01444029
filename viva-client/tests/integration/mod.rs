pub mod http_api_tests;
pub mod voice_activity_tests;

use tracing::Level;

use viva_client::{ClientConfig, TurnOrchestrator};
use viva_core::RoomId;

use crate::utils::{MockAgentApi, MockMicrophone, MockPlayer, Timeline, Voice};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub type TestOrchestrator = TurnOrchestrator<MockAgentApi, MockPlayer, MockMicrophone>;

/// Orchestrator over scripted mocks for room `r1`. The candidate speaks for one second per answer.
pub fn create_orchestrator(api: MockAgentApi, timeline: &Timeline) -> TestOrchestrator {
    create_orchestrator_with_mic(
        api,
        MockMicrophone::new(timeline.clone(), Voice::SpeakFor(std::time::Duration::from_secs(1))),
        timeline,
    )
}

pub fn create_orchestrator_with_mic(
    api: MockAgentApi,
    microphone: MockMicrophone,
    timeline: &Timeline,
) -> TestOrchestrator {
    TurnOrchestrator::new(
        api,
        MockPlayer::new(timeline.clone()),
        microphone,
        RoomId::from("r1"),
        &ClientConfig::default(),
    )
}
