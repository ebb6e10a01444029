use std::future::pending;
use std::time::Duration;

use tokio::time::Instant;
use viva_client::{StopReason, VoiceActivityConfig, VoiceActivityMonitor};

use crate::integration::init_tracing;
use crate::utils::{CAPTURED, MockCapture, Timeline, Voice};

const FRAME: Duration = Duration::from_millis(16);

fn monitor() -> VoiceActivityMonitor {
    VoiceActivityMonitor::new(VoiceActivityConfig::default())
}

#[tokio::test(start_paused = true)]
async fn test_quiet_candidate_stops_only_at_deadline() {
    init_tracing();

    let timeline = Timeline::new();
    let mut capture = MockCapture::new(Voice::Quiet, timeline.clone());
    let started = Instant::now();

    let recording = monitor().record(&mut capture, pending()).await;

    let elapsed = started.elapsed();
    assert_eq!(recording.reason, StopReason::Deadline);
    assert!(elapsed >= Duration::from_millis(15_000));
    assert!(elapsed < Duration::from_millis(15_000) + FRAME);
    assert!(!recording.speech_detected);
    assert_eq!(timeline.events(), vec!["mic:stop"]);
}

#[tokio::test(start_paused = true)]
async fn test_silence_after_speech_stops_after_budget() {
    init_tracing();

    let timeline = Timeline::new();
    let mut capture = MockCapture::new(Voice::SpeakFor(Duration::from_secs(2)), timeline.clone());
    let started = Instant::now();

    let recording = monitor().record(&mut capture, pending()).await;

    let elapsed = started.elapsed();
    assert_eq!(recording.reason, StopReason::Silence);
    assert!(recording.speech_detected);
    assert!(elapsed > Duration::from_millis(5_000));
    assert!(elapsed <= Duration::from_millis(5_000) + FRAME * 2);
    assert_eq!(recording.audio.data().as_ref(), CAPTURED);
}

#[tokio::test(start_paused = true)]
async fn test_continuous_speech_is_cut_at_deadline() {
    init_tracing();

    let timeline = Timeline::new();
    let mut capture = MockCapture::new(Voice::SpeakFor(Duration::from_secs(60)), timeline);

    let recording = monitor().record(&mut capture, pending()).await;

    assert_eq!(recording.reason, StopReason::Deadline);
    assert!(recording.speech_detected);
}

#[tokio::test(start_paused = true)]
async fn test_manual_stop_wins_over_timers() {
    init_tracing();

    let timeline = Timeline::new();
    let mut capture = MockCapture::new(Voice::Quiet, timeline.clone());
    let started = Instant::now();

    let recording = monitor()
        .record(&mut capture, tokio::time::sleep(Duration::from_secs(1)))
        .await;

    assert_eq!(recording.reason, StopReason::Manual);
    assert!(started.elapsed() < Duration::from_secs(2));
    assert_eq!(timeline.events(), vec!["mic:stop"]);
}

#[tokio::test(start_paused = true)]
async fn test_configured_budget_is_honoured() {
    init_tracing();

    let config = VoiceActivityConfig {
        silence_budget_ms: 500,
        max_duration_ms: 4_000,
        ..Default::default()
    };
    let mut capture = MockCapture::new(Voice::SpeakFor(Duration::from_secs(1)), Timeline::new());
    let started = Instant::now();

    let recording = VoiceActivityMonitor::new(config)
        .record(&mut capture, pending())
        .await;

    assert_eq!(recording.reason, StopReason::Silence);
    assert!(started.elapsed() > Duration::from_millis(1_500));
    assert!(started.elapsed() <= Duration::from_millis(1_500) + FRAME * 2);
}
