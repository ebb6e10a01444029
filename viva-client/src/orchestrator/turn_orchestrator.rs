use crate::api::AgentApi;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::media::{AudioPlayer, Microphone};
use crate::orchestrator::{
    InterviewControl, InterviewOutcome, InterviewTurnState, ReportView, SessionEnd,
};
use crate::vad::{StopReason, VoiceActivityMonitor};
use std::future::Future;
use tokio::sync::watch;
use tracing::{error, info, warn};
use viva_core::{ReportResponse, RoomId};

const IN_PROGRESS_MESSAGE: &str = "Interview is still in progress.";

/// Sequences one interview against the agent API.
///
/// Bot utterances are played to completion before the next step; answers are recorded by a
/// [`VoiceActivityMonitor`] and submitted as they finish. Any failed step aborts the sequence
/// and every run ends with a report lookup.
pub struct TurnOrchestrator<A, P, M> {
    api: A,
    player: P,
    microphone: M,
    room: RoomId,
    monitor: VoiceActivityMonitor,
    control: InterviewControl,
    state: watch::Sender<InterviewTurnState>,
}

impl<A, P, M> TurnOrchestrator<A, P, M>
where
    A: AgentApi,
    P: AudioPlayer,
    M: Microphone,
{
    pub fn new(api: A, player: P, microphone: M, room: RoomId, config: &ClientConfig) -> Self {
        let (state, _) = watch::channel(InterviewTurnState::NotStarted);
        Self {
            api,
            player,
            microphone,
            room,
            monitor: VoiceActivityMonitor::new(config.voice.clone()),
            control: InterviewControl::new(),
            state,
        }
    }

    pub fn room(&self) -> &RoomId {
        &self.room
    }

    pub fn control(&self) -> InterviewControl {
        self.control.clone()
    }

    pub fn subscribe_state(&self) -> watch::Receiver<InterviewTurnState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> InterviewTurnState {
        *self.state.borrow()
    }

    /// Runs the interview until the agent finishes, the candidate ends it or a step fails,
    /// then fetches the report.
    pub async fn run(&self, candidate_name: &str) -> InterviewOutcome {
        info!(room = %self.room, "Starting interview for {}", candidate_name);

        let mut answers_submitted = 0;
        let end = match self.drive(candidate_name, &mut answers_submitted).await {
            Ok(end) => end,
            Err(e) => {
                error!(room = %self.room, "Interview aborted: {}", e);
                SessionEnd::Aborted(e.to_string())
            }
        };

        self.control.end();
        self.state.send_replace(InterviewTurnState::Finished);
        info!(room = %self.room, ?end, answers_submitted, "Interview finished");

        InterviewOutcome {
            end,
            report: self.fetch_report().await,
            answers_submitted,
        }
    }

    async fn drive(
        &self,
        candidate_name: &str,
        answers_submitted: &mut usize,
    ) -> Result<SessionEnd, ClientError> {
        let Some(intro) = self
            .step(self.api.start_interview(&self.room, candidate_name))
            .await?
        else {
            return Ok(SessionEnd::Cancelled);
        };
        if !self.play(&intro.audio_url).await? {
            return Ok(SessionEnd::Cancelled);
        }
        self.state.send_replace(InterviewTurnState::Introduced);

        let Some(question) = self.step(self.api.next_question(&self.room)).await? else {
            return Ok(SessionEnd::Cancelled);
        };
        self.state.send_replace(InterviewTurnState::AwaitingAnswer);
        if !self.play(&question.audio_url).await? {
            return Ok(SessionEnd::Cancelled);
        }

        loop {
            if !self.control.is_active() {
                return Ok(SessionEnd::Cancelled);
            }

            let Some(mut capture) = self.step(self.microphone.open()).await? else {
                return Ok(SessionEnd::Cancelled);
            };
            let recording = self
                .monitor
                .record(capture.as_mut(), self.control.ended())
                .await;
            drop(capture);
            info!(
                room = %self.room,
                reason = ?recording.reason,
                elapsed_ms = recording.elapsed.as_millis() as u64,
                "Answer recorded"
            );

            if recording.reason == StopReason::Manual {
                info!(room = %self.room, "Discarding answer cut short by end of interview");
                return Ok(SessionEnd::Cancelled);
            }

            // Not raced against end: a submitted answer completes.
            self.state.send_replace(InterviewTurnState::Processing);
            let reply = self
                .api
                .process_audio(&self.room, &recording.audio)
                .await?;
            *answers_submitted += 1;

            if !self.control.is_active() {
                info!(room = %self.room, "Interview ended while the answer was processed");
                return Ok(SessionEnd::Cancelled);
            }

            let audio = reply.audio_url.as_deref().filter(|url| !url.is_empty());

            if reply.is_done() {
                if let Some(url) = audio {
                    self.play(url).await?;
                }
                return Ok(SessionEnd::Completed);
            }

            if let Some(url) = audio {
                self.state.send_replace(InterviewTurnState::AwaitingAnswer);
                if !self.play(url).await? {
                    return Ok(SessionEnd::Cancelled);
                }
                continue;
            }

            if reply.is_no_speech() {
                info!(room = %self.room, "No speech heard, recording again");
                self.state.send_replace(InterviewTurnState::AwaitingAnswer);
                continue;
            }

            warn!(room = %self.room, status = ?reply.status, "Reply without audio, finishing");
            return Ok(SessionEnd::Completed);
        }
    }

    /// Plays one bot utterance. `false` when the interview was ended meanwhile.
    async fn play(&self, reference: &str) -> Result<bool, ClientError> {
        let url = self.api.resolve_audio(reference);
        Ok(self.step(self.player.play(&url)).await?.is_some())
    }

    /// Awaits one suspend point unless the interview is ended first.
    async fn step<T>(
        &self,
        fut: impl Future<Output = Result<T, ClientError>>,
    ) -> Result<Option<T>, ClientError> {
        tokio::select! {
            biased;

            _ = self.control.ended() => Ok(None),
            result = fut => result.map(Some),
        }
    }

    async fn fetch_report(&self) -> ReportView {
        match self.api.report(&self.room).await {
            Ok(ReportResponse::Ready(report)) => ReportView::Ready(report),
            Ok(ReportResponse::InProgress { message, .. }) => ReportView::InProgress(
                message.unwrap_or_else(|| IN_PROGRESS_MESSAGE.to_owned()),
            ),
            Err(e) => {
                warn!(room = %self.room, "Report unavailable: {}", e);
                ReportView::Unavailable(e.to_string())
            }
        }
    }
}
