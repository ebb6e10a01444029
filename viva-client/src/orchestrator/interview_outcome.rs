use viva_core::InterviewReport;

/// Where the interview is. Moves `NotStarted → Introduced → AwaitingAnswer → Processing`, then
/// back to `AwaitingAnswer` for the next turn or on to `Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterviewTurnState {
    NotStarted,
    /// The intro has played.
    Introduced,
    /// A question or follow-up is playing, or the answer to it is being recorded.
    AwaitingAnswer,
    /// The answer has been submitted and the agent is working on it.
    Processing,
    Finished,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEnd {
    /// The agent signalled that the interview is over.
    Completed,
    /// The candidate ended the interview.
    Cancelled,
    /// A step failed; the sequence stopped without retrying.
    Aborted(String),
}

/// What the report page shows after the session.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportView {
    Ready(InterviewReport),
    InProgress(String),
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterviewOutcome {
    pub end: SessionEnd,
    pub report: ReportView,
    pub answers_submitted: usize,
}
