use std::sync::Arc;
use tokio::sync::watch;

/// Handle for ending an interview from outside the running orchestrator.
#[derive(Debug, Clone)]
pub struct InterviewControl {
    ended: Arc<watch::Sender<bool>>,
}

impl InterviewControl {
    pub fn new() -> Self {
        let (ended, _) = watch::channel(false);
        Self {
            ended: Arc::new(ended),
        }
    }

    /// Ends the session. Legal at any point, repeated calls are no-ops.
    pub fn end(&self) {
        self.ended.send_replace(true);
    }

    pub fn is_active(&self) -> bool {
        !*self.ended.borrow()
    }

    /// Resolves once [`InterviewControl::end`] has been called.
    pub async fn ended(&self) {
        let mut rx = self.ended.subscribe();
        if rx.wait_for(|ended| *ended).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

impl Default for InterviewControl {
    fn default() -> Self {
        Self::new()
    }
}
