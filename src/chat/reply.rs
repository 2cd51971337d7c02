//! Deferred assistant replies.
//!
//! Each accepted user message schedules a one-shot timer task that posts
//! [`AppEvent::AgentReply`] back into the main event channel. The main
//! loop appends the reply, so appends stay serialized.

use super::SessionId;
use crate::app::event::AppEvent;
use crate::config::ReplyPolicy;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

pub struct ReplyScheduler {
    tx: UnboundedSender<AppEvent>,
    delay: Duration,
    policy: ReplyPolicy,
    pending: Option<JoinHandle<()>>,
}

impl ReplyScheduler {
    pub fn new(tx: UnboundedSender<AppEvent>, delay: Duration, policy: ReplyPolicy) -> Self {
        Self {
            tx,
            delay,
            policy,
            pending: None,
        }
    }

    pub fn schedule(&mut self, session: SessionId) {
        if self.policy == ReplyPolicy::CancelPending {
            if let Some(handle) = self.pending.take() {
                if !handle.is_finished() {
                    tracing::debug!(session, "cancelling pending reply");
                }
                handle.abort();
            }
        }

        let tx = self.tx.clone();
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(AppEvent::AgentReply { session });
        });
        tracing::debug!(session, delay_ms = delay.as_millis() as u64, "reply scheduled");

        if self.policy == ReplyPolicy::CancelPending {
            self.pending = Some(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;
    use tokio::time::{timeout, Instant};

    const DELAY: Duration = Duration::from_millis(1000);

    fn assert_elapsed(start: Instant, expected: Duration) {
        let elapsed = start.elapsed();
        assert!(
            elapsed >= expected && elapsed < expected + Duration::from_millis(5),
            "elapsed {:?}, expected {:?}",
            elapsed,
            expected
        );
    }

    fn session_of(event: Option<AppEvent>) -> SessionId {
        match event {
            Some(AppEvent::AgentReply { session }) => session,
            other => panic!("expected agent reply, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = ReplyScheduler::new(tx, DELAY, ReplyPolicy::Independent);
        let start = Instant::now();
        scheduler.schedule(7);

        assert!(timeout(Duration::from_millis(999), rx.recv()).await.is_err());
        assert_eq!(session_of(rx.recv().await), 7);
        assert_elapsed(start, DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_independent_sends_each_get_a_reply() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = ReplyScheduler::new(tx, DELAY, ReplyPolicy::Independent);
        let start = Instant::now();
        scheduler.schedule(1);
        tokio::time::sleep(Duration::from_millis(300)).await;
        scheduler.schedule(1);

        assert_eq!(session_of(rx.recv().await), 1);
        assert_elapsed(start, DELAY);
        assert_eq!(session_of(rx.recv().await), 1);
        assert_elapsed(start, Duration::from_millis(1300));
        assert!(timeout(Duration::from_secs(5), rx.recv()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_pending_keeps_only_latest() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = ReplyScheduler::new(tx, DELAY, ReplyPolicy::CancelPending);
        let start = Instant::now();
        scheduler.schedule(1);
        tokio::time::sleep(Duration::from_millis(500)).await;
        scheduler.schedule(1);

        assert_eq!(session_of(rx.recv().await), 1);
        assert_elapsed(start, Duration::from_millis(1500));
        assert!(timeout(Duration::from_secs(5), rx.recv()).await.is_err());
    }
}
