//! Periodic `feed_pull` on a background task.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use rcv_core::entities::FeedQueueItem;
use rcv_core::requests::FeedPullRequest;

use crate::{BackendClient, BackendError};

const MIN_INTERVAL: Duration = Duration::from_secs(1);

/// Result of one poll.
pub type FeedTick = Result<Vec<FeedQueueItem>, BackendError>;

/// Polls the feed on a fixed interval until stopped or dropped.
///
/// Each tick's result arrives on an internal channel; a failed pull does not
/// end the loop.
#[derive(Debug)]
pub struct FeedPoller {
    rx: mpsc::Receiver<FeedTick>,
    task: JoinHandle<()>,
}

impl FeedPoller {
    /// Start polling. `interval` is clamped to at least one second.
    ///
    /// Must be called inside a tokio runtime.
    #[must_use]
    pub fn spawn(client: BackendClient, request: FeedPullRequest, interval: Duration) -> Self {
        Self::spawn_with(interval, move || {
            let client = client.clone();
            let request = request.clone();
            async move { client.feed_pull(&request).await }
        })
    }

    pub(crate) fn spawn_with<F, Fut>(interval: Duration, mut pull: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = FeedTick> + Send,
    {
        let (tx, rx) = mpsc::channel(8);
        let interval = interval.max(MIN_INTERVAL);
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let tick = pull().await;
                if let Err(error) = &tick {
                    tracing::warn!(%error, "feed poll failed");
                }
                if tx.send(tick).await.is_err() {
                    break;
                }
            }
        });
        Self { rx, task }
    }

    /// Wait for the next poll result. `None` once the poller has stopped.
    pub async fn recv(&mut self) -> Option<FeedTick> {
        self.rx.recv().await
    }

    /// Cancel the background task.
    pub fn stop(&self) {
        self.task.abort();
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for FeedPoller {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl BackendClient {
    /// Start a [`FeedPoller`] on a clone of this client.
    #[must_use]
    pub fn watch_feed(&self, request: FeedPullRequest, interval: Duration) -> FeedPoller {
        FeedPoller::spawn(self.clone(), request, interval)
    }
}
