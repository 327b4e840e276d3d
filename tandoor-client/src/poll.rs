//! Polling loop
//!
//! The dashboard refreshes by interval polling. [`Poller`] runs a
//! callback on a fixed cadence until cancelled; dropping it stops the
//! task so a forgotten handle never keeps polling in the background.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Dashboard refresh cadence
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// A cancellable repeating task
pub struct Poller {
    token: CancellationToken,
    // Held in an Option so shutdown can take it out from under Drop
    handle: Option<JoinHandle<()>>,
}

impl Poller {
    /// Spawn a task running `tick` every `interval`. The first tick
    /// fires immediately.
    pub fn spawn<F, Fut>(interval: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let token = CancellationToken::new();
        let task_token = token.clone();

        let handle = tokio::spawn(async move {
            let mut timer = tokio::time::interval(interval);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = task_token.cancelled() => break,
                    _ = timer.tick() => tick().await,
                }
            }
        });

        Self {
            token,
            handle: Some(handle),
        }
    }

    /// Stop the loop; the current tick, if running, finishes first
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Cancel and wait for the task to exit
    pub async fn shutdown(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.token.cancel();
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn ticks_until_cancelled() {
        let count = Arc::new(AtomicUsize::new(0));
        let task_count = count.clone();

        let poller = Poller::spawn(Duration::from_millis(10), move || {
            let count = task_count.clone();
            async move {
                count.fetch_add(1, Ordering::SeqCst);
            }
        });

        tokio::time::sleep(Duration::from_millis(55)).await;
        poller.shutdown().await;

        let after_shutdown = count.load(Ordering::SeqCst);
        assert!(after_shutdown >= 2, "expected several ticks, got {after_shutdown}");

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(count.load(Ordering::SeqCst), after_shutdown);
    }

    #[tokio::test]
    async fn shutdown_waits_for_the_current_tick() {
        let count = Arc::new(AtomicUsize::new(0));
        let task_count = count.clone();

        let poller = Poller::spawn(Duration::from_millis(1), move || {
            let count = task_count.clone();
            async move {
                tokio::time::sleep(Duration::from_millis(20)).await;
                count.fetch_add(1, Ordering::SeqCst);
            }
        });

        // First tick fires immediately and is still running here
        tokio::time::sleep(Duration::from_millis(5)).await;
        poller.shutdown().await;
        assert!(count.load(Ordering::SeqCst) >= 1);
    }

    #[tokio::test]
    async fn drop_stops_the_loop() {
        let count = Arc::new(AtomicUsize::new(0));
        let task_count = count.clone();

        let poller = Poller::spawn(Duration::from_millis(10), move || {
            let count = task_count.clone();
            async move {
                count.fetch_add(1, Ordering::SeqCst);
            }
        });

        tokio::time::sleep(Duration::from_millis(25)).await;
        drop(poller);
        tokio::time::sleep(Duration::from_millis(5)).await;

        let frozen = count.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(count.load(Ordering::SeqCst), frozen);
    }
}
