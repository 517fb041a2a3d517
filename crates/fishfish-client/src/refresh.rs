//! Generic background refresh task
//!
//! One recurring-task abstraction instantiated twice by the client: the
//! domain-list sync and the session-token renewal. Each instance runs a
//! refresh function on a fixed interval in its own spawned task, entirely off
//! the caller's thread.
//!
//! Tick semantics:
//! - Ticks never overlap. The refresh future is awaited inside the loop, so a
//!   slow refresh delays the next tick (`MissedTickBehavior::Delay`) rather
//!   than running concurrently with itself.
//! - A tick error is logged at `warn` with the task role and swallowed; the
//!   loop keeps running and the last committed value stays authoritative.
//! - Cancellation is cooperative, checked at tick boundaries. The `biased`
//!   select checks the cancellation token before the ticker, so a cancel that
//!   races a due tick wins. A tick already executing when `stop` is called
//!   runs to completion and commits its result.

use std::future::Future;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::Result;

/// Handle to a running background refresh task.
///
/// Created by [`spawn`]; stopped exactly once by the client on shutdown.
/// There is no restart — a stopped task is terminal.
pub(crate) struct RefreshTask {
    role: &'static str,
    cancel: CancellationToken,
    handle: Mutex<Option<JoinHandle<()>>>,
}

/// Spawn a refresh loop that calls `refresh` every `interval`.
///
/// The immediate first tick of the interval is consumed before the loop
/// starts: the client has already run the refresh function synchronously
/// during startup, so the first scheduled invocation is one full interval
/// out.
pub(crate) fn spawn<F, Fut>(role: &'static str, interval: Duration, mut refresh: F) -> RefreshTask
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    let cancel = CancellationToken::new();
    let task_cancel = cancel.clone();

    let handle = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // Consume the immediate first tick; the startup seed already ran
        ticker.tick().await;

        loop {
            tokio::select! {
                biased;
                _ = task_cancel.cancelled() => {
                    debug!(role, "refresh loop cancelled");
                    break;
                }
                _ = ticker.tick() => {
                    if let Err(e) = refresh().await {
                        warn!(role, error = %e, "scheduled refresh failed, keeping previous value");
                    }
                }
            }
        }
    });

    debug!(role, interval_ms = interval.as_millis() as u64, "refresh loop started");
    RefreshTask {
        role,
        cancel,
        handle: Mutex::new(Some(handle)),
    }
}

impl RefreshTask {
    /// Cancel the loop and wait for the task to exit.
    ///
    /// After this returns, no further tick fires. Calling again is a no-op.
    pub(crate) async fn stop(&self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.lock().await.take() {
            if handle.await.is_err() {
                warn!(role = self.role, "refresh task panicked before shutdown");
            }
            debug!(role = self.role, "refresh loop stopped");
        }
    }
}

impl Drop for RefreshTask {
    fn drop(&mut self) {
        // Best-effort cleanup if the client is dropped without stop()
        if !self.cancel.is_cancelled() {
            self.cancel.cancel();
        }
    }
}
