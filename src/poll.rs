//! Cancellable fixed-interval polling.
//!
//! The client has three independent polls: the notification unread count,
//! the delivery portal's assigned orders, and order status tracking. Each is
//! a `PeriodicTask`: started when its view mounts, stopped explicitly (or on
//! drop of the handle) when the view goes away, so a late response can never
//! update a disposed view. A failed tick is logged and retried on the next
//! tick; there is no backoff or jitter.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tracing::warn;

use crate::error::AppError;

pub const NOTIFICATION_POLL_INTERVAL: Duration = Duration::from_secs(30);
pub const DELIVERY_ORDERS_POLL_INTERVAL: Duration = Duration::from_secs(15);
pub const ORDER_TRACKING_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Handle to a running periodic task. Stopping (or dropping) the handle
/// cancels the task before its next tick.
pub struct PeriodicTask {
    name: &'static str,
    stop_tx: watch::Sender<bool>,
    handle: tokio::task::JoinHandle<()>,
}

impl PeriodicTask {
    /// Spawn a task running `tick` every `interval`. The first tick fires
    /// immediately so a freshly mounted view is populated without waiting a
    /// full interval.
    pub fn spawn<F, Fut>(name: &'static str, interval: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), AppError>> + Send,
    {
        let (stop_tx, mut stop_rx) = watch::channel(false);
        let handle = tokio::spawn(async move {
            let mut timer = tokio::time::interval(interval);
            timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = timer.tick() => {
                        if let Err(e) = tick().await {
                            // Stale data is acceptable; keep showing the last
                            // successful result until the next tick lands.
                            warn!(target: "railbite::poll", "poll '{}' tick failed: {}", name, e);
                        }
                    }
                    _ = stop_rx.changed() => {
                        if *stop_rx.borrow() {
                            break;
                        }
                    }
                }
            }
        });
        Self { name, stop_tx, handle }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Stop the task. Idempotent; safe to call after the task has already
    /// been stopped.
    pub fn stop(&self) {
        let _ = self.stop_tx.send(true);
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        let _ = self.stop_tx.send(true);
        self.handle.abort();
    }
}
