//! Cooperative shutdown coordination.

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Two-tier stop coordination for the pipeline.
///
/// The request tier is set by either trigger path (the process interrupt
/// or the user's `stop` command) and is idempotent: the flag only moves
/// from unset to set, and duplicate triggers are no-ops. The worker tier
/// is the token the generator and multiplier actually observe;
/// [`supervise`](Self::supervise) bridges the two exactly once, keeping
/// the user-facing flag decoupled from the one the workers watch.
#[derive(Clone)]
pub struct ShutdownController {
    request: CancellationToken,
    workers: CancellationToken,
}

impl ShutdownController {
    pub fn new() -> Self {
        Self {
            request: CancellationToken::new(),
            workers: CancellationToken::new(),
        }
    }

    /// Requests shutdown. Safe to call from any task, any number of times.
    pub fn request_stop(&self) {
        if !self.request.is_cancelled() {
            info!("shutdown requested");
        }
        self.request.cancel();
    }

    /// True once a stop has been requested.
    pub fn stop_requested(&self) -> bool {
        self.request.is_cancelled()
    }

    /// Completes when a stop has been requested.
    pub async fn requested(&self) {
        self.request.cancelled().await
    }

    /// Token observed by the workers. Not cancelled until the supervisor
    /// propagates a stop request.
    pub fn worker_token(&self) -> CancellationToken {
        self.workers.clone()
    }

    /// Waits for a stop request, then notifies the workers.
    pub async fn supervise(&self) {
        self.request.cancelled().await;
        info!("notifying workers to stop");
        self.workers.cancel();
    }

    /// Watches for the process interrupt (Ctrl+C) and translates each
    /// delivery into a stop request. Repeated deliveries are absorbed
    /// here instead of tearing the process down.
    pub async fn watch_interrupt(&self) {
        loop {
            if tokio::signal::ctrl_c().await.is_err() {
                warn!("interrupt handler unavailable, signal path disabled");
                return;
            }
            info!("interrupt received");
            self.request_stop();
        }
    }
}

impl Default for ShutdownController {
    fn default() -> Self {
        Self::new()
    }
}
