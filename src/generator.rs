//! Matrix-pair producer.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::Error;
use crate::matrix::Matrix;
use crate::queue::{WorkItem, WorkSender};

/// Produces pairs of random square matrices at a fixed cadence until the
/// stop token fires.
pub struct Generator {
    queue: WorkSender,
    stop: CancellationToken,
    size: usize,
    interval: Duration,
}

impl Generator {
    pub fn new(
        queue: WorkSender,
        stop: CancellationToken,
        size: usize,
        interval: Duration,
    ) -> Self {
        Self {
            queue,
            stop,
            size,
            interval,
        }
    }

    /// Runs until stopped. Exactly one end-of-stream marker is pushed
    /// before returning, on every exit path, so the consumer is never
    /// left waiting on a queue that will stay silent.
    pub async fn run(self) {
        info!("matrix generator started");
        if let Err(e) = self.generate_loop().await {
            error!("matrix generator interrupted: {e}");
        }
        if self.queue.push(WorkItem::EndOfStream).await.is_err() {
            warn!("work queue already closed, end-of-stream not delivered");
        }
        info!("matrix generator stopped");
    }

    async fn generate_loop(&self) -> Result<(), Error> {
        while !self.stop.is_cancelled() {
            let a = Matrix::random(self.size);
            let b = Matrix::random(self.size);
            self.queue.push(WorkItem::Pair(a, b)).await?;
            info!("generated a matrix pair");

            tokio::select! {
                _ = self.stop.cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }
        Ok(())
    }
}
