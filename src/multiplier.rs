//! Matrix-pair consumer: multiplies pairs and records the results.

use std::time::Duration;

use tokio::io::AsyncWrite;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::Error;
use crate::queue::{Pulled, WorkItem, WorkReceiver};
use crate::sink::ResultSink;

/// Consumes matrix pairs from the queue, multiplies each and appends the
/// product to the result sink.
///
/// Termination is drain-then-stop: a pull timeout only ends the loop once
/// the stop token has fired *and* the queue is observed empty, and an
/// end-of-stream marker ends it unconditionally. A stop request alone
/// never discards items already queued.
pub struct Multiplier<W> {
    queue: WorkReceiver,
    sink: ResultSink<W>,
    stop: CancellationToken,
    wait: Duration,
}

impl<W: AsyncWrite + Unpin> Multiplier<W> {
    pub fn new(
        queue: WorkReceiver,
        sink: ResultSink<W>,
        stop: CancellationToken,
        wait: Duration,
    ) -> Self {
        Self {
            queue,
            sink,
            stop,
            wait,
        }
    }

    /// Runs until the stream ends or the queue drains after a stop. The
    /// sink is flushed and closed before returning, on every exit path.
    pub async fn run(mut self) {
        info!("matrix multiplier started");
        if let Err(e) = self.multiply_loop().await {
            error!("matrix multiplier interrupted: {e}");
        }
        if let Err(e) = self.sink.close().await {
            error!("failed to close result sink: {e}");
        }
        info!("matrix multiplier stopped");
    }

    async fn multiply_loop(&mut self) -> Result<(), Error> {
        loop {
            match self.queue.pull(self.wait).await {
                Pulled::Empty => {
                    if self.stop.is_cancelled() && self.queue.is_empty() {
                        info!("queue drained after stop");
                        return Ok(());
                    }
                }
                Pulled::Closed => return Ok(()),
                Pulled::Item(WorkItem::EndOfStream) => {
                    info!("end of stream received");
                    return Ok(());
                }
                Pulled::Item(WorkItem::Pair(a, b)) => match a.multiply(&b) {
                    Ok(product) => {
                        self.sink.append(&product).await?;
                        info!("multiplied a matrix pair and recorded the result");
                    }
                    // Non-fatal: skip the pair and keep consuming.
                    Err(e) => warn!("skipping matrix pair: {e}"),
                },
            }
        }
    }
}
