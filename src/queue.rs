//! Bounded hand-off channel between the generator and the multiplier.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

use crate::Error;
use crate::matrix::Matrix;

/// Unit of work moved through the queue.
#[derive(Debug)]
pub enum WorkItem {
    /// A pair of matrices awaiting multiplication.
    Pair(Matrix, Matrix),
    /// Marker pushed by the generator after its last real item.
    EndOfStream,
}

/// Outcome of a bounded-wait pull.
#[derive(Debug)]
pub enum Pulled {
    Item(WorkItem),
    /// The wait expired with nothing available. A polling signal that lets
    /// the consumer re-check its stop condition, not an error.
    Empty,
    /// All senders are gone.
    Closed,
}

/// Creates a bounded FIFO work queue.
pub fn bounded(capacity: usize) -> (WorkSender, WorkReceiver) {
    let (tx, rx) = mpsc::channel(capacity);
    (WorkSender { tx }, WorkReceiver { rx })
}

/// Producer half of the work queue.
#[derive(Clone)]
pub struct WorkSender {
    tx: mpsc::Sender<WorkItem>,
}

impl WorkSender {
    /// Pushes an item, waiting while the queue is full.
    pub async fn push(&self, item: WorkItem) -> Result<(), Error> {
        self.tx.send(item).await.map_err(|_| Error::QueueClosed)
    }
}

/// Consumer half of the work queue.
pub struct WorkReceiver {
    rx: mpsc::Receiver<WorkItem>,
}

impl WorkReceiver {
    /// Pulls the next item, waiting up to `wait`. Items come out in the
    /// order they were pushed.
    pub async fn pull(&mut self, wait: Duration) -> Pulled {
        match timeout(wait, self.rx.recv()).await {
            Ok(Some(item)) => Pulled::Item(item),
            Ok(None) => Pulled::Closed,
            Err(_) => Pulled::Empty,
        }
    }

    /// True when no item is currently queued.
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}
