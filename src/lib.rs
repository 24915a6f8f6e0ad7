//! A two-stage producer/consumer pipeline for random-matrix multiplication.
//!
//! One worker generates pairs of random square matrices at a fixed cadence;
//! a second worker multiplies each pair and appends the serialized product
//! to a results file. Shutdown is cooperative: Ctrl+C or a typed `stop`
//! command sets a stop token, the supervisor notifies the workers, and the
//! multiplier drains every item already queued before it exits. No item is
//! lost or processed twice during shutdown.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use matrix_pipeline::queue;
//! use matrix_pipeline::{Generator, Multiplier, ResultSink, ShutdownController};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (tx, rx) = queue::bounded(32);
//!     let shutdown = ShutdownController::new();
//!
//!     let generator = Generator::new(tx, shutdown.worker_token(), 3, Duration::from_secs(1));
//!     let sink = ResultSink::create("multiplication_results.txt").await?;
//!     let multiplier = Multiplier::new(rx, sink, shutdown.worker_token(), Duration::from_secs(1));
//!
//!     let generating = tokio::spawn(generator.run());
//!     let multiplying = tokio::spawn(multiplier.run());
//!
//!     shutdown.request_stop();
//!     shutdown.supervise().await;
//!
//!     generating.await?;
//!     multiplying.await?;
//!     Ok(())
//! }
//! ```

mod error;
mod generator;
pub mod listener;
mod matrix;
mod multiplier;
pub mod queue;
mod shutdown;
mod sink;

pub use error::Error;
pub use generator::Generator;
pub use matrix::{Matrix, SEPARATOR};
pub use multiplier::Multiplier;
pub use shutdown::ShutdownController;
pub use sink::ResultSink;
