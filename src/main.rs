use std::env;
use std::process;
use std::time::Duration;

use matrix_pipeline::queue;
use matrix_pipeline::{Generator, Multiplier, ResultSink, ShutdownController, listener};
use tracing::{error, info};

const RESULTS_PATH: &str = "multiplication_results.txt";
const QUEUE_CAPACITY: usize = 32;
const GENERATE_INTERVAL: Duration = Duration::from_secs(1);
const PULL_WAIT: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let size = match args.get(1).map(|arg| arg.parse::<usize>()) {
        Some(Ok(size)) if size > 0 => size,
        _ => {
            eprintln!("Usage: {} <matrix-dimension>", args[0]);
            eprintln!("The matrix dimension must be a positive integer.");
            process::exit(1);
        }
    };

    let sink = match ResultSink::create(RESULTS_PATH).await {
        Ok(sink) => sink,
        Err(e) => {
            eprintln!("failed to open {RESULTS_PATH}: {e}");
            process::exit(1);
        }
    };

    let shutdown = ShutdownController::new();
    let interrupts = shutdown.clone();
    tokio::spawn(async move { interrupts.watch_interrupt().await });

    let (tx, rx) = queue::bounded(QUEUE_CAPACITY);
    let generator = Generator::new(tx, shutdown.worker_token(), size, GENERATE_INTERVAL);
    let multiplier = Multiplier::new(rx, sink, shutdown.worker_token(), PULL_WAIT);

    let generating = tokio::spawn(generator.run());
    let multiplying = tokio::spawn(multiplier.run());
    let listening = tokio::spawn(listener::listen(shutdown.clone()));

    shutdown.supervise().await;

    if let Err(e) = listening.await {
        error!("stop listener failed: {e}");
    }
    if let Err(e) = generating.await {
        error!("matrix generator failed: {e}");
    }
    if let Err(e) = multiplying.await {
        error!("matrix multiplier failed: {e}");
    }

    info!("pipeline terminated");
}
