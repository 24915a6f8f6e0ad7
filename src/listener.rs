//! Interactive stop-command listener.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tracing::info;

use crate::shutdown::ShutdownController;

const STOP_COMMAND: &str = "stop";
const PROMPT: &str = "Type 'stop' to shut down the pipeline:";

/// Reads lines from standard input until the stop command arrives, input
/// ends, or a stop is requested elsewhere.
pub async fn listen(shutdown: ShutdownController) {
    listen_on(tokio::io::stdin(), shutdown).await
}

/// Listener loop over any line-oriented input source.
///
/// The token `stop` (case-insensitive, surrounding whitespace trimmed)
/// requests shutdown and ends the loop. Any other line re-prompts. End of
/// input ends the loop without treating it as a fault.
pub async fn listen_on<R: AsyncRead + Unpin>(input: R, shutdown: ShutdownController) {
    let mut lines = BufReader::new(input).lines();

    println!("{PROMPT}");
    loop {
        tokio::select! {
            _ = shutdown.requested() => break,
            line = lines.next_line() => match line {
                Ok(Some(text)) if text.trim().eq_ignore_ascii_case(STOP_COMMAND) => {
                    info!("stop command received");
                    shutdown.request_stop();
                    break;
                }
                Ok(Some(_)) => println!("{PROMPT}"),
                Ok(None) | Err(_) => break,
            },
        }
    }
}
