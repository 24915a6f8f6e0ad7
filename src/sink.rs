//! Append-only destination for serialized multiplication results.

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};

use crate::matrix::Matrix;

/// Buffered append-only writer for multiplication results.
///
/// Opened once when the multiplier starts and closed when it terminates.
/// Each matrix is serialized in full before any byte is written, so the
/// sink never holds a partial block.
pub struct ResultSink<W> {
    writer: BufWriter<W>,
}

impl ResultSink<File> {
    /// Creates (or truncates) the results file at `path`.
    pub async fn create(path: impl AsRef<Path>) -> std::io::Result<Self> {
        Ok(Self::new(File::create(path).await?))
    }
}

impl<W: AsyncWrite + Unpin> ResultSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Appends one serialized matrix and flushes it through.
    pub async fn append(&mut self, matrix: &Matrix) -> std::io::Result<()> {
        self.writer.write_all(matrix.serialize().as_bytes()).await?;
        self.writer.flush().await
    }

    /// Flushes any buffered output and returns the underlying writer.
    pub async fn close(mut self) -> std::io::Result<W> {
        self.writer.flush().await?;
        Ok(self.writer.into_inner())
    }
}
