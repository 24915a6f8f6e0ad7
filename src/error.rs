//! Error types for pipeline operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("matrix dimension mismatch: A is {0}x{1}, B is {2}x{3}")]
    DimensionMismatch(usize, usize, usize, usize),

    #[error("matrix rows must be non-empty and rectangular")]
    MalformedMatrix,

    #[error("work queue closed")]
    QueueClosed,

    #[error("result sink error: {0}")]
    Io(#[from] std::io::Error),
}
