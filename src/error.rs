//! Error types.
use thiserror::Error;

/// Convenient return type for functions.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type.
///
/// Parse-level problems never surface here: a sequence that fails to decode
/// is passed through as [`Command::Unspecified`](crate::Command) instead.
/// The only operation that can fail is writing the encoded form to a sink
/// supplied by the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// Generic I/O error from the output sink.
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
}
