//! Error types for rat256 operations

use thiserror::Error;

/// Result type alias for rat256 operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when decoding an encoded rational
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Buffer shorter than the minimum header plus digit payload
    #[error("encoded rational is too short to decode")]
    Truncated,
}
