use alloc::string::String;
use enough::StopReason;

/// Errors from EBF decoding and grid construction.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EbfError {
    #[error("bad magic number")]
    BadMagicNumber,

    #[error("bad dimensions: {0}")]
    BadDimensions(String),

    #[error("grid allocation of {bytes} bytes failed")]
    AllocationFailure { bytes: usize },

    #[error("bad data: {0}")]
    BadData(String),

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("value count mismatch: expected {expected}, got {actual}")]
    ValueCountMismatch { expected: usize, actual: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for EbfError {
    fn from(r: StopReason) -> Self {
        EbfError::Cancelled(r)
    }
}
