use thiserror::Error;

use crate::models::EncodingMode;

/// Result alias for symbol construction.
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Faults raised before any module is placed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Version resolution only knows the binary capacity table
    #[error("encoding mode {0:?} is not supported, only Binary is")]
    UnsupportedMode(EncodingMode),
    /// Payload is larger than the biggest version holds
    #[error("payload of {length} bytes exceeds the largest capacity of {max} bytes")]
    CapacityExceeded {
        /// Payload length in bytes
        length: usize,
        /// Capacity of the largest version
        max: usize,
    },
}
