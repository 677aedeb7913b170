/// Version resolution: smallest version whose capacity fits the payload
use super::error::{EncodeError, Result};
use crate::models::{EncodingMode, Version};

/// Resolve the smallest version able to hold `payload_len` bytes.
///
/// Only `Binary` is supported; other modes are rejected before the
/// capacity check.
pub fn resolve(payload_len: usize, mode: EncodingMode) -> Result<Version> {
    if mode != EncodingMode::Binary {
        return Err(EncodeError::UnsupportedMode(mode));
    }
    Version::all()
        .find(|v| v.max_binary_chars() >= payload_len)
        .ok_or(EncodeError::CapacityExceeded {
            length: payload_len,
            max: Version::MAX.max_binary_chars(),
        })
}
