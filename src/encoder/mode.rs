/// Encoding mode selection
use crate::models::EncodingMode;

/// Pick the encoding mode for `payload`.
///
/// A non-empty all-digit payload selects `Numeric`, everything else `Binary`.
pub fn select_best_mode(payload: &str) -> EncodingMode {
    if !payload.is_empty() && payload.bytes().all(|b| b.is_ascii_digit()) {
        EncodingMode::Numeric
    } else {
        EncodingMode::Binary
    }
}
