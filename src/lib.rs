//! RustQR Gen - QR symbol layout in pure Rust
//!
//! Computes the module layout of a QR-style symbol: finder, alignment and
//! timing patterns plus the zigzag placement of metadata and payload bits.
//! Error correction and masking are not part of the layout.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment-driven render settings
pub mod config;
/// Symbol construction (version, classification, traversal, placement)
pub mod encoder;
/// Core data structures (Coordinate, ModuleMatrix, Symbol, Version)
pub mod models;
/// Text and image rendering of a finished matrix
pub mod render;
/// Helpers shared by the CLI and benches
pub mod tools;

pub use encoder::{EncodeError, Result};
pub use models::{Coordinate, EncodingMode, ModuleMatrix, PlacementStatus, Symbol, Version};

use encoder::build_symbol;
use encoder::mode::select_best_mode;
use rayon::prelude::*;

/// Encode a payload with the automatically selected mode
///
/// # Arguments
/// * `payload` - Text to encode; its UTF-8 bytes are placed
///
/// # Returns
/// The built symbol, or the capacity/mode fault that stopped it. An all-digit
/// payload selects numeric mode, which version resolution rejects; use
/// [`encode_with_mode`] with [`EncodingMode::Binary`] for those.
pub fn encode(payload: &str) -> Result<Symbol> {
    encode_with_mode(payload, select_best_mode(payload))
}

/// Encode a payload with an explicit mode
pub fn encode_with_mode(payload: &str, mode: EncodingMode) -> Result<Symbol> {
    build_symbol(payload.as_bytes(), mode)
}

/// Encode many payloads in parallel
///
/// Each build owns its own traversal and matrix, so results match
/// sequential [`encode`] calls and come back in input order.
pub fn encode_batch(payloads: &[&str]) -> Vec<Result<Symbol>> {
    payloads.par_iter().map(|payload| encode(payload)).collect()
}
