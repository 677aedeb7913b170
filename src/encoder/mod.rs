//! QR symbol construction
//!
//! This module contains the layout pipeline, leaf first:
//! - Version resolution (payload length to symbol width)
//! - Boundary classification (fillable / skippable / unskippable modules)
//! - Zigzag traversal over the fillable modules
//! - Fixed pattern drawing and metadata/payload bit placement

/// Module classification driving the traversal
pub mod boundary;
/// Encode error types
pub mod error;
/// Encoding mode selection
pub mod mode;
/// Fixed function patterns
pub mod patterns;
/// Bit placement onto the module matrix
pub mod placement;
/// Capacity table and field widths
pub mod tables;
/// Zigzag traversal engine
pub mod traversal;
/// Version resolution
pub mod version;

pub use boundary::{BoundaryKind, BoundaryMap};
pub use error::{EncodeError, Result};
pub use traversal::{GridTraversal, TraversalState, step};

use crate::models::{EncodingMode, PlacementStatus, Symbol};
use placement::ModulePlacer;

/// Build a symbol for `payload` encoded in `mode`.
///
/// Capacity and mode faults are returned before any module is placed. A
/// placement underrun still yields a symbol, flagged as truncated.
pub fn build_symbol(payload: &[u8], mode: EncodingMode) -> Result<Symbol> {
    let version = version::resolve(payload.len(), mode)?;
    let width = version.width();
    tracing::debug!(
        version = version.number(),
        width,
        payload_len = payload.len(),
        "resolved symbol version"
    );

    let map = BoundaryMap::new(width);
    let placer = ModulePlacer::with_fixed_patterns(width, GridTraversal::new(&map));
    let (matrix, status) = placement::place(placer, mode, payload);

    match status {
        PlacementStatus::Complete => {
            tracing::debug!(dark = matrix.dark_count(), "symbol placed");
        }
        PlacementStatus::Truncated {
            bits_written,
            bits_required,
        } => {
            tracing::warn!(
                bits_written,
                bits_required,
                "fillable modules exhausted, symbol truncated"
            );
        }
    }

    Ok(Symbol::new(version, mode, payload.len(), matrix, status))
}
