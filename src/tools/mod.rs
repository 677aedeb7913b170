use std::path::Path;

use crate::encoder::{BoundaryKind, BoundaryMap, GridTraversal};
use crate::models::{ModuleMatrix, Symbol};
use crate::render::render_image;

/// Render `symbol` with the configured scale and quiet zone and save it.
///
/// The format follows the file extension.
pub fn save_png<P: AsRef<Path>>(symbol: &Symbol, path: P) -> Result<(), image::ImageError> {
    render_image(symbol.matrix()).save(path)
}

/// Summary statistics for a module matrix.
#[derive(Debug, Clone, Copy)]
pub struct ModuleStats {
    /// Count of dark modules.
    pub dark_modules: usize,
    /// Total modules in the matrix.
    pub total_modules: usize,
    /// Ratio of dark modules to total modules.
    pub dark_ratio: f64,
}

/// Compute dark module stats for a matrix.
pub fn module_stats(matrix: &ModuleMatrix) -> ModuleStats {
    let dark = matrix.dark_count();
    let total = matrix.width() * matrix.width();
    let ratio = if total == 0 {
        0.0
    } else {
        dark as f64 / total as f64
    };
    ModuleStats {
        dark_modules: dark,
        total_modules: total,
        dark_ratio: ratio,
    }
}

/// Visit index of every module, row-major; `None` for reserved modules.
pub fn traversal_order(width: usize) -> Vec<Option<usize>> {
    let map = BoundaryMap::new(width);
    let mut order = vec![None; width * width];
    for (visit, cell) in GridTraversal::new(&map).enumerate() {
        if let Some(index) = cell.index(width) {
            order[index] = Some(visit);
        }
    }
    order
}

/// Boundary classification as text: `#` unskippable, `+` skippable,
/// `.` fillable.
pub fn classification_grid(width: usize) -> String {
    let map = BoundaryMap::new(width);
    let mut out = String::with_capacity(width * (width + 1));
    for (cell, kind) in map.cells() {
        out.push(match kind {
            BoundaryKind::Unskippable => '#',
            BoundaryKind::Skippable => '+',
            BoundaryKind::None => '.',
        });
        if cell.x as usize == width - 1 {
            out.push('\n');
        }
    }
    out
}
