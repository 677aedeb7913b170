/// Fixed function patterns: finder squares, alignment square, timing dots,
/// dark module
use crate::models::Coordinate;

/// Side of a finder square
pub const FINDER_SIZE: i32 = 7;
/// Side of the alignment square
pub const ALIGNMENT_SIZE: i32 = 5;

/// One-module-thick frame of a `size` x `size` block (perimeter only).
pub fn hollow_square(top_left: Coordinate, size: i32) -> Vec<Coordinate> {
    let (left, right) = (top_left.x, top_left.x + size - 1);
    let (top, bottom) = (top_left.y, top_left.y + size - 1);
    let mut cells = Vec::with_capacity((4 * size - 4).max(0) as usize);
    for y in top..=bottom {
        for x in left..=right {
            if x == left || x == right || y == top || y == bottom {
                cells.push(Coordinate::new(x, y));
            }
        }
    }
    cells
}

/// Positioning square: hollow frame plus a solid core inset by two modules
/// (3x3 for a finder, a single module for the alignment square).
pub fn positioning_square(top_left: Coordinate, size: i32) -> Vec<Coordinate> {
    let mut cells = hollow_square(top_left, size);
    let core = top_left.offset(2, 2);
    for dy in 0..size - 4 {
        for dx in 0..size - 4 {
            cells.push(core.offset(dx, dy));
        }
    }
    cells
}

/// Top-left corners of the three finder squares
pub fn finder_origins(width: usize) -> [Coordinate; 3] {
    let far = width as i32 - FINDER_SIZE;
    [
        Coordinate::new(0, 0),
        Coordinate::new(far, 0),
        Coordinate::new(0, far),
    ]
}

/// Top-left corner of the alignment square, inset 8 from the far edge
pub fn alignment_origin(width: usize) -> Coordinate {
    let inset = width as i32 - 9;
    Coordinate::new(inset, inset)
}

/// Dark timing dots on row 6 and column 6: even `i` with `8 < i < width - 7`
pub fn timing_dots(width: usize) -> Vec<Coordinate> {
    (9..width as i32 - 7)
        .filter(|i| i % 2 == 0)
        .flat_map(|i| [Coordinate::new(6, i), Coordinate::new(i, 6)])
        .collect()
}

/// The single always-dark module next to the bottom-left finder
pub fn dark_module(width: usize) -> Coordinate {
    Coordinate::new(8, width as i32 - 8)
}

/// Every dark module contributed by the fixed patterns of a `width` symbol
pub fn fixed_pattern_cells(width: usize) -> Vec<Coordinate> {
    let mut cells: Vec<Coordinate> = finder_origins(width)
        .into_iter()
        .flat_map(|origin| positioning_square(origin, FINDER_SIZE))
        .collect();
    cells.extend(positioning_square(alignment_origin(width), ALIGNMENT_SIZE));
    cells.extend(timing_dots(width));
    cells.push(dark_module(width));
    cells
}
