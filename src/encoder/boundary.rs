use crate::models::Coordinate;

/// Routing class of a module for the grid traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundaryKind {
    /// Fillable data module
    #[default]
    None,
    /// Reserved but passed straight through (alignment square, timing dots)
    Skippable,
    /// Reserved and never entered (finder zones, anything off the grid)
    Unskippable,
}

/// Per-module boundary classification for one symbol width.
///
/// Computed once per width, row-major, O(1) lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryMap {
    width: usize,
    cells: Vec<BoundaryKind>,
}

impl BoundaryMap {
    /// Classify every module of a `width` x `width` symbol (`width >= 21`).
    pub fn new(width: usize) -> Self {
        debug_assert!(width >= 21 && width % 2 == 1, "not a symbol width: {width}");
        let mut map = Self {
            width,
            cells: vec![BoundaryKind::None; width * width],
        };
        let far = width as i32 - 1;

        // Finder zones: 7x7 square, separator, format strip (9x9 before the notch)
        map.mark_zone(0, 0);
        map.mark_zone(far - 8, 0);
        map.mark_zone(0, far - 8);

        // Notch lines facing the symbol interior stay open for the walker
        for i in 0..9 {
            map.mark(Coordinate::new(i, far - 8), BoundaryKind::None);
            map.mark(Coordinate::new(far - 8, i), BoundaryKind::None);
        }

        // Alignment square interior
        for dy in 0..5 {
            for dx in 0..5 {
                map.mark(
                    Coordinate::new(far - 8 + dx, far - 8 + dy),
                    BoundaryKind::Skippable,
                );
            }
        }

        // Timing row and column between the zones
        for i in 9..far - 7 {
            map.mark(Coordinate::new(6, i), BoundaryKind::Skippable);
            map.mark(Coordinate::new(i, 6), BoundaryKind::Skippable);
        }

        map
    }

    /// Side length in modules
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether `coordinate` lies on the grid
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.index(self.width).is_some()
    }

    /// Class of `coordinate`; anything off the grid is `Unskippable`.
    pub fn classify(&self, coordinate: Coordinate) -> BoundaryKind {
        match coordinate.index(self.width) {
            Some(index) => self.cells[index],
            None => BoundaryKind::Unskippable,
        }
    }

    /// Whether data may be placed at `coordinate`
    pub fn is_fillable(&self, coordinate: Coordinate) -> bool {
        self.classify(coordinate) == BoundaryKind::None
    }

    /// Every on-grid coordinate with its class, row-major
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, BoundaryKind)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(index, &kind)| {
            let coordinate = Coordinate::new((index % width) as i32, (index / width) as i32);
            (coordinate, kind)
        })
    }

    /// Number of modules of the given class
    pub fn count(&self, kind: BoundaryKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// Number of modules available for metadata and payload bits
    pub fn fillable_count(&self) -> usize {
        self.count(BoundaryKind::None)
    }

    fn mark_zone(&mut self, x: i32, y: i32) {
        for dy in 0..9 {
            for dx in 0..9 {
                self.mark(Coordinate::new(x + dx, y + dy), BoundaryKind::Unskippable);
            }
        }
    }

    fn mark(&mut self, coordinate: Coordinate, kind: BoundaryKind) {
        if let Some(index) = coordinate.index(self.width) {
            self.cells[index] = kind;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version1_counts() {
        let map = BoundaryMap::new(21);
        // 81 + 72 + 72 zone modules
        assert_eq!(map.count(BoundaryKind::Unskippable), 225);
        // 25 alignment + 2 * 4 timing
        assert_eq!(map.count(BoundaryKind::Skippable), 33);
        assert_eq!(map.fillable_count(), 21 * 21 - 225 - 33);
    }

    #[test]
    fn test_finder_zones() {
        let map = BoundaryMap::new(21);
        assert_eq!(map.classify(Coordinate::new(0, 0)), BoundaryKind::Unskippable);
        assert_eq!(map.classify(Coordinate::new(8, 8)), BoundaryKind::Unskippable);
        assert_eq!(map.classify(Coordinate::new(13, 8)), BoundaryKind::Unskippable);
        assert_eq!(map.classify(Coordinate::new(20, 0)), BoundaryKind::Unskippable);
        assert_eq!(map.classify(Coordinate::new(8, 13)), BoundaryKind::Unskippable);
        assert_eq!(map.classify(Coordinate::new(0, 20)), BoundaryKind::Unskippable);
        // first free row/column past each zone
        assert_eq!(map.classify(Coordinate::new(9, 0)), BoundaryKind::None);
        assert_eq!(map.classify(Coordinate::new(0, 9)), BoundaryKind::None);
    }

    #[test]
    fn test_notches_open() {
        for width in [21, 25, 57, 177] {
            let map = BoundaryMap::new(width);
            let notch = width as i32 - 9;
            for i in 0..9 {
                assert_ne!(
                    map.classify(Coordinate::new(i, notch)),
                    BoundaryKind::Unskippable
                );
                assert_ne!(
                    map.classify(Coordinate::new(notch, i)),
                    BoundaryKind::Unskippable
                );
            }
            assert!(map.is_fillable(Coordinate::new(8, notch)));
            assert!(map.is_fillable(Coordinate::new(notch, 8)));
        }
    }

    #[test]
    fn test_alignment_and_timing() {
        let map = BoundaryMap::new(25);
        for c in 16..=20 {
            assert_eq!(map.classify(Coordinate::new(c, 16)), BoundaryKind::Skippable);
            assert_eq!(map.classify(Coordinate::new(16, c)), BoundaryKind::Skippable);
        }
        assert!(map.is_fillable(Coordinate::new(21, 21)));
        assert!(map.is_fillable(Coordinate::new(15, 15)));
        for i in 9..=16 {
            assert_eq!(map.classify(Coordinate::new(6, i)), BoundaryKind::Skippable);
            assert_eq!(map.classify(Coordinate::new(i, 6)), BoundaryKind::Skippable);
        }
        assert_eq!(map.classify(Coordinate::new(6, 17)), BoundaryKind::Unskippable);
        assert_eq!(map.classify(Coordinate::new(17, 6)), BoundaryKind::Unskippable);
    }

    #[test]
    fn test_out_of_bounds_unskippable() {
        let map = BoundaryMap::new(21);
        for c in [
            Coordinate::new(-1, 10),
            Coordinate::new(10, -1),
            Coordinate::new(21, 10),
            Coordinate::new(10, 21),
        ] {
            assert!(!map.contains(c));
            assert_eq!(map.classify(c), BoundaryKind::Unskippable);
        }
    }

    #[test]
    fn test_partition_every_version() {
        for version in 1..=40usize {
            let width = 17 + 4 * version;
            let map = BoundaryMap::new(width);
            let total = map.count(BoundaryKind::None)
                + map.count(BoundaryKind::Skippable)
                + map.count(BoundaryKind::Unskippable);
            assert_eq!(total, width * width);
            assert_eq!(map.cells().count(), width * width);
            // zones, alignment and timing never collide, so the counts are fixed
            assert_eq!(map.count(BoundaryKind::Unskippable), 225);
            assert_eq!(map.count(BoundaryKind::Skippable), 25 + 2 * (width - 17));
        }
    }
}
