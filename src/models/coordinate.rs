/// Movement applied to a [`Coordinate`] by the grid traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One column right, one row up: `(x + 1, y - 1)`
    DiagonalUp,
    /// One column right, one row down: `(x + 1, y + 1)`
    DiagonalDown,
    /// One column left: `(x - 1, y)`
    Left,
}

/// Direction that follows `direction` in the zigzag.
///
/// Inside a column pair the walker alternates between a `Left` step and a
/// diagonal step back to the right column; `going_up` picks which diagonal.
pub fn next_direction(direction: Direction, going_up: bool) -> Direction {
    match direction {
        Direction::DiagonalUp | Direction::DiagonalDown => Direction::Left,
        Direction::Left if going_up => Direction::DiagonalUp,
        Direction::Left => Direction::DiagonalDown,
    }
}

/// Integer module coordinate, `x` is the column and `y` the row.
///
/// Components are signed so that probes one step outside the grid are
/// representable; the classifier treats them as reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Coordinate {
    /// Create a new coordinate
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate reached by one step in `direction`
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::DiagonalUp => Self::new(self.x + 1, self.y - 1),
            Direction::DiagonalDown => Self::new(self.x + 1, self.y + 1),
            Direction::Left => self.left(),
        }
    }

    /// Neighbour one column to the left
    pub fn left(self) -> Self {
        Self::new(self.x - 1, self.y)
    }

    /// Offset by `(dx, dy)`
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Row-major index inside a `width` x `width` grid, `None` when outside.
    pub fn index(self, width: usize) -> Option<usize> {
        let (x, y) = (usize::try_from(self.x).ok()?, usize::try_from(self.y).ok()?);
        if x < width && y < width {
            Some(y * width + x)
        } else {
            None
        }
    }
}
