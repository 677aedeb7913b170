//! Zigzag walk over the fillable modules of a symbol.
//!
//! The walk starts in the bottom-right corner and climbs two columns at a
//! time, right column first, reversing vertical phase whenever it runs into a
//! reserved zone or the grid edge. Skippable modules (alignment square,
//! timing dots) are jumped over without leaving the column pair.
//!
//! The state machine is exposed as a pure [`step`] function over
//! [`TraversalState`] so callers can drive it explicitly; [`GridTraversal`]
//! wraps it into an iterator.

use super::boundary::{BoundaryKind, BoundaryMap};
use crate::models::{Coordinate, Direction, next_direction};

/// Position of the walker once every fillable module has been visited.
///
/// It lies inside the bottom-left finder zone, so it is never a data module.
pub fn exit_coordinate(width: usize) -> Coordinate {
    Coordinate::new(0, width as i32 - 7)
}

/// Walker state, owned by a single traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalState {
    /// Last module reached
    pub position: Coordinate,
    /// Move to apply on the next step
    pub direction: Direction,
    /// Vertical phase of the current column pair
    pub going_up: bool,
}

impl TraversalState {
    /// Bottom-right corner, about to step left, climbing.
    pub fn initial(width: usize) -> Self {
        let far = width as i32 - 1;
        Self {
            position: Coordinate::new(far, far),
            direction: Direction::Left,
            going_up: true,
        }
    }

    /// False once the walker has parked on the exit coordinate
    pub fn has_next(&self, width: usize) -> bool {
        self.position != exit_coordinate(width)
    }
}

/// Modules emitted by one step: none, one or two, in visit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emitted {
    cells: [Coordinate; 2],
    len: usize,
}

impl Emitted {
    fn none() -> Self {
        Self {
            cells: [Coordinate::default(); 2],
            len: 0,
        }
    }

    fn one(cell: Coordinate) -> Self {
        Self {
            cells: [cell, Coordinate::default()],
            len: 1,
        }
    }

    fn two(first: Coordinate, second: Coordinate) -> Self {
        Self {
            cells: [first, second],
            len: 2,
        }
    }

    /// Emitted modules in order
    pub fn as_slice(&self) -> &[Coordinate] {
        &self.cells[..self.len]
    }

    /// Number of emitted modules
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the step emitted nothing
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Advance the walker by one step.
///
/// Returns the new state and the modules visited on the way, which are
/// always fillable and never repeat over the life of one walk. Stepping a
/// finished state returns it unchanged with nothing emitted.
pub fn step(state: TraversalState, map: &BoundaryMap) -> (TraversalState, Emitted) {
    if !state.has_next(map.width()) {
        return (state, Emitted::none());
    }

    let going_up = state.going_up;
    let mut candidate = state.position.step(state.direction);
    let mut direction = next_direction(state.direction, going_up);
    while map.classify(candidate) == BoundaryKind::Skippable {
        candidate = candidate.step(direction);
        direction = next_direction(direction, going_up);
    }

    if map.is_fillable(candidate) {
        let next = TraversalState {
            position: candidate,
            direction,
            going_up,
        };
        return (next, Emitted::one(candidate));
    }

    shift_column_pair(state, map)
}

/// Blocked mid-column: reverse the vertical phase and restart the zigzag in
/// the next column pair to the left.
fn shift_column_pair(state: TraversalState, map: &BoundaryMap) -> (TraversalState, Emitted) {
    let going_up = !state.going_up;
    let mut probe = state.position.left();
    while map.classify(probe) == BoundaryKind::Skippable {
        probe = probe.left();
    }

    if map.is_fillable(probe) {
        let neighbour = probe.left();
        if map.is_fillable(neighbour) {
            let next = TraversalState {
                position: neighbour,
                direction: next_direction(Direction::Left, going_up),
                going_up,
            };
            return (next, Emitted::two(probe, neighbour));
        }
        let next = TraversalState {
            position: probe,
            direction: Direction::Left,
            going_up,
        };
        return (next, Emitted::one(probe));
    }

    match detour(probe, going_up, map) {
        Some(cell) => {
            tracing::trace!(from = ?state.position, to = ?cell, "traversal detour");
            let next = TraversalState {
                position: cell,
                direction: Direction::Left,
                going_up,
            };
            (next, Emitted::one(cell))
        }
        None => {
            let next = TraversalState {
                position: exit_coordinate(map.width()),
                direction: Direction::Left,
                going_up,
            };
            (next, Emitted::none())
        }
    }
}

/// The obstruction spans the next column too (the bottom-left finder zone
/// seen from the bottom edge). Slide along the column in the new vertical
/// phase until a fillable module turns up, moving further left when a
/// column has none. `None` once no column remains.
fn detour(from: Coordinate, going_up: bool, map: &BoundaryMap) -> Option<Coordinate> {
    let dy = if going_up { -1 } else { 1 };
    let mut column = from;
    while column.x >= 0 {
        let mut cell = column;
        while map.contains(cell) {
            if map.is_fillable(cell) {
                return Some(cell);
            }
            cell = cell.offset(0, dy);
        }
        column = column.left();
    }
    None
}

/// Stateful walker over the fillable modules of one symbol.
///
/// Yields the starting corner first, then everything [`step`] emits.
#[derive(Debug, Clone)]
pub struct GridTraversal<'a> {
    map: &'a BoundaryMap,
    state: TraversalState,
    pending: Emitted,
    cursor: usize,
}

impl<'a> GridTraversal<'a> {
    /// Walker positioned on the bottom-right corner of `map`
    pub fn new(map: &'a BoundaryMap) -> Self {
        let state = TraversalState::initial(map.width());
        Self {
            map,
            state,
            pending: Emitted::one(state.position),
            cursor: 0,
        }
    }

    /// Current walker state
    pub fn state(&self) -> TraversalState {
        self.state
    }

    /// False once every fillable module has been produced by `advance`
    pub fn has_next(&self) -> bool {
        self.state.has_next(self.map.width())
    }

    /// Run one step and return the modules it visited.
    pub fn advance(&mut self) -> Emitted {
        let (state, emitted) = step(self.state, self.map);
        self.state = state;
        emitted
    }
}

impl Iterator for GridTraversal<'_> {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        loop {
            if let Some(&cell) = self.pending.as_slice().get(self.cursor) {
                self.cursor += 1;
                return Some(cell);
            }
            if !self.has_next() {
                return None;
            }
            self.pending = self.advance();
            self.cursor = 0;
        }
    }
}

/// Every fillable module of `map`, in placement order
pub fn fillable_positions(map: &BoundaryMap) -> Vec<Coordinate> {
    let mut positions = Vec::with_capacity(map.fillable_count());
    positions.extend(GridTraversal::new(map));
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_initial_state() {
        let state = TraversalState::initial(21);
        assert_eq!(state.position, Coordinate::new(20, 20));
        assert_eq!(state.direction, Direction::Left);
        assert!(state.going_up);
        assert!(state.has_next(21));
    }

    #[test]
    fn test_opening_zigzag() {
        let map = BoundaryMap::new(21);
        let positions: Vec<Coordinate> = GridTraversal::new(&map).take(6).collect();
        assert_eq!(
            positions,
            vec![
                Coordinate::new(20, 20),
                Coordinate::new(19, 20),
                Coordinate::new(20, 19),
                Coordinate::new(19, 19),
                Coordinate::new(20, 18),
                Coordinate::new(19, 18),
            ]
        );
    }

    #[test]
    fn test_pair_shift_emits_two() {
        let map = BoundaryMap::new(21);
        // climbing the first pair, about to hit the top-right zone
        let state = TraversalState {
            position: Coordinate::new(19, 9),
            direction: Direction::DiagonalUp,
            going_up: true,
        };
        let (next, emitted) = step(state, &map);
        assert_eq!(
            emitted.as_slice(),
            &[Coordinate::new(18, 9), Coordinate::new(17, 9)]
        );
        assert!(!next.going_up);
        assert_eq!(next.position, Coordinate::new(17, 9));
        assert_eq!(next.direction, Direction::DiagonalDown);
    }

    #[test]
    fn test_skips_alignment_square() {
        let map = BoundaryMap::new(21);
        let state = TraversalState {
            position: Coordinate::new(15, 17),
            direction: Direction::DiagonalUp,
            going_up: true,
        };
        let (next, emitted) = step(state, &map);
        assert_eq!(emitted.as_slice(), &[Coordinate::new(16, 11)]);
        assert_eq!(next.direction, Direction::Left);
    }

    #[test]
    fn test_half_covered_pair_keeps_left_column() {
        let map = BoundaryMap::new(21);
        let state = TraversalState {
            position: Coordinate::new(11, 17),
            direction: Direction::DiagonalUp,
            going_up: true,
        };
        let (next, emitted) = step(state, &map);
        assert_eq!(emitted.as_slice(), &[Coordinate::new(11, 16)]);
        assert_eq!(next.direction, Direction::DiagonalUp);
    }

    #[test]
    fn test_skips_timing_column_on_shift() {
        let map = BoundaryMap::new(21);
        let state = TraversalState {
            position: Coordinate::new(7, 9),
            direction: Direction::DiagonalUp,
            going_up: true,
        };
        let (_, emitted) = step(state, &map);
        assert_eq!(
            emitted.as_slice(),
            &[Coordinate::new(5, 9), Coordinate::new(4, 9)]
        );
    }

    #[test]
    fn test_detour_around_bottom_left_zone() {
        let map = BoundaryMap::new(21);
        let state = TraversalState {
            position: Coordinate::new(9, 20),
            direction: Direction::DiagonalDown,
            going_up: false,
        };
        let (next, emitted) = step(state, &map);
        assert_eq!(emitted.as_slice(), &[Coordinate::new(8, 12)]);
        assert!(next.going_up);
        assert_eq!(next.direction, Direction::Left);
    }

    #[test]
    fn test_terminates_on_exit() {
        let map = BoundaryMap::new(21);
        let state = TraversalState {
            position: Coordinate::new(0, 12),
            direction: Direction::DiagonalDown,
            going_up: false,
        };
        let (next, emitted) = step(state, &map);
        assert!(emitted.is_empty());
        assert_eq!(next.position, exit_coordinate(21));
        assert!(!next.has_next(21));

        // stepping a finished walker is a no-op
        let (again, emitted) = step(next, &map);
        assert_eq!(again, next);
        assert!(emitted.is_empty());
    }

    #[test]
    fn test_visits_every_fillable_once() {
        for width in [21, 25, 45, 101, 177] {
            let map = BoundaryMap::new(width);
            let positions = fillable_positions(&map);
            let unique: HashSet<Coordinate> = positions.iter().copied().collect();
            assert_eq!(unique.len(), positions.len());
            assert_eq!(positions.len(), map.fillable_count());
            assert!(positions.iter().all(|&c| map.is_fillable(c)));
        }
    }

    #[test]
    fn test_version1_last_modules() {
        let map = BoundaryMap::new(21);
        let positions = fillable_positions(&map);
        assert_eq!(positions.len(), 183);
        assert_eq!(positions.last(), Some(&Coordinate::new(0, 12)));
    }

    #[test]
    fn test_manual_driving_matches_iterator() {
        let map = BoundaryMap::new(25);
        let mut state = TraversalState::initial(25);
        let mut manual = vec![state.position];
        while state.has_next(25) {
            let (next, emitted) = step(state, &map);
            manual.extend_from_slice(emitted.as_slice());
            state = next;
        }
        assert_eq!(manual, fillable_positions(&map));
    }
}
