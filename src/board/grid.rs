//! Grid geometry: cells, sides, directions.
//!
//! Coordinates are `(x, y)` with `x` growing to the right and `y`
//! growing downward, so the TOP side of a cell faces `y - 1`.

use serde::{Deserialize, Serialize};

/// One square of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `direction`, or `None` past the edge of a
    /// `size`×`size` board.
    #[must_use]
    pub fn step(self, direction: Direction, size: usize) -> Option<Cell> {
        let (dx, dy) = direction.offset();
        let x = self.x as i64 + i64::from(dx);
        let y = self.y as i64 + i64::from(dy);
        if in_bounds(x, y, size) {
            Some(Cell::new(x as usize, y as usize))
        } else {
            None
        }
    }

    /// In-bounds orthogonal neighbours with the direction that reaches each.
    pub fn neighbors(self, size: usize) -> impl Iterator<Item = (Direction, Cell)> {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.step(dir, size).map(|cell| (dir, cell)))
    }

    /// Row-major index on a `size`-wide board.
    #[must_use]
    pub const fn index(self, size: usize) -> usize {
        self.y * size + self.x
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An edge of a cell where a wall may stand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// The side facing this one across a shared edge.
    #[must_use]
    pub const fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Direction of the step that crosses this side.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Side::Top => Direction::Up,
            Side::Bottom => Direction::Down,
            Side::Left => Direction::Left,
            Side::Right => Direction::Right,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        };
        f.write_str(name)
    }
}

/// An orthogonal step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Unit `(dx, dy)` of the step.
    #[must_use]
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Side of the starting cell this step crosses.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Direction::Up => Side::Top,
            Direction::Down => Side::Bottom,
            Direction::Left => Side::Left,
            Direction::Right => Side::Right,
        }
    }

    /// Direction of the single step from `from` to `to`, if they are adjacent.
    #[must_use]
    pub fn between(from: Cell, to: Cell) -> Option<Direction> {
        let dx = to.x as i64 - from.x as i64;
        let dy = to.y as i64 - from.y as i64;
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Whether `(x, y)` lies on a `size`×`size` board.
#[must_use]
pub fn in_bounds(x: i64, y: i64, size: usize) -> bool {
    let size = size as i64;
    (0..size).contains(&x) && (0..size).contains(&y)
}

/// Manhattan distance exactly 1. Diagonal cells are not adjacent.
#[must_use]
pub fn is_adjacent(a: Cell, b: Cell) -> bool {
    Direction::between(a, b).is_some()
}

/// TOP↔BOTTOM, LEFT↔RIGHT.
#[must_use]
pub const fn opposite(side: Side) -> Side {
    side.opposite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        assert!(in_bounds(0, 0, 7));
        assert!(in_bounds(6, 6, 7));
        assert!(!in_bounds(7, 0, 7));
        assert!(!in_bounds(0, -1, 7));
        assert!(!in_bounds(0, 0, 0));
    }

    #[test]
    fn test_is_adjacent() {
        let c = Cell::new(3, 3);
        assert!(is_adjacent(c, Cell::new(3, 2)));
        assert!(is_adjacent(c, Cell::new(4, 3)));
        assert!(!is_adjacent(c, Cell::new(4, 4)));
        assert!(!is_adjacent(c, Cell::new(5, 3)));
        assert!(!is_adjacent(c, c));
    }

    #[test]
    fn test_opposite() {
        for side in Side::ALL {
            assert_ne!(opposite(side), side);
            assert_eq!(opposite(opposite(side)), side);
        }
        assert_eq!(opposite(Side::Top), Side::Bottom);
        assert_eq!(opposite(Side::Left), Side::Right);
    }

    #[test]
    fn test_direction_side_mapping() {
        assert_eq!(Direction::Right.side(), Side::Right);
        assert_eq!(Direction::Left.side(), Side::Left);
        assert_eq!(Direction::Down.side(), Side::Bottom);
        assert_eq!(Direction::Up.side(), Side::Top);
        for side in Side::ALL {
            assert_eq!(side.direction().side(), side);
        }
    }

    #[test]
    fn test_step_and_neighbors() {
        assert_eq!(Cell::new(0, 0).step(Direction::Up, 7), None);
        assert_eq!(Cell::new(0, 0).step(Direction::Right, 7), Some(Cell::new(1, 0)));
        assert_eq!(Cell::new(6, 6).step(Direction::Down, 7), None);

        assert_eq!(Cell::new(0, 0).neighbors(7).count(), 2);
        assert_eq!(Cell::new(3, 0).neighbors(7).count(), 3);
        assert_eq!(Cell::new(3, 3).neighbors(7).count(), 4);
    }

    #[test]
    fn test_between() {
        let c = Cell::new(2, 2);
        assert_eq!(Direction::between(c, Cell::new(2, 1)), Some(Direction::Up));
        assert_eq!(Direction::between(c, Cell::new(1, 2)), Some(Direction::Left));
        assert_eq!(Direction::between(c, Cell::new(3, 3)), None);
    }
}
