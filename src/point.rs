use core::fmt;
use std::ops::Add;

/// A cell coordinate. `row` grows downwards, `col` grows to the right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

/// A unit step along one of the grid axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Direction {
    pub dr: i32,
    pub dc: i32,
}

impl Direction {
    pub const UP: Direction = Direction { dr: -1, dc: 0 };
    pub const DOWN: Direction = Direction { dr: 1, dc: 0 };
    pub const LEFT: Direction = Direction { dr: 0, dc: -1 };
    pub const RIGHT: Direction = Direction { dr: 0, dc: 1 };

    /// The four axis-aligned directions in the order neighbours are enumerated.
    /// Only tie-breaking between equal-cost paths depends on this order.
    pub const CARDINAL: [Direction; 4] = [
        Direction::RIGHT,
        Direction::DOWN,
        Direction::UP,
        Direction::LEFT,
    ];

    pub const fn new(dr: i32, dc: i32) -> Direction {
        Direction { dr, dc }
    }

    /// Rotates a quarter turn counter-clockwise, e.g. right becomes up.
    pub const fn turn_left(self) -> Direction {
        Direction {
            dr: -self.dc,
            dc: self.dr,
        }
    }

    /// Rotates a quarter turn clockwise, e.g. right becomes down.
    pub const fn turn_right(self) -> Direction {
        Direction {
            dr: self.dc,
            dc: -self.dr,
        }
    }

    pub const fn reverse(self) -> Direction {
        Direction {
            dr: -self.dr,
            dc: -self.dc,
        }
    }
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Point {
        Point { row, col }
    }

    /// The point one step away in `dir`. No bounds checking is done.
    pub const fn to(self, dir: Direction) -> Point {
        Point {
            row: self.row + dir.dr,
            col: self.col + dir.dc,
        }
    }

    /// Unchecked 4-neighbourhood in [Direction::CARDINAL] order.
    pub fn neighbours4(self) -> [Point; 4] {
        Direction::CARDINAL.map(|dir| self.to(dir))
    }

    pub fn manhattan_distance(&self, other: &Point) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
}

impl Add<Direction> for Point {
    type Output = Point;

    fn add(self, dir: Direction) -> Point {
        self.to(dir)
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, col): (i32, i32)) -> Point {
        Point::new(row, col)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_by_direction() {
        let p = Point::new(3, 5);
        assert_eq!(p.to(Direction::UP), Point::new(2, 5));
        assert_eq!(p + Direction::RIGHT, Point::new(3, 6));
        assert_eq!(Point::new(0, 0).to(Direction::LEFT), Point::new(0, -1));
        assert_eq!(Direction::new(0, 1), Direction::RIGHT);
        assert_eq!(p + Direction::new(2, -1), Point::new(5, 4));
    }

    #[test]
    fn neighbours_follow_cardinal_order() {
        let p = Point::new(1, 1);
        assert_eq!(
            p.neighbours4(),
            [
                Point::new(1, 2),
                Point::new(2, 1),
                Point::new(0, 1),
                Point::new(1, 0)
            ]
        );
    }

    #[test]
    fn turning() {
        assert_eq!(Direction::RIGHT.turn_left(), Direction::UP);
        assert_eq!(Direction::RIGHT.turn_right(), Direction::DOWN);
        assert_eq!(Direction::UP.turn_right(), Direction::RIGHT);
        for dir in Direction::CARDINAL {
            assert_eq!(dir.turn_left().turn_right(), dir);
            assert_eq!(dir.turn_right().turn_right(), dir.reverse());
        }
    }

    #[test]
    fn display_and_distance() {
        let a = Point::from((2, -1));
        assert_eq!(a.to_string(), "(2, -1)");
        assert_eq!(a.manhattan_distance(&Point::new(0, 0)), 3);
    }
}
