use core::fmt;
use std::ops::{Index, IndexMut};

use itertools::{iproduct, Itertools};
use thiserror::Error;

use crate::point::{Direction, Point};
use crate::search::bfs::{bfs, bfs_path};
use crate::search::FxIndexMap;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Rows of a grid must all have the same length.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{point} is outside the {width}x{height} grid")]
    OutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },
}

/// Read access shared by [Grid] and [BorderedGrid](crate::BorderedGrid), plus
/// the searches that only need 4-neighbourhoods.
pub trait GridView<T> {
    fn at(&self, point: Point) -> &T;

    /// The walkable 4-neighbours of `point`, in [Direction::CARDINAL] order. Never
    /// more than four.
    fn neighbours4(&self, point: Point) -> impl Iterator<Item = Point> + '_;

    /// All walkable points in row-major order.
    fn points(&self) -> impl Iterator<Item = Point> + '_;

    /// Breadth-first flood from `start` over [neighbours4](Self::neighbours4).
    fn flood(&self, start: Point) -> impl Iterator<Item = Point> + '_ {
        bfs(&start, move |p: &Point| self.neighbours4(*p))
    }

    /// Number of steps from `start` to every point reachable from it.
    fn step_distances(&self, start: Point) -> FxIndexMap<Point, usize> {
        let mut search = bfs(&start, |p: &Point| self.neighbours4(*p));
        search.by_ref().for_each(drop);
        search.into_depths()
    }

    /// A fewest-steps path from `start` to `goal`, both included.
    fn step_path(&self, start: Point, goal: Point) -> Option<Vec<Point>> {
        bfs_path(&start, |p: &Point| self.neighbours4(*p), |p| *p == goal)
    }
}

/// A rectangular grid of cells stored row-major. Row and column indices start
/// at 0.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Builds a grid from its rows, which must all have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Grid<T>, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }
        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<T>) -> Grid<T> {
        debug_assert_eq!(cells.len(), width * height);
        Grid {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.row >= 0
            && point.col >= 0
            && (point.row as usize) < self.height
            && (point.col as usize) < self.width
    }

    fn index_of(&self, point: Point) -> Option<usize> {
        self.in_bounds(point)
            .then(|| point.row as usize * self.width + point.col as usize)
    }

    pub fn get(&self, point: Point) -> Option<&T> {
        self.index_of(point).map(|ix| &self.cells[ix])
    }

    pub fn get_mut(&mut self, point: Point) -> Option<&mut T> {
        self.index_of(point).map(move |ix| &mut self.cells[ix])
    }

    /// Replaces a cell and returns the previous value. Panics if `point` is out
    /// of bounds; see [try_set](Self::try_set).
    pub fn set(&mut self, point: Point, value: T) -> T {
        std::mem::replace(&mut self[point], value)
    }

    pub fn try_set(&mut self, point: Point, value: T) -> Result<T, GridError> {
        let (width, height) = (self.width, self.height);
        self.get_mut(point)
            .map(|cell| std::mem::replace(cell, value))
            .ok_or(GridError::OutOfBounds {
                point,
                width,
                height,
            })
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        let width = self.width;
        (0..self.height).map(move |r| {
            let start = r * width;
            &self.cells[start..start + width]
        })
    }

    pub(crate) fn into_rows(self) -> Vec<Vec<T>> {
        let width = self.width;
        let mut cells = self.cells.into_iter();
        (0..self.height)
            .map(|_| cells.by_ref().take(width).collect())
            .collect()
    }
}

impl<T: Clone> Grid<T> {
    pub fn new(width: usize, height: usize, value: T) -> Grid<T> {
        Grid {
            width,
            height,
            cells: vec![value; width * height],
        }
    }
}

impl<T: PartialEq> Grid<T> {
    /// The first point in row-major order holding `value`.
    pub fn find(&self, value: &T) -> Option<Point> {
        self.find_all(value).next()
    }

    pub fn find_all<'a>(&'a self, value: &'a T) -> impl Iterator<Item = Point> + 'a {
        self.all_points().filter(move |p| self[*p] == *value)
    }
}

impl<T> Grid<T> {
    pub(crate) fn all_points(&self) -> impl Iterator<Item = Point> {
        iproduct!(0..self.height as i32, 0..self.width as i32).map(Point::from)
    }
}

fn text_rows(input: &str) -> impl Iterator<Item = &str> {
    input.trim_end_matches(['\n', '\r']).lines()
}

impl Grid<u8> {
    /// One row per line, one byte per cell. A trailing newline is ignored.
    pub fn parse_bytes(input: &str) -> Result<Grid<u8>, GridError> {
        let rows = text_rows(input).map(|line| line.as_bytes().to_vec());
        Grid::from_rows(rows.collect())
    }
}

impl Grid<char> {
    /// One row per line, one char per cell. A trailing newline is ignored.
    pub fn parse_chars(input: &str) -> Result<Grid<char>, GridError> {
        let rows = text_rows(input).map(|line| line.chars().collect());
        Grid::from_rows(rows.collect())
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, point: Point) -> &T {
        match self.index_of(point) {
            Some(ix) => &self.cells[ix],
            None => panic!(
                "{} is outside the {}x{} grid",
                point, self.width, self.height
            ),
        }
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, point: Point) -> &mut T {
        match self.index_of(point) {
            Some(ix) => &mut self.cells[ix],
            None => panic!(
                "{} is outside the {}x{} grid",
                point, self.width, self.height
            ),
        }
    }
}

impl<T> GridView<T> for Grid<T> {
    fn at(&self, point: Point) -> &T {
        &self[point]
    }

    fn neighbours4(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        Direction::CARDINAL
            .into_iter()
            .map(move |dir| point.to(dir))
            .filter(move |p| self.in_bounds(*p))
    }

    fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.all_points()
    }
}

impl fmt::Display for Grid<u8> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.iter().map(|&b| b as char).join(""))?;
        }
        Ok(())
    }
}

impl fmt::Display for Grid<char> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.iter().join(""))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid<u8> {
        Grid::parse_bytes("..#\n.#.\n...\n").unwrap()
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(err.to_string(), "row 1 has 2 cells, expected 3");
        assert!(Grid::parse_chars("abc\nab").is_err());
    }

    #[test]
    fn parses_rows_in_order() {
        let grid = sample();
        assert_eq!((grid.width(), grid.height()), (3, 3));
        assert_eq!(*grid.at(Point::new(0, 2)), b'#');
        assert_eq!(*grid.at(Point::new(1, 1)), b'#');
        assert_eq!(grid.get(Point::new(3, 0)), None);
        assert_eq!(grid.get(Point::new(-1, 0)), None);
        assert_eq!(grid.to_string(), "..#\n.#.\n...\n");
    }

    #[test]
    #[should_panic]
    fn at_out_of_bounds_panics() {
        sample().at(Point::new(0, 3));
    }

    #[test]
    fn neighbours_stay_inside() {
        let grid = sample();
        let corner: Vec<Point> = grid.neighbours4(Point::new(0, 0)).collect();
        assert_eq!(corner, vec![Point::new(0, 1), Point::new(1, 0)]);
        assert_eq!(grid.neighbours4(Point::new(1, 1)).count(), 4);
        // The plain grid does not look at cell values.
        let left_edge: Vec<Point> = grid.neighbours4(Point::new(1, 0)).collect();
        assert!(left_edge.contains(&Point::new(1, 1)));
    }

    #[test]
    fn points_are_row_major() {
        let grid = Grid::new(2, 2, 0);
        let points: Vec<Point> = grid.points().collect();
        assert_eq!(
            points,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(1, 0),
                Point::new(1, 1)
            ]
        );
    }

    #[test]
    fn set_and_find() {
        let mut grid = sample();
        assert_eq!(grid.find(&b'#'), Some(Point::new(0, 2)));
        assert_eq!(grid.find_all(&b'#').count(), 2);
        assert_eq!(grid.set(Point::new(0, 2), b'.'), b'#');
        assert_eq!(grid.find(&b'#'), Some(Point::new(1, 1)));
        assert!(matches!(
            grid.try_set(Point::new(5, 5), b'#'),
            Err(GridError::OutOfBounds { .. })
        ));
        assert_eq!(grid.find(&b'x'), None);
    }

    #[test]
    fn empty_and_zero_width_grids() {
        let empty: Grid<u8> = Grid::from_rows(vec![]).unwrap();
        assert_eq!(empty.points().count(), 0);
        assert_eq!(empty.to_string(), "");
        let thin: Grid<u8> = Grid::from_rows(vec![vec![], vec![]]).unwrap();
        assert_eq!((thin.width(), thin.height()), (0, 2));
        assert_eq!(thin.points().count(), 0);
        assert_eq!(thin.rows().count(), 2);
        assert!(thin.rows().all(|row| row.is_empty()));
        assert_eq!(thin.to_string(), "\n\n");
        assert_eq!(thin.into_rows(), vec![Vec::<u8>::new(), Vec::new()]);
    }

    #[test]
    fn step_distances_ignore_cell_values() {
        let grid = sample();
        let distances = grid.step_distances(Point::new(0, 0));
        assert_eq!(distances.len(), 9);
        assert_eq!(distances[&Point::new(2, 2)], 4);
        let path = grid.step_path(Point::new(0, 0), Point::new(0, 2)).unwrap();
        assert_eq!(path.len(), 3);
    }
}
