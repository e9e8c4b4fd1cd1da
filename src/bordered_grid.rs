use core::fmt;

use crate::grid::{Grid, GridError, GridView};
use crate::point::{Direction, Point};

/// A [Grid] surrounded by one ring of `border` cells.
///
/// The border value doubles as the wall value: a cell holding it is never
/// returned as a neighbour and has no neighbours itself, so searches need no
/// bounds checks. Coordinates are those of the bordered grid, meaning the input
/// cell `(r, c)` lives at `(r + 1, c + 1)`. Reading any point outside the
/// bordered grid also yields the border value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BorderedGrid<T> {
    grid: Grid<T>,
    border: T,
}

impl<T: Clone> BorderedGrid<T> {
    /// Copies `rows` into the interior of a new grid two cells wider and taller.
    /// The rows must all have the same length.
    pub fn new(rows: &[Vec<T>], border: T) -> Result<BorderedGrid<T>, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, values)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GridError::Ragged {
                row,
                expected: width,
                found: values.len(),
            });
        }
        let rows = rows.iter().map(|r| r.iter().cloned());
        Ok(Self::surround(rows, width, border))
    }

    pub fn from_grid(grid: Grid<T>, border: T) -> BorderedGrid<T> {
        let width = grid.width();
        Self::surround(grid.into_rows(), width, border)
    }

    fn surround<R, I>(rows: R, width: usize, border: T) -> BorderedGrid<T>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        let mut cells = vec![border.clone(); width + 2];
        let mut height = 2;
        for row in rows {
            cells.push(border.clone());
            cells.extend(row);
            cells.push(border.clone());
            height += 1;
        }
        cells.extend(std::iter::repeat(border.clone()).take(width + 2));
        BorderedGrid {
            grid: Grid::from_cells(width + 2, height, cells),
            border,
        }
    }
}

impl BorderedGrid<u8> {
    /// One row per line, one byte per cell, surrounded by `border`.
    pub fn parse_bytes(input: &str, border: u8) -> Result<BorderedGrid<u8>, GridError> {
        Grid::parse_bytes(input).map(|grid| BorderedGrid::from_grid(grid, border))
    }
}

impl BorderedGrid<char> {
    /// One row per line, one char per cell, surrounded by `border`.
    pub fn parse_chars(input: &str, border: char) -> Result<BorderedGrid<char>, GridError> {
        Grid::parse_chars(input).map(|grid| BorderedGrid::from_grid(grid, border))
    }
}

impl<T> BorderedGrid<T> {
    pub fn border(&self) -> &T {
        &self.border
    }

    /// The bordered grid, sentinel ring included.
    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    pub fn into_inner(self) -> Grid<T> {
        self.grid
    }

    /// Width including the border.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Height including the border.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Replaces a cell, e.g. to drop a wall in between searches. Panics outside
    /// the bordered grid.
    pub fn set(&mut self, point: Point, value: T) -> T {
        self.grid.set(point, value)
    }

    pub fn try_set(&mut self, point: Point, value: T) -> Result<T, GridError> {
        self.grid.try_set(point, value)
    }

    /// Converts a coordinate of the input rows to one of this grid.
    pub fn bordered(point: Point) -> Point {
        Point::new(point.row + 1, point.col + 1)
    }

    /// Converts a coordinate of this grid to one of the input rows.
    pub fn interior(point: Point) -> Point {
        Point::new(point.row - 1, point.col - 1)
    }
}

impl<T: PartialEq> BorderedGrid<T> {
    /// True for the sentinel ring, anything beyond it, and interior cells holding
    /// the border value.
    pub fn is_border(&self, point: Point) -> bool {
        *self.at(point) == self.border
    }

    pub fn find(&self, value: &T) -> Option<Point> {
        self.grid.find(value)
    }
}

impl<T: PartialEq> GridView<T> for BorderedGrid<T> {
    fn at(&self, point: Point) -> &T {
        self.grid.get(point).unwrap_or(&self.border)
    }

    fn neighbours4(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        let walled = self.is_border(point);
        Direction::CARDINAL
            .into_iter()
            .map(move |dir| point.to(dir))
            .filter(move |p| !walled && !self.is_border(*p))
    }

    fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.grid.all_points().filter(move |p| !self.is_border(*p))
    }
}

impl fmt::Display for BorderedGrid<u8> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

impl fmt::Display for BorderedGrid<char> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}
