//! Rectangular, coordinate-addressed storage

use std::fmt;

use crate::direction::Direction;
use crate::error::MazeError;

/// Location in a grid, column `x` and row `y`
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Position one step towards `direction`, unless that underflows.
    ///
    /// The upper bound is not checked here, see [Grid::neighbor].
    pub fn step(self, direction: Direction) -> Option<Pos> {
        let (dx, dy) = direction.offset();
        Some(Pos {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Row-major 2D grid with bounds-checked access
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid, creating each cell from its position.
    pub fn from_fn(width: usize, height: usize, mut init: impl FnMut(Pos) -> T) -> Self {
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Pos { x, y }))
            .map(&mut init)
            .collect();
        Self {
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

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        self.contains(x, y).then(|| y * self.width + x)
    }

    /// Cell at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        let i = self.index(x, y)?;
        Some(&self.cells[i])
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        let i = self.index(x, y)?;
        Some(&mut self.cells[i])
    }

    /// Replace the cell at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<(), MazeError> {
        let (width, height) = (self.width, self.height);
        let cell = self.get_mut(x, y).ok_or(MazeError::OutOfBounds {
            x,
            y,
            width,
            height,
        })?;
        *cell = value;
        Ok(())
    }

    pub fn at(&self, pos: Pos) -> Option<&T> {
        self.get(pos.x, pos.y)
    }

    pub fn at_mut(&mut self, pos: Pos) -> Option<&mut T> {
        self.get_mut(pos.x, pos.y)
    }

    /// Neighboring position towards `direction`, `None` when it falls
    /// outside the grid.
    pub fn neighbor(&self, pos: Pos, direction: Direction) -> Option<Pos> {
        pos.step(direction)
            .filter(|next| self.contains(next.x, next.y))
    }

    /// Neighbors that exist, in N, S, E, W order
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = (Direction, Pos)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.neighbor(pos, d).map(|next| (d, next)))
    }

    /// All four neighbor slots in N, S, E, W order, `None` for those
    /// outside the grid.
    pub fn neighbors_keep_position(&self, pos: Pos) -> [Option<Pos>; 4] {
        Direction::ALL.map(|d| self.neighbor(pos, d))
    }

    /// Positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Pos { x, y }))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks() rejects zero, an empty grid has no rows anyway
        self.cells.chunks(self.width.max(1))
    }
}

impl<T: Clone> Grid<T> {
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }
}
