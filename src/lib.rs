//! Carve a perfect maze and draw it with box-drawing glyphs
//!
//! A maze is carved on a grid of cells with a randomized depth-first
//! backtracker, so every two cells are joined by exactly one path. The
//! carved grid is then expanded to a display grid twice its size plus one,
//! where walls and passages get their own cells, and every passage cell is
//! drawn with the glyph matching its passage neighbors.
//!
//! # Examples
//! ## A seeded 21x11 maze
//! ```
//! use glyph_maze::{Maze, MazeGenerator};
//!
//! let mut gen = MazeGenerator::new(Some(7));
//! let maze = Maze::generate(21, 11, 0, &mut gen).unwrap();
//! assert!(maze.graph().is_perfect());
//!
//! let text = maze.render();
//! assert_eq!(text.lines().count(), 11);
//! assert!(text.lines().all(|line| line.chars().count() == 21));
//! print!("{maze}");
//! ```
//!
//! ## Rooms
//! ```
//! use glyph_maze::{Maze, MazeGenerator};
//!
//! let mut gen = MazeGenerator::new(Some(7));
//! let maze = Maze::generate(61, 41, 3, &mut gen).unwrap();
//! assert_eq!(maze.display().rooms().len(), 3);
//! ```

use std::fmt;

use tracing::info;

pub mod config;
pub mod direction;
pub mod display;
pub mod error;
pub mod grid;
pub mod maze_generator;
pub mod render;
pub mod room;

pub use config::MazeConfig;
pub use direction::{Direction, Sides};
pub use display::{DisplayGrid, Tile};
pub use error::MazeError;
pub use grid::{Grid, Pos};
pub use maze_generator::{GridGraph, MazeCell, MazeGenerator};
pub use room::{room_layout, Room};

/// A carved maze together with its display layout
#[derive(Debug, Clone)]
pub struct Maze {
    /// Carved cell graph
    graph: GridGraph,
    /// Expanded grid used for drawing
    display: DisplayGrid,
}

impl Maze {
    /// Generate a maze for a `width` x `height` display.
    ///
    /// The display dimensions are halved into maze cells, so odd values
    /// lose one row or column. `rooms` rooms are cleared from the
    /// [room_layout] after expansion.
    ///
    /// Returns error, if a dimension is below two, or if the layout has
    /// fewer than `rooms` rooms.
    pub fn generate(
        width: usize,
        height: usize,
        rooms: usize,
        generator: &mut MazeGenerator,
    ) -> Result<Self, MazeError> {
        if width < 2 || height < 2 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        let (cols, rows) = (width / 2, height / 2);

        // Room count is validated before carving
        let layout = room_layout(cols * 2 + 1, rows * 2 + 1);
        if rooms > layout.len() {
            return Err(MazeError::TooManyRooms {
                requested: rooms,
                available: layout.len(),
            });
        }

        let graph = generator.carve(cols, rows)?;
        let mut display = DisplayGrid::expand(&graph);
        if rooms > 0 {
            let picked = generator.pick_rooms(&layout, rooms)?;
            display.carve_rooms(&picked);
        }
        info!(cols, rows, rooms, "generated maze");

        Ok(Self { graph, display })
    }

    /// Generate a maze from validated settings.
    pub fn from_config(
        config: &MazeConfig,
        generator: &mut MazeGenerator,
    ) -> Result<Self, MazeError> {
        let (width, height) = config.dimensions()?;
        Self::generate(width, height, config.rooms(), generator)
    }

    pub fn graph(&self) -> &GridGraph {
        &self.graph
    }

    pub fn display(&self) -> &DisplayGrid {
        &self.display
    }

    /// Rendered text, one line per display row
    pub fn render(&self) -> String {
        render::render(&self.display)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
