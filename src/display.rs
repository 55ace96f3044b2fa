//! Doubled-resolution grid separating cells from the walls between them

use tracing::debug;

use crate::direction::{Direction, Sides};
use crate::grid::{Grid, Pos};
use crate::maze_generator::GridGraph;
use crate::room::Room;

/// Content of a display cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    #[default]
    Wall,
    Passage,
}

/// Display grid of `(2 * width + 1) x (2 * height + 1)` tiles.
///
/// Logical cell `(x, y)` sits at `(2x + 1, 2y + 1)`; the tile between two
/// cell positions is the wall or passage joining them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayGrid {
    tiles: Grid<Tile>,
    rooms: Vec<Room>,
}

impl DisplayGrid {
    /// Lay out a carved maze, walls everywhere except cell centers and
    /// carved passages.
    pub fn expand(graph: &GridGraph) -> Self {
        let mut tiles = Grid::filled(graph.width() * 2 + 1, graph.height() * 2 + 1, Tile::Wall);

        for cell in graph.cells().iter() {
            let center = Self::center_of(cell.pos());
            if let Some(tile) = tiles.at_mut(center) {
                *tile = Tile::Passage;
            }

            for direction in Direction::ALL {
                if !cell.is_open(direction) {
                    continue;
                }
                if let Some(tile) = tiles
                    .neighbor(center, direction)
                    .and_then(|between| tiles.at_mut(between))
                {
                    *tile = Tile::Passage;
                }
            }
        }

        debug!(
            width = tiles.width(),
            height = tiles.height(),
            "expanded maze for display"
        );
        Self {
            tiles,
            rooms: Vec::new(),
        }
    }

    /// Display position of a logical cell
    pub fn center_of(pos: Pos) -> Pos {
        Pos::new(pos.x * 2 + 1, pos.y * 2 + 1)
    }

    pub fn width(&self) -> usize {
        self.tiles.width()
    }

    pub fn height(&self) -> usize {
        self.tiles.height()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Tile> {
        self.tiles.get(x, y).copied()
    }

    pub fn tiles(&self) -> &Grid<Tile> {
        &self.tiles
    }

    /// Rooms cleared by [Self::carve_rooms]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Clear every tile of `rooms` to passage.
    ///
    /// Tiles outside the grid are skipped.
    pub fn carve_rooms(&mut self, rooms: &[Room]) {
        for room in rooms {
            for pos in room.positions() {
                if let Some(tile) = self.tiles.at_mut(pos) {
                    *tile = Tile::Passage;
                }
            }
            debug!(min = %room.min(), max = %room.max(), "carved room");
        }
        self.rooms.extend_from_slice(rooms);
    }

    /// Sides on which a passage tile meets another passage tile.
    ///
    /// Walls never connect, and neither does anything outside the grid.
    pub fn connections(&self, pos: Pos) -> Sides {
        if self.tiles.at(pos) != Some(&Tile::Passage) {
            return Sides::empty();
        }
        Direction::ALL
            .into_iter()
            .zip(self.tiles.neighbors_keep_position(pos))
            .filter(|(_, neighbor)| {
                neighbor.and_then(|n| self.tiles.at(n)) == Some(&Tile::Passage)
            })
            .fold(Sides::empty(), |sides, (direction, _)| sides | direction.side())
    }
}
