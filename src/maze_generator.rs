//! Maze carving

use std::fmt;

use petgraph::algo::connected_components;
use petgraph::graph::NodeIndex;
use petgraph::{Graph, Undirected};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::{debug, trace};

use crate::direction::{Direction, Sides};
use crate::error::MazeError;
use crate::grid::{Grid, Pos};
use crate::room::Room;

/// One room of the carving grid
#[derive(Clone, PartialEq, Eq)]
pub struct MazeCell {
    pos: Pos,
    /// Sides where the wall is still standing
    walls: Sides,
    /// True until the cell is first connected to a neighbor
    intact: bool,
}

impl MazeCell {
    fn new(pos: Pos) -> Self {
        Self {
            pos,
            walls: Sides::all(),
            intact: true,
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn walls(&self) -> Sides {
        self.walls
    }

    /// Sides carved open towards a neighbor
    pub fn open_sides(&self) -> Sides {
        self.walls.complement()
    }

    pub fn is_open(&self, direction: Direction) -> bool {
        !self.walls.contains(direction.side())
    }

    pub fn is_intact(&self) -> bool {
        self.intact
    }

    /// Direction in which `other` lies, seen from this cell.
    ///
    /// Returns error, if the cells do not share a side.
    pub fn between(&self, other: &MazeCell) -> Result<Direction, MazeError> {
        let (a, b) = (self.pos, other.pos);
        Direction::ALL
            .into_iter()
            .find(|d| a.step(*d) == Some(b))
            .ok_or(MazeError::NotAdjacent { from: a, to: b })
    }
}

impl fmt::Debug for MazeCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<MazeCell on {}>", self.pos)
    }
}

impl fmt::Display for MazeCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Logical maze: a grid of cells and the passages carved between them
#[derive(Debug, Clone)]
pub struct GridGraph {
    cells: Grid<MazeCell>,
}

impl GridGraph {
    /// Uncarved grid, every wall standing.
    ///
    /// Returns error, if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Self {
            cells: Grid::from_fn(width, height, MazeCell::new),
        })
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&MazeCell> {
        self.cells.get(x, y)
    }

    pub fn cells(&self) -> &Grid<MazeCell> {
        &self.cells
    }

    /// Open a passage between two neighboring cells.
    ///
    /// Both sides of the shared wall are cleared together, and both cells
    /// stop being intact.
    pub fn connect(&mut self, a: Pos, b: Pos) -> Result<(), MazeError> {
        let direction = match (self.cells.at(a), self.cells.at(b)) {
            (Some(cell_a), Some(cell_b)) => cell_a.between(cell_b)?,
            _ => return Err(MazeError::NotAdjacent { from: a, to: b }),
        };

        for (pos, side) in [(a, direction), (b, direction.opposite())] {
            if let Some(cell) = self.cells.at_mut(pos) {
                cell.walls.remove(side.side());
                cell.intact = false;
            }
        }
        Ok(())
    }

    /// Neighbors of `pos` that no passage reaches yet
    pub fn intact_neighbors(&self, pos: Pos) -> Vec<Pos> {
        self.cells
            .neighbors(pos)
            .map(|(_, next)| next)
            .filter(|next| self.cells.at(*next).is_some_and(MazeCell::is_intact))
            .collect()
    }

    /// Uniformly chosen cell.
    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> Pos {
        Pos::new(
            rng.gen_range(0..self.width()),
            rng.gen_range(0..self.height()),
        )
    }

    /// Uniformly chosen cell that has all four neighbors, or `None` if
    /// the grid has no such cell.
    pub fn random_interior_cell<R: Rng>(&self, rng: &mut R) -> Option<Pos> {
        if self.width() < 3 || self.height() < 3 {
            return None;
        }
        Some(Pos::new(
            rng.gen_range(1..self.width() - 1),
            rng.gen_range(1..self.height() - 1),
        ))
    }

    /// Number of passages carved, each counted once
    pub fn open_connections(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                let carved = cell.open_sides() & (Sides::SOUTH | Sides::EAST);
                carved.bits().count_ones() as usize
            })
            .sum()
    }

    /// Carved passages as an undirected graph, node weights are cell
    /// positions.
    pub fn passage_graph(&self) -> Graph<Pos, (), Undirected> {
        let mut graph = Graph::new_undirected();
        let nodes: Vec<NodeIndex> = self
            .cells
            .positions()
            .map(|pos| graph.add_node(pos))
            .collect();
        let width = self.width();

        for cell in self.cells.iter() {
            let pos = cell.pos;
            for direction in [Direction::South, Direction::East] {
                if !cell.is_open(direction) {
                    continue;
                }
                if let Some(next) = self.cells.neighbor(pos, direction) {
                    graph.add_edge(
                        nodes[pos.y * width + pos.x],
                        nodes[next.y * width + next.x],
                        (),
                    );
                }
            }
        }
        graph
    }

    /// True if the passages form a spanning tree: one connected component
    /// with exactly one edge less than there are cells.
    pub fn is_perfect(&self) -> bool {
        let graph = self.passage_graph();
        connected_components(&graph) == 1 && graph.edge_count() == graph.node_count() - 1
    }
}

/// Maze generator owning its random source
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    /// Seeded generator for reproducible mazes, or seeded from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        debug!(?seed, "seeding maze generator");
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Carve a perfect maze with a randomized depth-first backtracker.
    ///
    /// Start at a random cell; repeatedly step into a random intact
    /// neighbor, pushing the previous cell on the stack. At a dead end, pop
    /// the stack. Stops once every cell has been visited, after exactly
    /// `width * height - 1` carves.
    pub fn carve(&mut self, width: usize, height: usize) -> Result<GridGraph, MazeError> {
        let mut graph = GridGraph::new(width, height)?;
        let total = width * height;

        let mut stack = Vec::new();
        let mut current = graph.random_cell(&mut self.random);
        let mut visited = 1;

        while visited < total {
            let intact = graph.intact_neighbors(current);
            if let Some(&next) = intact.choose(&mut self.random) {
                graph.connect(current, next)?;
                stack.push(current);
                current = next;
                visited += 1;
            } else {
                current = stack
                    .pop()
                    .ok_or(MazeError::BacktrackExhausted { visited, total })?;
                trace!(%current, "backtrack");
            }
        }

        debug!(
            width,
            height,
            passages = graph.open_connections(),
            "carved maze"
        );
        Ok(graph)
    }

    /// Pick `count` distinct rooms from `layout`.
    ///
    /// Returns error, if the layout holds fewer rooms.
    pub fn pick_rooms(&mut self, layout: &[Room], count: usize) -> Result<Vec<Room>, MazeError> {
        if count > layout.len() {
            return Err(MazeError::TooManyRooms {
                requested: count,
                available: layout.len(),
            });
        }
        Ok(layout
            .choose_multiple(&mut self.random, count)
            .copied()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{GridGraph, MazeCell, MazeGenerator};
    use crate::direction::{Direction, Sides};
    use crate::error::MazeError;
    use crate::grid::Pos;
    use crate::room::room_layout;

    #[test]
    fn between_finds_each_direction() {
        let center = MazeCell::new(Pos::new(1, 1));
        let cases = [
            (Pos::new(1, 0), Direction::North),
            (Pos::new(1, 2), Direction::South),
            (Pos::new(2, 1), Direction::East),
            (Pos::new(0, 1), Direction::West),
        ];
        for (pos, expected) in cases {
            assert_eq!(center.between(&MazeCell::new(pos)), Ok(expected));
        }
    }

    #[test]
    fn between_rejects_non_adjacent_cells() {
        let a = MazeCell::new(Pos::new(1, 1));
        for pos in [Pos::new(1, 1), Pos::new(2, 2), Pos::new(3, 1)] {
            assert_eq!(
                a.between(&MazeCell::new(pos)),
                Err(MazeError::NotAdjacent {
                    from: Pos::new(1, 1),
                    to: pos
                })
            );
        }
    }

    #[test]
    fn connect_clears_both_sides() {
        let mut graph = GridGraph::new(2, 2).unwrap();
        graph.connect(Pos::new(0, 0), Pos::new(1, 0)).unwrap();

        let a = graph.cell(0, 0).unwrap();
        let b = graph.cell(1, 0).unwrap();
        assert_eq!(a.open_sides(), Sides::EAST);
        assert_eq!(b.open_sides(), Sides::WEST);
        assert!(!a.is_intact() && !b.is_intact());
        assert!(graph.cell(0, 1).unwrap().is_intact());
        assert_eq!(graph.open_connections(), 1);
    }

    #[test]
    fn connect_rejects_distant_cells() {
        let mut graph = GridGraph::new(3, 3).unwrap();
        assert!(graph.connect(Pos::new(0, 0), Pos::new(2, 0)).is_err());
        assert!(graph.connect(Pos::new(0, 0), Pos::new(0, 5)).is_err());
        assert_eq!(graph.open_connections(), 0);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let mut gen = MazeGenerator::new(Some(0));
        assert_eq!(
            gen.carve(0, 4).unwrap_err(),
            MazeError::InvalidDimensions {
                width: 0,
                height: 4
            }
        );
        assert!(gen.carve(3, 0).is_err());
    }

    #[test]
    fn carving_produces_spanning_tree() {
        let mut gen = MazeGenerator::new(Some(0));
        let graph = gen.carve(8, 5).unwrap();

        assert_eq!(graph.open_connections(), 8 * 5 - 1);
        assert!(graph.is_perfect());
        assert!(graph.cells().iter().all(|c| !c.is_intact()));
        assert!(graph.cells().iter().all(|c| !c.open_sides().is_empty()));
    }

    #[test]
    fn single_cell_has_no_passages() {
        let mut gen = MazeGenerator::new(Some(3));
        let graph = gen.carve(1, 1).unwrap();
        assert_eq!(graph.open_connections(), 0);
        assert!(graph.is_perfect());
        assert_eq!(graph.cell(0, 0).unwrap().walls(), Sides::all());
    }

    #[test]
    fn corridor_is_a_straight_path() {
        let mut gen = MazeGenerator::new(Some(11));
        let graph = gen.carve(1, 6).unwrap();
        assert_eq!(graph.open_connections(), 5);
        for cell in graph.cells().iter() {
            assert!(!cell.is_open(Direction::East) && !cell.is_open(Direction::West));
        }
        assert!(graph.cell(0, 0).unwrap().is_open(Direction::South));
        assert!(graph.cell(0, 5).unwrap().is_open(Direction::North));
    }

    #[test]
    fn same_seed_same_maze() {
        let a = MazeGenerator::new(Some(42)).carve(10, 7).unwrap();
        let b = MazeGenerator::new(Some(42)).carve(10, 7).unwrap();
        let walls = |g: &GridGraph| g.cells().iter().map(MazeCell::walls).collect::<Vec<_>>();
        assert_eq!(walls(&a), walls(&b));
    }

    #[test]
    fn interior_cell_needs_a_border() {
        let mut rng = StdRng::seed_from_u64(0);
        let narrow = GridGraph::new(2, 9).unwrap();
        assert_eq!(narrow.random_interior_cell(&mut rng), None);

        let wide = GridGraph::new(5, 4).unwrap();
        for _ in 0..50 {
            let pos = wide.random_interior_cell(&mut rng).unwrap();
            assert_eq!(wide.cells().neighbors(pos).count(), 4);
        }
    }

    #[test]
    fn picked_rooms_are_distinct() {
        let mut gen = MazeGenerator::new(Some(5));
        let layout = room_layout(61, 61);
        let rooms = gen.pick_rooms(&layout, 6).unwrap();
        assert_eq!(rooms.len(), 6);
        for (i, room) in rooms.iter().enumerate() {
            assert!(layout.contains(room));
            assert!(!rooms[i + 1..].contains(room));
        }
        assert_eq!(
            gen.pick_rooms(&layout, 17),
            Err(MazeError::TooManyRooms {
                requested: 17,
                available: 16
            })
        );
    }

    #[test]
    fn cell_debug_names_position() {
        let cell = MazeCell::new(Pos::new(3, 4));
        assert_eq!(format!("{cell:?}"), "<MazeCell on (3, 4)>");
    }
}
