//! Compass directions and the side bitmask

use bitflags::bitflags;

bitflags! {
    /// Set of cell sides, one bit per direction.
    ///
    /// Used both for the walls still standing around a maze cell and for
    /// the connectivity key of a display cell, which selects its glyph.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Sides: u8 {
        const NORTH = 0b0001;
        const SOUTH = 0b0010;
        const EAST = 0b0100;
        const WEST = 0b1000;
    }
}

/// One of the four grid directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Neighbors are always examined in this order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Step `(dx, dy)`; north points towards row 0.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub fn side(self) -> Sides {
        match self {
            Direction::North => Sides::NORTH,
            Direction::South => Sides::SOUTH,
            Direction::East => Sides::EAST,
            Direction::West => Sides::WEST,
        }
    }
}

impl From<Direction> for Sides {
    fn from(direction: Direction) -> Self {
        direction.side()
    }
}
