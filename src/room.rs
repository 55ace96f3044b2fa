//! Rectangular rooms cleared out of a rendered maze

use crate::grid::Pos;

/// Axis-aligned rectangle of display cells, corners inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Room {
    min: Pos,
    max: Pos,
}

impl Room {
    /// Gap kept between rooms, and between rooms and the outer border.
    pub const SPACING: usize = 2;
    /// Rooms per row and per column of the layout.
    pub const BLOCKS: usize = 4;

    /// Room spanning the two corners, in any order.
    pub fn new(a: Pos, b: Pos) -> Self {
        Self {
            min: Pos::new(a.x.min(b.x), a.y.min(b.y)),
            max: Pos::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Top-left corner
    pub fn min(&self) -> Pos {
        self.min
    }

    /// Bottom-right corner
    pub fn max(&self) -> Pos {
        self.max
    }

    /// Number of columns covered
    pub fn width(&self) -> usize {
        self.max.x - self.min.x + 1
    }

    /// Number of rows covered
    pub fn height(&self) -> usize {
        self.max.y - self.min.y + 1
    }

    pub fn contains(&self, pos: Pos) -> bool {
        (self.min.x..=self.max.x).contains(&pos.x) && (self.min.y..=self.max.y).contains(&pos.y)
    }

    /// Every covered position, row by row
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let (min, max) = (self.min, self.max);
        (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| Pos { x, y }))
    }

    /// The room grown by `degree` cells on every side.
    ///
    /// Growth stops at row and column zero.
    pub fn around(&self, degree: usize) -> Room {
        Room {
            min: Pos::new(
                self.min.x.saturating_sub(degree),
                self.min.y.saturating_sub(degree),
            ),
            max: Pos::new(self.max.x + degree, self.max.y + degree),
        }
    }
}

/// Candidate rooms for a `width` x `height` display grid.
///
/// The grid is split into a [Room::BLOCKS] x [Room::BLOCKS] layout with
/// [Room::SPACING] cells between neighboring rooms and around the border,
/// so no room touches the outer edge. Rooms are listed row by row. Grids
/// too small to fit a block of at least one cell yield no rooms.
pub fn room_layout(width: usize, height: usize) -> Vec<Room> {
    let gaps = Room::SPACING * (Room::BLOCKS + 1);
    let block_w = width.saturating_sub(gaps) / Room::BLOCKS;
    let block_h = height.saturating_sub(gaps) / Room::BLOCKS;
    if block_w == 0 || block_h == 0 {
        return Vec::new();
    }

    let origin = |block: usize, size: usize| Room::SPACING + block * (size + Room::SPACING);
    (0..Room::BLOCKS)
        .flat_map(|ry| (0..Room::BLOCKS).map(move |rx| (rx, ry)))
        .map(|(rx, ry)| {
            let x = origin(rx, block_w);
            let y = origin(ry, block_h);
            Room::new(Pos::new(x, y), Pos::new(x + block_w - 1, y + block_h - 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{room_layout, Room};
    use crate::grid::Pos;

    #[test]
    fn corners_are_normalized() {
        let room = Room::new(Pos::new(5, 1), Pos::new(2, 4));
        assert_eq!(room.min(), Pos::new(2, 1));
        assert_eq!(room.max(), Pos::new(5, 4));
        assert_eq!((room.width(), room.height()), (4, 4));
        assert_eq!(room.positions().count(), 16);
        assert!(room.positions().all(|p| room.contains(p)));
    }

    #[test]
    fn around_grows_every_side() {
        let room = Room::new(Pos::new(3, 3), Pos::new(4, 3));
        let grown = room.around(1);
        assert_eq!(grown, Room::new(Pos::new(2, 2), Pos::new(5, 4)));
        assert_eq!(grown.positions().count(), 12);

        let clipped = Room::new(Pos::new(0, 1), Pos::new(0, 1)).around(2);
        assert_eq!(clipped.min(), Pos::new(0, 0));
        assert_eq!(clipped.max(), Pos::new(2, 3));
    }

    #[test]
    fn layout_has_sixteen_separated_rooms() {
        let (width, height) = (41, 33);
        let layout = room_layout(width, height);
        assert_eq!(layout.len(), Room::BLOCKS * Room::BLOCKS);

        for room in &layout {
            assert!(room.min().x >= Room::SPACING && room.min().y >= Room::SPACING);
            assert!(room.max().x + Room::SPACING < width);
            assert!(room.max().y + Room::SPACING < height);
        }
        for (i, a) in layout.iter().enumerate() {
            for b in &layout[i + 1..] {
                assert!(!a.positions().any(|p| b.contains(p)));
            }
        }
    }

    #[test]
    fn small_grid_has_no_layout() {
        assert!(room_layout(13, 41).is_empty());
        assert!(room_layout(41, 5).is_empty());
    }
}
