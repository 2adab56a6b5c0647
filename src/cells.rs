use crate::units::Width;
use crate::walls::WallFlags;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }

    /// Inverse of the row-major `y * width + x` indexing. `width` must be non zero.
    #[inline]
    pub(crate) fn from_row_major_index(index: usize, width: Width) -> Cartesian2DCoordinate {
        let Width(w) = width;
        let x = index % w;
        let y = index / w;

        Cartesian2DCoordinate::new(x as u32, y as u32)
    }
}

impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

/// The four sides of a square cell.
///
/// Left and Right move along x. Down moves towards y = 0 and Up away from it.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum WallSide {
    Left,
    Right,
    Up,
    Down,
}

/// Neighbour discovery order. Fixed so that a fixed random sequence always carves the same maze.
pub const NEIGHBOUR_ORDER: [WallSide; 4] = [WallSide::Left, WallSide::Right, WallSide::Down,
                                             WallSide::Up];

impl WallSide {
    #[inline]
    pub fn opposite(self) -> WallSide {
        match self {
            WallSide::Left => WallSide::Right,
            WallSide::Right => WallSide::Left,
            WallSide::Up => WallSide::Down,
            WallSide::Down => WallSide::Up,
        }
    }

    /// The wall flag guarding this side of a cell.
    #[inline]
    pub fn flag(self) -> WallFlags {
        match self {
            WallSide::Left => WallFlags::LEFT,
            WallSide::Right => WallFlags::RIGHT,
            WallSide::Up => WallFlags::UP,
            WallSide::Down => WallFlags::DOWN,
        }
    }

    /// The side guarded by a single wall flag, `None` for anything else.
    pub fn from_flag(flag: WallFlags) -> Option<WallSide> {
        match flag {
            WallFlags::LEFT => Some(WallSide::Left),
            WallFlags::RIGHT => Some(WallSide::Right),
            WallFlags::UP => Some(WallSide::Up),
            WallFlags::DOWN => Some(WallSide::Down),
            _ => None,
        }
    }

    /// Creates a new coordinate offset 1 cell away on this side.
    /// Returns None if the coordinate is not representable. The far grid edge is not checked.
    pub fn offset_coordinate(self, coord: Cartesian2DCoordinate) -> Option<Cartesian2DCoordinate> {
        let (x, y) = (coord.x, coord.y);
        match self {
            WallSide::Left => x.checked_sub(1).map(|left| Cartesian2DCoordinate::new(left, y)),
            WallSide::Right => x.checked_add(1).map(|right| Cartesian2DCoordinate::new(right, y)),
            WallSide::Down => y.checked_sub(1).map(|down| Cartesian2DCoordinate::new(x, down)),
            WallSide::Up => y.checked_add(1).map(|up| Cartesian2DCoordinate::new(x, up)),
        }
    }
}

/// A cell adjacent to some current cell, with the side of the current cell that faces it.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Neighbour {
    pub coord: Cartesian2DCoordinate,
    pub side: WallSide,
}
