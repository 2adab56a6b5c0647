use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

/// A small bitset of the walls around a cell.
///
/// The bit layout is stable and shared with renderers: LEFT = 1, RIGHT = 2, UP = 4, DOWN = 8.
/// `VISITED` (128) marks a cell that the generator has reached. It is a traversal marker, not a
/// wall, and never appears in the wall bits handed out by `Grid::get`.
#[derive(Eq, PartialEq, Copy, Clone, Hash, Default)]
pub struct WallFlags(u8);

impl WallFlags {
    pub const LEFT: WallFlags = WallFlags(1);
    pub const RIGHT: WallFlags = WallFlags(2);
    pub const UP: WallFlags = WallFlags(4);
    pub const DOWN: WallFlags = WallFlags(8);
    pub const VISITED: WallFlags = WallFlags(128);

    #[inline]
    pub fn empty() -> WallFlags {
        WallFlags(0)
    }

    /// Every wall present, not visited.
    #[inline]
    pub fn all_walls() -> WallFlags {
        WallFlags::LEFT | WallFlags::RIGHT | WallFlags::UP | WallFlags::DOWN
    }

    #[inline]
    pub fn from_bits(bits: u8) -> WallFlags {
        WallFlags(bits)
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every bit of `other` is also set here.
    #[inline]
    pub fn contains(self, other: WallFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn insert(&mut self, other: WallFlags) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn remove(&mut self, other: WallFlags) {
        self.0 &= !other.0;
    }

    /// Just the four structural walls, with any traversal marker masked out.
    #[inline]
    pub fn walls(self) -> WallFlags {
        self & WallFlags::all_walls()
    }

    /// The wall on the other side of a shared boundary: LEFT <-> RIGHT, UP <-> DOWN.
    ///
    /// Panics when `self` is not exactly one of the four walls (`VISITED`, empty or combined
    /// flags).
    pub fn opposite(self) -> WallFlags {
        match self {
            WallFlags::LEFT => WallFlags::RIGHT,
            WallFlags::RIGHT => WallFlags::LEFT,
            WallFlags::UP => WallFlags::DOWN,
            WallFlags::DOWN => WallFlags::UP,
            other => panic!("{:?} is not a single wall and has no opposite side", other),
        }
    }
}

impl BitOr for WallFlags {
    type Output = WallFlags;
    #[inline]
    fn bitor(self, rhs: WallFlags) -> WallFlags {
        WallFlags(self.0 | rhs.0)
    }
}

impl BitAnd for WallFlags {
    type Output = WallFlags;
    #[inline]
    fn bitand(self, rhs: WallFlags) -> WallFlags {
        WallFlags(self.0 & rhs.0)
    }
}

impl Not for WallFlags {
    type Output = WallFlags;
    #[inline]
    fn not(self) -> WallFlags {
        WallFlags(!self.0)
    }
}

impl From<WallFlags> for u8 {
    fn from(flags: WallFlags) -> u8 {
        flags.0
    }
}

impl fmt::Debug for WallFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(WallFlags, &str); 5] = [(WallFlags::LEFT, "LEFT"),
                                               (WallFlags::RIGHT, "RIGHT"),
                                               (WallFlags::UP, "UP"),
                                               (WallFlags::DOWN, "DOWN"),
                                               (WallFlags::VISITED, "VISITED")];
        let known = NAMES.iter().fold(WallFlags::empty(), |acc, &(flag, _)| acc | flag);
        let unknown_bits = self.0 & !known.0;

        let mut names = NAMES.iter()
            .filter(|&&(flag, _)| self.contains(flag))
            .map(|&(_, name)| name.to_string())
            .collect::<Vec<String>>();
        if unknown_bits != 0 {
            names.push(format!("{:#x}", unknown_bits));
        }

        if names.is_empty() {
            write!(f, "WallFlags(empty)")
        } else {
            write!(f, "WallFlags({})", names.join(" | "))
        }
    }
}
