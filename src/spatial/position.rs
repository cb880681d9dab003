//! Grid coordinates and the four axis-aligned neighbor directions

use std::fmt;

/// Integer grid coordinate, `x` along the width and `y` along the height
///
/// Ordering is lexicographic on `(x, y)`, which is the tie-break order the
/// scheduler relies on when several candidates share a cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl Position {
    /// Create a position from its components
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent position on the given side
    #[must_use]
    pub const fn neighbor(self, side: Side) -> Self {
        let (dx, dy) = side.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// All four 4-connected neighbors, in [`Side::ALL`] order
    pub fn neighbors(self) -> impl Iterator<Item = (Side, Self)> {
        Side::ALL.into_iter().map(move |side| (side, self.neighbor(side)))
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Relative direction from a position to one of its 4-connected neighbors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    /// Offset `(-1, 0)`
    Left,
    /// Offset `(1, 0)`
    Right,
    /// Offset `(0, -1)`
    Top,
    /// Offset `(0, 1)`
    Bottom,
}

impl Side {
    /// Every side, in neighbor-map order
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Relative `(dx, dy)` offset of the neighbor on this side
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Top => (0, -1),
            Self::Bottom => (0, 1),
        }
    }

    /// The side a neighbor uses to face back
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }

    /// Stable index into per-side arrays
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Top => 2,
            Self::Bottom => 3,
        }
    }
}
