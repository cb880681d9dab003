use rand::Rng;
use std::fmt;
use std::str::FromStr;

use crate::io::error::AssemblyError;

/// Quarter-turn orientation of a patch
///
/// The four values form a cyclic group: stepping clockwise four times from
/// any orientation returns to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Orientation {
    /// No rotation
    #[default]
    Up,
    /// One clockwise quarter turn
    Right,
    /// Half turn
    Down,
    /// Three clockwise quarter turns
    Left,
}

impl Orientation {
    /// Every orientation in rotation-index order
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Number of clockwise quarter turns this orientation applies
    pub const fn rotation_index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Left => 3,
        }
    }

    /// Orientation for a number of clockwise quarter turns
    ///
    /// # Errors
    ///
    /// Returns `InvalidOrientation` for any index above 3
    pub fn from_rotation_index(index: usize) -> crate::io::error::Result<Self> {
        match index {
            0 => Ok(Self::Up),
            1 => Ok(Self::Right),
            2 => Ok(Self::Down),
            3 => Ok(Self::Left),
            _ => Err(AssemblyError::InvalidOrientation {
                value: index.to_string(),
            }),
        }
    }

    /// The orientation one quarter turn further clockwise
    #[must_use]
    pub const fn clockwise(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }

    /// All four orientations starting from this one, stepping clockwise
    pub const fn cycle_from(self) -> [Self; 4] {
        let second = self.clockwise();
        let third = second.clockwise();
        [self, second, third, third.clockwise()]
    }

    /// Uniformly random orientation
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        match rng.random_range(0..4_u8) {
            0 => Self::Up,
            1 => Self::Right,
            2 => Self::Down,
            _ => Self::Left,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}

impl FromStr for Orientation {
    type Err = AssemblyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "right" => Ok(Self::Right),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            _ => Err(AssemblyError::InvalidOrientation {
                value: value.to_string(),
            }),
        }
    }
}

impl TryFrom<u8> for Orientation {
    type Error = AssemblyError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_rotation_index(usize::from(index))
    }
}
