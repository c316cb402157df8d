use std::f64::consts::FRAC_PI_4;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::octant::Octant;

//////////////////////////////////////////////////////////////////////////////

/// A compass direction for `Settings::beam`. +x is east and +y is south.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    North,
    NorthEast,
}

impl Direction {
    /// In the order of increasing `angle()`.
    pub const ALL: [Direction; 8] = [
        Direction::East, Direction::SouthEast, Direction::South, Direction::SouthWest,
        Direction::West, Direction::NorthWest, Direction::North, Direction::NorthEast,
    ];

    /// Radians from +x toward +y, the frame used by `Settings::beam2`.
    pub fn angle(self) -> f64 {
        let index = Self::ALL.iter().position(|&x| x == self).unwrap_or_default();
        index as f64 * FRAC_PI_4
    }

    pub fn is_diagonal(self) -> bool {
        matches!(self, Direction::SouthEast | Direction::SouthWest |
                       Direction::NorthWest | Direction::NorthEast)
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::East => "east",
            Direction::SouthEast => "southeast",
            Direction::South => "south",
            Direction::SouthWest => "southwest",
            Direction::West => "west",
            Direction::NorthWest => "northwest",
            Direction::North => "north",
            Direction::NorthEast => "northeast",
        }
    }

    /// Octants in pairs, ordered by how far the beam must widen to reach
    /// them. For an axis direction, the first pair straddles the axis. For a
    /// diagonal, the first pair straddles the diagonal.
    pub(crate) fn beam_octants(self) -> [Octant; 8] {
        use crate::octant::Octant as O;
        match self {
            Direction::East => [O::ESE, O::ENE, O::SSE, O::NNE, O::SSW, O::NNW, O::WSW, O::WNW],
            Direction::West => [O::WSW, O::WNW, O::SSW, O::NNW, O::SSE, O::NNE, O::ESE, O::ENE],
            Direction::North => [O::NNE, O::NNW, O::WNW, O::ENE, O::WSW, O::ESE, O::SSW, O::SSE],
            Direction::South => [O::SSW, O::SSE, O::WSW, O::ESE, O::WNW, O::ENE, O::NNW, O::NNE],
            Direction::NorthEast => [O::ENE, O::NNE, O::NNW, O::ESE, O::WNW, O::SSE, O::WSW, O::SSW],
            Direction::NorthWest => [O::WNW, O::NNW, O::WSW, O::NNE, O::SSW, O::ENE, O::SSE, O::ESE],
            Direction::SouthEast => [O::ESE, O::SSE, O::SSW, O::ENE, O::WSW, O::NNE, O::WNW, O::NNW],
            Direction::SouthWest => [O::SSW, O::WSW, O::SSE, O::WNW, O::ESE, O::NNW, O::NNE, O::ENE],
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter().copied().find(|x| x.name() == s)
            .ok_or_else(|| Error::UnknownDirection(s.to_owned()))
    }
}

//////////////////////////////////////////////////////////////////////////////
