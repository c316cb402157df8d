use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;

//////////////////////////////////////////////////////////////////////////////

/// The silhouette of a field of view. Only changes how far each column's
/// row range extends, never the shadowcasting itself.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Circle,
    Octagon,
}

impl Shape {
    /// The largest row offset visible in column `dx`. Requires dx <= radius.
    #[inline(always)]
    pub fn max_row(self, dx: i32, radius: i32) -> i32 {
        debug_assert!(0 <= dx && dx <= radius);
        match self {
            Shape::Circle => {
                let (dx, radius) = (dx as i64, radius as i64);
                ((radius * radius - dx * dx) as f64).sqrt().floor() as i32
            }
            Shape::Octagon => {
                let rows = (radius as i64 - dx as i64) * 2;
                rows.min(i32::MAX as i64) as i32
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Octagon => "octagon",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(Shape::Circle),
            "octagon" => Ok(Shape::Octagon),
            _ => Err(Error::UnknownShape(s.to_owned())),
        }
    }
}

//////////////////////////////////////////////////////////////////////////////
