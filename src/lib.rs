//! Recursive shadowcasting field-of-view for 2D grids.
//!
//! The caller owns the grid and supplies two callbacks through `Settings`:
//! an opacity test and a function applied to each visible tile.

mod base;
mod config;
mod direction;
mod error;
mod octant;
mod shadowcast;
mod shape;

pub use base::{clamp01, slope, Matrix, Point, EPSILON};
pub use config::Config;
pub use direction::Direction;
pub use error::Error;
pub use octant::Octant;
pub use shadowcast::Settings;
pub use shape::Shape;
