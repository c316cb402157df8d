use std::path::Path;

use serde::Deserialize;

use crate::error::Error;
use crate::shape::Shape;

//////////////////////////////////////////////////////////////////////////////

/// The data half of `Settings`: everything but the two callbacks.
///
/// ```toml
/// shape = "octagon"
/// opaque_apply = true
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub shape: Shape,
    pub opaque_apply: bool,
}

impl Config {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Error> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let s = std::fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

//////////////////////////////////////////////////////////////////////////////
