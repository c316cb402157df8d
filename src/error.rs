use std::fmt;

//////////////////////////////////////////////////////////////////////////////

/// Errors at the input boundary: parsing names and loading configuration.
/// Visibility computations themselves never fail.
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Toml(toml::de::Error),
    UnknownDirection(String),
    UnknownShape(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "failed to read config: {e}"),
            Error::Toml(e) => write!(f, "invalid config: {e}"),
            Error::UnknownDirection(x) => write!(f, "unknown direction: {x:?}"),
            Error::UnknownShape(x) => write!(f, "unknown shape: {x:?}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Toml(e) => Some(e),
            Error::UnknownDirection(_) | Error::UnknownShape(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Toml(e)
    }
}
