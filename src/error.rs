use std::fmt;
use std::io;

/// Failures the palette tool can hit while emitting output.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Serialize(toml::ser::Error),
    Png(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Serialize(e) => write!(f, "Serialize Error: {}", e),
            Error::Png(e) => write!(f, "PNG Error: {}", e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Serialize(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
