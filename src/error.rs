use std::fmt;

use crate::registry::SpriteHandle;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Error {
    /// A NaN or infinite coordinate was refused
    InvalidCoordinate { x: f64, y: f64 },
    /// The handle was never issued, or its sprite has been removed
    UnknownHandle(SpriteHandle)
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCoordinate { x, y } => {
                write!(f, "invalid coordinate ({}, {}): both components must be finite", x, y)
            },
            Error::UnknownHandle(handle) => {
                write!(f, "no sprite is registered under {}", handle)
            }
        }
    }
}

impl std::error::Error for Error {}
