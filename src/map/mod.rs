//! Ordered key-value map layered over an ordered tree.

mod keyed_map;

pub use self::keyed_map::KeyedMap;

use std::error;
use std::fmt;
use std::result;

/// Convenience `Error` enum for `map`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A read-only lookup was made for a key that is not in the map.
    NotFound,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotFound => write!(f, "key not found in map"),
        }
    }
}

/// Convenience `Result` type for `map`.
pub type Result<T> = result::Result<T, Error>;
