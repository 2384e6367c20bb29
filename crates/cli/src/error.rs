use std::fmt::{self, Display};
use std::io;

use derive_more::From;

/// Failure that ends a CLI run.
///
/// Rejected graph operations and malformed menu input are not errors here;
/// the session reports them and keeps going.
#[derive(Debug, From)]
pub enum Error {
    /// Reading input or writing output failed.
    Io(io::Error),
    /// A result could not be encoded as JSON.
    Json(serde_json::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "i/o error: {e}"),
            Self::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}
