use std::fmt;

/// Result type for xjs-engine operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Reading or normalizing a document failed
    Schema(xjs_schema::Error),

    /// The revision lookup collaborator failed
    Lookup(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Schema(err) => write!(f, "{}", err),
            Error::Lookup(msg) => write!(f, "Revision lookup failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Schema(err) => Some(err),
            Error::Lookup(_) => None,
        }
    }
}

impl From<xjs_schema::Error> for Error {
    fn from(err: xjs_schema::Error) -> Self {
        Error::Schema(err)
    }
}
