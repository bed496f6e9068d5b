use std::fmt;

/// Result type for xjs-schema operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading or normalizing a status document
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// YAML parsing failed (includes missing required fields)
    Yaml(serde_yaml::Error),

    /// JSON parsing failed (includes missing required fields)
    Json(serde_json::Error),

    /// Document parsed but an entity matches none of the known shapes
    Schema {
        entity: &'static str,
        name: String,
        reason: String,
    },

    /// A `since` or controller timestamp did not parse
    Timestamp(xjs_types::Error),
}

impl Error {
    pub(crate) fn schema(entity: &'static str, name: &str, reason: impl Into<String>) -> Self {
        Error::Schema {
            entity,
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Yaml(err) => write!(f, "YAML error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Schema {
                entity,
                name,
                reason,
            } => write!(f, "Schema error in {} '{}': {}", entity, name, reason),
            Error::Timestamp(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Yaml(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Timestamp(err) => Some(err),
            Error::Schema { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Yaml(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<xjs_types::Error> for Error {
    fn from(err: xjs_types::Error) -> Self {
        Error::Timestamp(err)
    }
}
