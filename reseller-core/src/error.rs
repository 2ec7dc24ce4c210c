use std::fmt;
use std::path::PathBuf;

/// Failure to obtain a usable reseller dataset
#[derive(Debug)]
pub enum LoadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
    /// The document does not match the reseller JSON Schema
    Schema(Vec<String>),
    /// Records parsed but failed record-level validation
    Validation(Vec<String>),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "unable to read '{}': {}", path.display(), source)
            }
            LoadError::Json(err) => write!(f, "invalid reseller JSON: {}", err),
            LoadError::Schema(errors) => {
                write!(f, "Schema validation failed:\n{}", errors.join("\n"))
            }
            LoadError::Validation(errors) => {
                write!(f, "Validation failed:\n{}", errors.join("\n"))
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Json(err) => Some(err),
            LoadError::Schema(_) | LoadError::Validation(_) => None,
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
