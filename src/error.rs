use std::fmt;

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Main error type for the report crate
#[derive(Debug, Clone)]
pub enum ReportError {
    /// No stored record exists for the requested experiment
    MissingExperiment {
        name: String,
        searched: String,
    },

    /// Stored record does not match the arity convention for its name
    MalformedRecord {
        name: String,
        reason: String,
    },

    /// IO errors (file operations)
    IoError(String),

    /// Serialization/deserialization errors
    SerializationError(String),

    /// Chart drawing errors
    RenderError(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::MissingExperiment { name, searched } => {
                write!(f, "No record for experiment '{}' under {}", name, searched)
            }
            ReportError::MalformedRecord { name, reason } => {
                write!(f, "Malformed record '{}': {}", name, reason)
            }
            ReportError::IoError(msg) => write!(f, "IO error: {}", msg),
            ReportError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            ReportError::RenderError(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for ReportError {}

// Conversion from std::io::Error
impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::IoError(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        ReportError::SerializationError(err.to_string())
    }
}

// Conversion from bincode::Error
impl From<bincode::Error> for ReportError {
    fn from(err: bincode::Error) -> Self {
        ReportError::SerializationError(err.to_string())
    }
}

// Conversion from plotters drawing errors, so chart code can use `?` directly
impl<E: std::error::Error + Send + Sync> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for ReportError
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        ReportError::RenderError(err.to_string())
    }
}

// Helper functions for common error patterns
impl ReportError {
    pub fn malformed_record<S: Into<String>>(name: S, reason: S) -> Self {
        ReportError::MalformedRecord {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
