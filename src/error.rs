//! Custom error types for Haven
//!
//! Two layers of failure exist. [`Rejection`] describes user input that the
//! calculators refuse to work with; it is expected, recoverable and never
//! shown to the user unless they ask. [`HavenError`] covers everything that
//! goes wrong below the calculators (files, JSON, configuration).

use thiserror::Error;

/// Reason an input was refused
///
/// Every calculator returns `Result<T, Rejection>` so callers can tell a
/// refused input apart from a successful calculation without relying on the
/// absence of a side effect.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Rejection {
    /// The raw text could not be parsed as a number
    #[error("{field}: '{input}' is not a number")]
    NotANumber { field: &'static str, input: String },

    /// NaN or infinite
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    /// Zero or negative where a positive value is required
    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    /// Negative where zero is allowed
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    /// Outside an explicit range
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Identifier that does not refer to a known item
    #[error("unknown {kind}: {id}")]
    UnknownItem { kind: &'static str, id: String },
}

impl Rejection {
    /// Name of the input that was refused
    pub fn field(&self) -> &'static str {
        match self {
            Self::NotANumber { field, .. }
            | Self::NotFinite { field }
            | Self::NotPositive { field, .. }
            | Self::Negative { field, .. }
            | Self::OutOfRange { field, .. } => field,
            Self::UnknownItem { kind, .. } => kind,
        }
    }
}

/// The main error type for Haven operations
#[derive(Error, Debug)]
pub enum HavenError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Input refused by a calculator or ledger
    #[error("Rejected: {0}")]
    Rejected(#[from] Rejection),
}

impl HavenError {
    /// Check if this error is an input rejection rather than a real failure
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Borrow the rejection, if this is one
    pub fn as_rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(r) => Some(r),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HavenError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HavenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Haven operations
pub type HavenResult<T> = Result<T, HavenError>;
