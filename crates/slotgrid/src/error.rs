//! Error types for the grid widget.

/// Result type alias for grid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the grid widget.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transition shorthand parsing error.
    #[error("invalid transition '{input}': {message}")]
    Parse { input: String, message: String },

    /// Unknown transition property keyword.
    #[error("unknown transition property '{name}'")]
    UnknownProperty { name: String },

    /// Unknown timing function keyword.
    #[error("unknown timing function '{name}'")]
    UnknownTiming { name: String },

    /// Layout options hold a value the grid cannot lay out with.
    #[error("invalid layout option {field} = {value}")]
    InvalidOptions { field: &'static str, value: f32 },
}

impl Error {
    /// Create a shorthand parse error.
    pub fn parse(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create an unknown-property error.
    pub fn unknown_property(name: impl Into<String>) -> Self {
        Self::UnknownProperty { name: name.into() }
    }

    /// Create an unknown-timing error.
    pub fn unknown_timing(name: impl Into<String>) -> Self {
        Self::UnknownTiming { name: name.into() }
    }

    /// Create an invalid-options error.
    pub fn invalid_options(field: &'static str, value: f32) -> Self {
        Self::InvalidOptions { field, value }
    }
}
