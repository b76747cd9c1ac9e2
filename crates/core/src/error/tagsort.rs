/// Unified error type for tagsort
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagsortError {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Parsing errors
    #[error("Parse error: {0}")]
    Parse(String),

    // Configuration errors
    #[error("Missing required input: {0}")]
    MissingInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Generic error for compatibility
    #[error("{0}")]
    Other(String),
}

/// Result type alias using TagsortError
pub type Result<T> = std::result::Result<T, TagsortError>;

impl TagsortError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a missing input error
    pub fn missing_input(name: impl Into<String>) -> Self {
        Self::MissingInput(name.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

impl From<String> for TagsortError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}

impl From<&str> for TagsortError {
    fn from(msg: &str) -> Self {
        Self::Other(msg.to_string())
    }
}

impl From<serde_json::Error> for TagsortError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

// A bad --filter pattern is a configuration problem, not a parse failure of the input
impl From<regex::Error> for TagsortError {
    fn from(err: regex::Error) -> Self {
        Self::InvalidConfig(format!("invalid filter pattern: {err}"))
    }
}
