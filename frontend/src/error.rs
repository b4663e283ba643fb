use thiserror::Error;

/// Why a piece of input text was refused before any request was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please enter some text to analyse")]
    Empty,
    #[error("text must be at least 10 characters long")]
    TooShort,
    #[error("text must be less than 5000 characters")]
    TooLong,
}

impl ValidationError {
    /// Short machine-readable reason.
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::Empty => "empty",
            ValidationError::TooShort => "too short",
            ValidationError::TooLong => "too long",
        }
    }
}

/// Anything that stopped a prediction round trip from completing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Request timed out after {0} ms")]
    TimedOut(u64),
    #[error("Server error: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Malformed(String),
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("a prediction is already in progress")]
    Busy,
}
