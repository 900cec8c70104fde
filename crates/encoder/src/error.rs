use thiserror::Error;

/// Result type for encoder operations
pub type Result<T> = std::result::Result<T, SoundexError>;

/// Errors that can occur while encoding a word
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SoundexError {
    /// A precondition on the input was violated (currently: empty word)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl SoundexError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Error returned when an empty word is passed to the encoder
    pub(crate) fn empty_word() -> Self {
        Self::invalid_argument("word must be a non-empty string")
    }
}
