use thiserror::Error;

/// Correlator writer error types
#[derive(Error, Debug)]
pub enum WriterError {
    #[error("Format error: {0}")]
    Format(String),

    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("{0} is not a valid command!")]
    UnknownCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WriterError {
    /// Whether an interactive session may continue after this error
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            WriterError::Format(_) | WriterError::MissingArgument(_)
        )
    }
}

/// Result type for correlator writer operations
pub type Result<T> = std::result::Result<T, WriterError>;
