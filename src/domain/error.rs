use std::io;

use thiserror::Error;

use super::generation::GenerationError;
use super::profile::ValidationError;
use super::prompt::PromptError;

/// Library-wide error type for dietplan operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Endpoint, credentials or model could not be set up. Fatal at startup.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A submitted field violated its bounds or option set.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The remote generation call failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// The prompt template is defective.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// Interactive input could not be collected.
    #[error("Input failed: {0}")]
    Input(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Whether a session can keep accepting submissions after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Validation(_) | AppError::Generation(_))
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Configuration(_) | AppError::Prompt(_) => 2,
            AppError::Io(_) | AppError::Validation(_) | AppError::Generation(_) | AppError::Input(_) => 1,
        }
    }
}
