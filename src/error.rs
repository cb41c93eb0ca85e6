//! Error type for running the quiz.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    /// Terminal setup, drawing or event reading failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// The log file could not be opened or the subscriber installed.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
