//! Log output for the quiz.
//!
//! The terminal belongs to the UI, so events go to a file instead.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::QuizError;

const LOG_FILE_NAME: &str = "timed-quiz.log";

/// Where logs go when no path is given on the command line.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Installs the global subscriber, appending to `path`.
///
/// `filter` uses `EnvFilter` directive syntax, e.g. `info` or
/// `timed_quiz=debug`.
pub fn init(path: &Path, filter: &str) -> Result<(), QuizError> {
    let filter = EnvFilter::try_new(filter)
        .map_err(|e| QuizError::Logging(format!("invalid log filter {filter:?}: {e}")))?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| QuizError::Logging(format!("cannot open {}: {e}", path.display())))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_line_number(true)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| QuizError::Logging(e.to_string()))
}
