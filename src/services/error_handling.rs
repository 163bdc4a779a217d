use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors surfaced by the board. Empty input and lookup misses are not
/// errors; they are silent no-ops.
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Storage is unavailable: {reason}")]
    StorageUnavailable { reason: String },

    #[error("Failed to read key '{key}': {message}")]
    Read { key: String, message: String },

    #[error("Failed to write key '{key}': {message}")]
    Write { key: String, message: String },

    #[error("Failed to serialize task list")]
    Serialize(#[from] serde_json::Error),
}

impl BoardError {
    pub fn read(key: &str, message: impl ToString) -> Self {
        BoardError::Read {
            key: key.to_string(),
            message: message.to_string(),
        }
    }

    pub fn write(key: &str, message: impl ToString) -> Self {
        BoardError::Write {
            key: key.to_string(),
            message: message.to_string(),
        }
    }
}

pub type Result<T, E = BoardError> = std::result::Result<T, E>;

/// Structured logging helpers
pub struct LogHelper;

impl LogHelper {
    pub fn log_mutation(operation: &str, text: &str, applied: bool) {
        if applied {
            info!(operation = %operation, text = %text, "Task list updated");
        } else {
            debug!(operation = %operation, text = %text, "Mutation skipped");
        }
    }

    pub fn log_save_failure(operation: &str, error: &BoardError) {
        warn!(operation = %operation, error = %error, "Failed to persist task list");
    }
}
