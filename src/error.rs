pub use masterror::{AppError, AppResult};

use crate::scanner::Position;

/// Create file read error
pub fn file_read_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to read file '{}': {}", path, source))
}

/// Create malformed file error pointing at the offending directive
pub fn malformed_file_error(reason: impl Into<String>, position: Position) -> AppError {
    AppError::bad_request(format!(
        "Malformed query file at {}: {}",
        position,
        reason.into()
    ))
}

/// Create config error
pub fn config_error(message: impl Into<String>) -> AppError {
    AppError::bad_request(message.into())
}

/// Create internal error for states the directive grammar makes unreachable
pub fn internal_state_error(message: impl Into<String>) -> AppError {
    AppError::internal(message.into())
}
