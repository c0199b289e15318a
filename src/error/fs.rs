//! File system errors

use super::RootsyncError;

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> RootsyncError {
    RootsyncError::IoError {
        message: message.into(),
    }
}
