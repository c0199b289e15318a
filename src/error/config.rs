//! Configuration errors

use super::RootsyncError;

path_error_constructors! {
    /// `rootsync.yaml` exists but is not a valid configuration document
    parse_failed => ConfigParseFailed,
    /// `rootsync.yaml` exists but could not be read
    read_failed => ConfigReadFailed,
}

/// An explicitly requested configuration file does not exist
pub fn not_found(path: impl Into<String>) -> RootsyncError {
    RootsyncError::ConfigNotFound { path: path.into() }
}

/// Parsed configuration that fails validation
pub fn invalid(message: impl Into<String>) -> RootsyncError {
    RootsyncError::ConfigInvalid {
        message: message.into(),
    }
}
