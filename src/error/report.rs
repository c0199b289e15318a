//! Resolution report errors

use super::RootsyncError;

path_error_constructors! {
    /// Report file missing or unreadable
    read_failed => ReportReadFailed,
    /// Report is neither valid YAML nor, for `.json` files, valid JSON
    parse_failed => ReportParseFailed,
}

/// Requested module has no entry in the report or library table
pub fn module_not_found(name: impl Into<String>) -> RootsyncError {
    RootsyncError::ModuleNotFound { name: name.into() }
}
