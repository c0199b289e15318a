//! Error types and handling for rootsync
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Registration itself never fails; these errors cover the surfaces around it:
//! - [`config`]: Configuration errors
//! - [`report`]: Resolution report errors
//! - [`library`]: Library table errors
//! - [`fs`]: File system errors

/// Generates `fn(path, reason) -> RootsyncError` constructors for the
/// variants that carry a file path and a failure reason.
macro_rules! path_error_constructors {
    ($($(#[$meta:meta])* $name:ident => $variant:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(
                path: impl Into<String>,
                reason: impl Into<String>,
            ) -> super::RootsyncError {
                super::RootsyncError::$variant {
                    path: path.into(),
                    reason: reason.into(),
                }
            }
        )+
    };
}

pub mod config;
pub mod fs;
pub mod library;
pub mod report;

pub use config::{
    invalid as config_invalid, not_found as config_not_found, parse_failed as config_parse_failed,
    read_failed as config_read_failed,
};
pub use fs::io_error;
pub use library::{read_failed as library_read_failed, write_failed as library_write_failed};
pub use report::{
    module_not_found, parse_failed as report_parse_failed, read_failed as report_read_failed,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for rootsync operations
#[derive(Error, Diagnostic, Debug)]
pub enum RootsyncError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(rootsync::config::not_found),
        help("Pass an existing file with --config or unset ROOTSYNC_CONFIG")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(rootsync::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(rootsync::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(rootsync::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // Resolution report errors
    #[error("Failed to read resolution report: {path}")]
    #[diagnostic(
        code(rootsync::report::read_failed),
        help("Check that the resolver wrote its report to this location")
    )]
    ReportReadFailed { path: String, reason: String },

    #[error("Failed to parse resolution report: {path}: {reason}")]
    #[diagnostic(
        code(rootsync::report::parse_failed),
        help("Reports must be YAML (.yaml, .yml) or JSON (.json)")
    )]
    ReportParseFailed { path: String, reason: String },

    #[error("Module '{name}' not found")]
    #[diagnostic(
        code(rootsync::report::module_not_found),
        help("Module names are case-sensitive")
    )]
    ModuleNotFound { name: String },

    // Library table errors
    #[error("Failed to read library table: {path}: {reason}")]
    #[diagnostic(code(rootsync::library::read_failed))]
    LibraryReadFailed { path: String, reason: String },

    #[error("Failed to write library table: {path}: {reason}")]
    #[diagnostic(code(rootsync::library::write_failed))]
    LibraryWriteFailed { path: String, reason: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(rootsync::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for RootsyncError {
    fn from(err: std::io::Error) -> Self {
        RootsyncError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for RootsyncError {
    fn from(err: serde_yaml::Error) -> Self {
        RootsyncError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, RootsyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_code() {
        let err = config_invalid("duplicate type");
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("rootsync::config::invalid".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RootsyncError = io_err.into();
        assert!(matches!(err, RootsyncError::IoError { .. }));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let parse_result: std::result::Result<serde_yaml::Value, _> =
            serde_yaml::from_str("invalid: yaml: content: [unclosed");
        let err: RootsyncError = parse_result.unwrap_err().into();
        assert!(matches!(err, RootsyncError::ConfigParseFailed { .. }));
    }

    test_error_contains!(
        test_config_not_found,
        config_not_found("/etc/rootsync.yaml"),
        "Configuration file not found",
        "/etc/rootsync.yaml"
    );

    test_error_contains!(
        test_config_parse_failed,
        config_parse_failed("rootsync.yaml", "bad indent"),
        "Failed to parse configuration file",
        "bad indent"
    );

    test_error_contains!(
        test_config_read_failed,
        config_read_failed("rootsync.yaml", "permission denied"),
        "Failed to read configuration file"
    );

    test_error_contains!(
        test_report_read_failed,
        report_read_failed("report.yaml", "no such file"),
        "Failed to read resolution report",
        "report.yaml"
    );

    test_error_contains!(
        test_report_parse_failed,
        report_parse_failed("report.json", "expected value"),
        "Failed to parse resolution report",
        "expected value"
    );

    test_error_contains!(
        test_module_not_found,
        module_not_found("app"),
        "Module 'app' not found"
    );

    test_error_contains!(
        test_library_read_failed,
        library_read_failed("rootsync.library.yaml", "corrupt"),
        "Failed to read library table"
    );

    test_error_contains!(
        test_library_write_failed,
        library_write_failed("rootsync.library.yaml", "disk full"),
        "Failed to write library table",
        "disk full"
    );

    test_error_contains!(test_io_error, io_error("some error"), "IO error");
}
