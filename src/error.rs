use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for exampatch operations
#[derive(Error, Debug)]
pub enum ExamPatchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{path:?} is not valid UTF-8 (invalid byte at offset {offset})")]
    Encoding { path: PathBuf, offset: usize },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration at {path:?}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration in {path:?}: {message}")]
    Invalid { path: PathBuf, message: String },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Result type alias for exampatch operations
pub type ExamPatchResult<T> = Result<T, ExamPatchError>;

/// Helper trait for adding context to errors
pub trait ErrorContext<T> {
    fn context<C>(self, context: C) -> ExamPatchResult<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    fn with_context<C, F>(self, f: F) -> ExamPatchResult<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T> ErrorContext<T> for Result<T, io::Error> {
    fn context<C>(self, context: C) -> ExamPatchResult<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| ExamPatchError::Io(io::Error::new(e.kind(), format!("{}: {}", context, e))))
    }

    fn with_context<C, F>(self, f: F) -> ExamPatchResult<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| ExamPatchError::Io(io::Error::new(e.kind(), format!("{}: {}", f(), e))))
    }
}

/// Prints a one-line suggestion matching the error kind.
pub fn print_hint(error: &ExamPatchError) {
    use colored::Colorize;

    match error {
        ExamPatchError::Io(err) if err.kind() == io::ErrorKind::PermissionDenied => {
            eprintln!("  {} Check that the page files are writable", "└".bright_cyan());
        }
        ExamPatchError::Encoding { path, .. } => {
            eprintln!("  {} Re-save {:?} as UTF-8 and run again", "└".bright_cyan(), path);
        }
        ExamPatchError::Config(ConfigError::Invalid { path, .. }) => {
            eprintln!("  {} Fix the TOML syntax in {:?}", "└".bright_cyan(), path);
            eprintln!("    Or run: exampatch init");
        }
        _ => {
            eprintln!("  {} Run with --verbose for more details", "└".bright_black());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_error_display() {
        let error = ExamPatchError::Encoding {
            path: PathBuf::from("schreiben4_b2.html"),
            offset: 17,
        };

        let display = format!("{}", error);
        assert!(display.contains("schreiben4_b2.html"));
        assert!(display.contains("offset 17"));
    }

    #[test]
    fn test_error_context() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let result: Result<(), io::Error> = Err(io_error);

        let contextualized = result.context("Failed to write page");
        let error = contextualized.unwrap_err();
        let display = format!("{}", error);
        assert!(display.contains("Failed to write page"));
        assert!(display.contains("permission denied"));

        match error {
            ExamPatchError::Io(err) => assert_eq!(err.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("Expected IO error, got {:?}", other),
        }
    }

    #[test]
    fn test_config_error_wraps() {
        let error: ExamPatchError = ConfigError::InvalidValue {
            field: "assets.script".to_string(),
            value: "".to_string(),
        }
        .into();

        let display = format!("{}", error);
        assert!(display.contains("Configuration error"));
        assert!(display.contains("assets.script"));
    }
}
