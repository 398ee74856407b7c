use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for cutpath operations
#[derive(Error, Diagnostic, Debug)]
pub enum CutError {
    #[error("Invalid parameter: {message}")]
    #[diagnostic(code(cutpath::invalid_parameter))]
    InvalidParameter {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Failed to write {}", path.display())]
    #[diagnostic(code(cutpath::output))]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(cutpath::io))]
    Io { path: PathBuf, message: String },

    #[error("Config error: {message}")]
    #[diagnostic(code(cutpath::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl CutError {
    /// Shorthand for an `InvalidParameter` error without help text.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
            help: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CutError>;
