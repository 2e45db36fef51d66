//! Error types for strata
//!
//! Every failure is terminal for the resolution call that produced it. Errors
//! carry a kind the caller can match on plus an optional help message.

use std::fmt;

/// Result type alias for strata operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for strata operations
#[derive(Debug, Clone)]
pub struct Error {
    /// The kind of error that occurred
    pub kind: ErrorKind,
    /// Actionable help message
    pub help: Option<String>,
    /// Underlying cause (as string for Clone compatibility)
    pub cause: Option<String>,
}

/// Categories of errors that can occur
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// A `${...}` span did not match any recognized function shape
    #[error("Invalid interpolation syntax: {span}")]
    InvalidInterpolationSyntax { span: String },
    /// Function arguments failed strict parsing
    #[error("Invalid parameters. Expected syntax of the form '${{get_env(NAME,\"default\")}}', but got '{params}'")]
    InvalidFunctionParameters { params: String },
    /// Walked up to the filesystem root without finding a parent config
    #[error("Could not find a parent config file in any of the parent folders of {path}")]
    ParentConfigNotFound { path: String },
    /// I/O error (working directory unavailable, etc.)
    #[error("I/O error")]
    Io,
}

impl Error {
    fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            help: None,
            cause: None,
        }
    }

    /// Create an invalid interpolation syntax error for the offending span
    pub fn invalid_interpolation_syntax(span: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInterpolationSyntax { span: span.into() }).with_help(
            "Use ${path_relative_to_include()}, ${find_in_parent_folders()} or ${get_env(NAME,'default')}",
        )
    }

    /// Create an invalid function parameters error carrying the raw argument string
    pub fn invalid_function_parameters(params: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidFunctionParameters {
            params: params.into(),
        })
    }

    /// Create a parent config not found error for the config that started the search
    pub fn parent_config_not_found(path: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParentConfigNotFound { path: path.into() })
    }

    /// Create an I/O error
    pub fn io(err: std::io::Error) -> Self {
        Self {
            kind: ErrorKind::Io,
            help: None,
            cause: Some(err.to_string()),
        }
    }

    /// Add help message to the error
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if let Some(cause) = &self.cause {
            write!(f, "\n  {}", cause)?;
        }

        if let Some(help) = &self.help {
            write!(f, "\n  Help: {}", help)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_interpolation_syntax_display() {
        let err = Error::invalid_interpolation_syntax("${unknown}");
        let display = format!("{}", err);

        assert!(display.contains("Invalid interpolation syntax: ${unknown}"));
        assert!(display.contains("Help:"));
        assert!(display.contains("${find_in_parent_folders()}"));
    }

    #[test]
    fn test_invalid_function_parameters_keeps_raw_args() {
        let err = Error::invalid_function_parameters("Invalid Parameters");

        assert_eq!(
            err.kind,
            ErrorKind::InvalidFunctionParameters {
                params: "Invalid Parameters".into()
            }
        );
        assert!(err.to_string().contains("but got 'Invalid Parameters'"));
    }

    #[test]
    fn test_parent_config_not_found_display() {
        let err = Error::parent_config_not_found("/fake/path");
        let display = format!("{}", err);

        assert!(display.contains("parent folders of /fake/path"));
        assert!(err.help.is_none());
    }

    #[test]
    fn test_io_error_keeps_cause() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "cwd is gone").into();

        assert_eq!(err.kind, ErrorKind::Io);
        assert!(err.to_string().contains("cwd is gone"));
    }

    #[test]
    fn test_with_help() {
        let err = Error::parent_config_not_found("/x").with_help("Add a .terragrunt file");
        let display = format!("{}", err);

        assert!(display.contains("Help: Add a .terragrunt file"));
    }
}
