//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No corpus file matched the input patterns
    NoInputFiles(String),
    /// A custom pause-mark list could not be used
    InvalidMarks(String),
    /// Configuration error
    ConfigError(String),
    /// Analysis error from the engine
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInputFiles(patterns) => {
                write!(f, "No files found matching the provided patterns: {patterns}")
            }
            CliError::InvalidMarks(msg) => write!(f, "Invalid pause marks: {msg}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_input_files_display() {
        let error = CliError::NoInputFiles("quran/*.json".to_string());
        assert_eq!(
            error.to_string(),
            "No files found matching the provided patterns: quran/*.json"
        );
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown rule: idgham".to_string());
        assert_eq!(error.to_string(), "Configuration error: unknown rule: idgham");
    }

    #[test]
    fn test_error_converts_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::InvalidMarks("empty list".to_string()).into());
        let error = failure.unwrap_err();
        assert!(error.downcast_ref::<CliError>().is_some());
        assert_eq!(error.to_string(), "Invalid pause marks: empty list");
    }
}
