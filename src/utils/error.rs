use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown currency: {code}")]
    UnknownCurrency { code: String },

    #[error("Unknown stop filter: {name}")]
    UnknownStopFlag { name: String },

    #[error("Invalid ticket #{index}: {reason}")]
    InvalidTicket { index: usize, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BoardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BoardError::IoError(_) => ErrorCategory::Io,
            BoardError::SerializationError(_)
            | BoardError::CsvError(_)
            | BoardError::InvalidTicket { .. } => ErrorCategory::Data,
            BoardError::ConfigValidationError { .. }
            | BoardError::InvalidConfigValueError { .. }
            | BoardError::MissingConfigError { .. } => ErrorCategory::Configuration,
            BoardError::UnknownCurrency { .. } | BoardError::UnknownStopFlag { .. } => {
                ErrorCategory::Input
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BoardError::IoError(_) => "Check that the tickets file exists and is readable",
            BoardError::SerializationError(_) => {
                "Make sure the tickets file is JSON shaped like {\"tickets\": [...]}"
            }
            BoardError::CsvError(_) => "Try another output format such as --format text",
            BoardError::ConfigValidationError { .. } => "Fix the TOML syntax in the config file",
            BoardError::InvalidConfigValueError { .. } => {
                "Correct the highlighted value in the config file or command line"
            }
            BoardError::MissingConfigError { .. } => {
                "Pass --tickets or set data.tickets_path in the config file"
            }
            BoardError::UnknownCurrency { .. } => "Use one of RUB, USD or EUR",
            BoardError::UnknownStopFlag { .. } => {
                "Use all, nonStop, oneStop, twoStops or threeStops"
            }
            BoardError::InvalidTicket { .. } => {
                "Fix the ticket record or run without data validation"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BoardError::IoError(e) => format!("Could not read input: {}", e),
            BoardError::SerializationError(e) => format!("Tickets file is not valid: {}", e),
            BoardError::InvalidTicket { index, reason } => {
                format!("Ticket #{} is malformed: {}", index, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_follows_category() {
        let err = BoardError::UnknownCurrency {
            code: "GBP".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);

        let err = BoardError::MissingConfigError {
            field: "data.tickets_path".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("data.tickets_path"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: BoardError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().contains("gone"));
    }
}
