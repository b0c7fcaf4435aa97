use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid date '{value}': {reason}")]
    InvalidDateError { value: String, reason: String },

    #[error("Invalid encoding: {message}")]
    InvalidEncodingError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed JSON, missing fields or a bad date string.
    Format,
    /// Reading or writing the store failed.
    Io,
    Config,
}

impl ContactError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContactError::IoError(_) => ErrorCategory::Io,
            ContactError::SerializationError(_)
            | ContactError::InvalidDateError { .. }
            | ContactError::InvalidEncodingError { .. } => ErrorCategory::Format,
            ContactError::ConfigError { .. } | ContactError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    pub fn is_format(&self) -> bool {
        self.category() == ErrorCategory::Format
    }

    pub fn is_io(&self) -> bool {
        self.category() == ErrorCategory::Io
    }

    /// Short message for the shell; details stay in the logs.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ContactError::IoError(e) => format!("Could not access the contacts file: {}", e),
            ContactError::SerializationError(e) => {
                format!("The contacts file is not valid contact JSON: {}", e)
            }
            ContactError::InvalidDateError { value, .. } => {
                format!("'{}' is not a valid date, expected dd.MM.yyyy", value)
            }
            ContactError::InvalidEncodingError { .. } => {
                "The contacts file is not valid UTF-8 text".to_string()
            }
            ContactError::ConfigError { message } => format!("Configuration problem: {}", message),
            ContactError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ContactError>;
