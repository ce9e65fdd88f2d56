use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Storage,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ArtError {
    pub fn config(message: impl Into<String>) -> Self {
        ArtError::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ArtError::IoError(_) => ErrorCategory::Storage,
            ArtError::SerializationError(_) => ErrorCategory::Serialization,
            ArtError::ConfigError { .. }
            | ArtError::ConfigValidationError { .. }
            | ArtError::InvalidConfigValueError { .. }
            | ArtError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ArtError::IoError(e) if e.kind() == std::io::ErrorKind::Interrupted => {
                ErrorSeverity::Medium
            }
            ArtError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ArtError::IoError(_) => {
                "Check that the output directory is writable and the disk is not full"
            }
            ArtError::SerializationError(_) => "Re-run the render; the index file could not be encoded",
            ArtError::ConfigError { .. } | ArtError::ConfigValidationError { .. } => {
                "Check the gallery manifest for TOML syntax errors"
            }
            ArtError::InvalidConfigValueError { .. } => {
                "Fix the highlighted value in the gallery manifest"
            }
            ArtError::MissingConfigError { .. } => "Add the missing field to the gallery manifest",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ArtError::IoError(e) => format!("Could not read or write a file: {}", e),
            ArtError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            ArtError::MissingConfigError { field } => format!("Setting '{}' is required", field),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ArtError>;
