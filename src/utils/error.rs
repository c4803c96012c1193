use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolidError {
    #[error("{subject} does not support `{operation}`: {message}")]
    UnsupportedOperation {
        subject: &'static str,
        operation: &'static str,
        message: &'static str,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SolidError {
    pub fn unsupported(
        subject: &'static str,
        operation: &'static str,
        message: &'static str,
    ) -> Self {
        SolidError::UnsupportedOperation {
            subject,
            operation,
            message,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SolidError::UnsupportedOperation { .. } => ErrorSeverity::High,
            SolidError::ConfigError { .. } | SolidError::InvalidConfigValueError { .. } => {
                ErrorSeverity::Medium
            }
            SolidError::SerializationError(_) => ErrorSeverity::High,
            SolidError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SolidError::UnsupportedOperation {
                subject,
                operation,
                message,
            } => format!("{} was asked to {} but cannot: {}", subject, operation, message),
            SolidError::IoError(e) => format!("Could not write demonstration output: {}", e),
            SolidError::SerializationError(e) => format!("Could not serialize invoice: {}", e),
            SolidError::ConfigError { message } => format!("Configuration problem: {}", message),
            SolidError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Setting '{}' has invalid value '{}': {}", field, value, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SolidError::UnsupportedOperation { .. } => {
                "The legacy variant fails on purpose; run with --variant fixed to see the fix"
            }
            SolidError::IoError(_) => "Check that stdout is writable",
            SolidError::SerializationError(_) => "Check the invoice values in the settings file",
            SolidError::ConfigError { .. } => "Make sure the config file exists and is valid TOML",
            SolidError::InvalidConfigValueError { .. } => "Fix the reported setting and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, SolidError>;
