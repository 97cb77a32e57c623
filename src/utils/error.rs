use thiserror::Error;

#[derive(Error, Debug)]
pub enum CpfError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input error: {message}")]
    InputError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Serialization,
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

impl CpfError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CpfError::IoError(_) => ErrorCategory::Io,
            CpfError::SerializationError(_) => ErrorCategory::Serialization,
            CpfError::ConfigError { .. }
            | CpfError::ConfigValidationError { .. }
            | CpfError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CpfError::InputError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Serialization | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CpfError::IoError(e) => format!("Could not read or write a file: {}", e),
            CpfError::SerializationError(e) => format!("Invalid JSON: {}", e),
            CpfError::ConfigError { message } => format!("Configuration problem: {}", message),
            CpfError::ConfigValidationError { field, message } => {
                format!("Setting '{}' is invalid: {}", field, message)
            }
            CpfError::InvalidConfigValueError { field, value, reason } => {
                format!("Setting '{}' has invalid value '{}': {}", field, value, reason)
            }
            CpfError::InputError { message } => format!("Could not read input: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the paths exist and are readable/writable",
            ErrorCategory::Serialization => {
                "Make sure the request file is a JSON object like {\"cpf\": \"123,456\"}"
            }
            ErrorCategory::Configuration => "Review the command line flags and the TOML config file",
            ErrorCategory::Input => "Pass the list with --cpf, --input-file, --request-file or stdin",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CpfError>;
