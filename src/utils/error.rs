use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreeningError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("API request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unexpected response from {service}: {message}")]
    UnexpectedResponse { service: String, message: String },

    #[error("{service} returned HTTP {status}: {message}")]
    ServiceError {
        service: String,
        status: u16,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ScreeningError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::Input,
            Self::HttpError(_) | Self::UnexpectedResponse { .. } | Self::ServiceError { .. } => {
                ErrorCategory::Network
            }
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidInput { message } => format!("The value could not be evaluated: {}", message),
            Self::HttpError(_) => "Could not reach the remote service".to_string(),
            Self::ServiceError { service, status, .. } => {
                format!("The {} service failed (HTTP {})", service, status)
            }
            Self::UnexpectedResponse { service, .. } => {
                format!("The {} service returned an unreadable answer", service)
            }
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => format!("Configuration problem: {}", self),
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::SerializationError(e) => format!("Data could not be encoded: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "Provide a finite numeric value",
            Self::HttpError(_) => "Check the network connection and the service URL",
            Self::ServiceError { .. } => "Try again later; the service may be starting up",
            Self::UnexpectedResponse { .. } => "Verify the service URL points to the right API",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags"
            }
            Self::MissingConfigError { .. } => {
                "Add the missing setting to the configuration file or environment"
            }
            Self::IoError(_) => "Check that the path exists and is writable",
            Self::SerializationError(_) => "Inspect the stored preference file for corruption",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScreeningError>;
