use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Form element not found: #{id}")]
    MissingField { id: String },

    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed response body: {message}")]
    MalformedResponse { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 錯誤分類，決定 CLI 的退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Form,
    Network,
    Response,
    Configuration,
}

impl SubmitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SubmitError::MissingField { .. } => ErrorCategory::Form,
            SubmitError::Transport(_) => ErrorCategory::Network,
            SubmitError::HttpStatus { .. }
            | SubmitError::MalformedResponse { .. }
            | SubmitError::SerializationError(_) => ErrorCategory::Response,
            SubmitError::IoError(_)
            | SubmitError::ConfigError { .. }
            | SubmitError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Form => 1,
            ErrorCategory::Network | ErrorCategory::Response => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SubmitError::MissingField { id } => {
                format!("The form has no field with id '{}'", id)
            }
            SubmitError::Transport(e) if e.is_connect() => {
                "Could not connect to the book server".to_string()
            }
            SubmitError::Transport(_) => "The request to the book server failed".to_string(),
            SubmitError::HttpStatus { status, .. } => {
                format!("The book server answered with HTTP {}", status)
            }
            SubmitError::MalformedResponse { .. } | SubmitError::SerializationError(_) => {
                "The book server sent a response that could not be read".to_string()
            }
            SubmitError::IoError(e) => format!("File access failed: {}", e),
            SubmitError::ConfigError { message } => format!("Configuration problem: {}", message),
            SubmitError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SubmitError>;
