use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AskError {
    #[error("Question file not found at '{}'", path.display())]
    QuestionFileNotFound { path: PathBuf },

    #[error("Could not read question file '{}': {source}", path.display())]
    QuestionFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("API request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Model '{model}' not found: {message}")]
    ModelNotFound { model: String, message: String },

    #[error("Inference service returned HTTP {status}: {message}")]
    ServiceError { status: u16, message: String },

    #[error("Malformed response from inference service: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

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
    Input,
    Service,
    Configuration,
    Output,
}

impl AskError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AskError::QuestionFileNotFound { .. } | AskError::QuestionFileRead { .. } => {
                ErrorCategory::Input
            }
            AskError::HttpError(_)
            | AskError::ModelNotFound { .. }
            | AskError::ServiceError { .. }
            | AskError::MalformedResponse(_) => ErrorCategory::Service,
            AskError::ConfigError { .. } | AskError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            AskError::IoError(_) => ErrorCategory::Output,
        }
    }

    /// Short message suitable for printing to a terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            AskError::HttpError(e) if e.is_connect() => {
                "Could not connect to the Ollama service".to_string()
            }
            AskError::ModelNotFound { model, .. } => {
                format!("Model '{}' is not available on the Ollama service", model)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AskError::QuestionFileNotFound { .. } => {
                "Check that --question-file points to an existing file"
            }
            AskError::QuestionFileRead { .. } => {
                "Check the file permissions and that the file is UTF-8 text"
            }
            AskError::HttpError(_) => "Start the service with `ollama serve` and check --host",
            AskError::ModelNotFound { .. } => "Pull the model first with `ollama pull <model>`",
            AskError::ServiceError { .. } | AskError::MalformedResponse(_) => {
                "Check the Ollama service logs"
            }
            AskError::ConfigError { .. } | AskError::InvalidConfigValueError { .. } => {
                "Run with --help to see the accepted options"
            }
            AskError::IoError(_) => "Check that standard output is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, AskError>;
