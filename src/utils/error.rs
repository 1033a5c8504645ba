use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Extraction failed: {message}")]
    ExtractionError { message: String },

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

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Parsing,
    Configuration,
    Processing,
}

impl SummaryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) => ErrorCategory::Network,
            Self::IoError(_) | Self::ZipError(_) => ErrorCategory::Io,
            Self::SerializationError(_) | Self::CsvError(_) | Self::ExtractionError { .. } => {
                ErrorCategory::Parsing
            }
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ApiError(_) => ErrorSeverity::Medium,
            Self::IoError(_) | Self::ZipError(_) => ErrorSeverity::Critical,
            Self::SerializationError(_) | Self::CsvError(_) | Self::ExtractionError { .. } => {
                ErrorSeverity::High
            }
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::High,
            Self::ProcessingError { .. } => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(_) => {
                "Could not reach the inference endpoint. Is the model server running?".to_string()
            }
            Self::ExtractionError { message } => {
                format!("The model response could not be interpreted: {}", message)
            }
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem with '{}': {}", field, reason)
            }
            Self::MissingConfigError { field } => {
                format!("Required configuration '{}' was not provided", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Network => {
                "Check that the endpoint URL is correct and the model server is reachable"
                    .to_string()
            }
            ErrorCategory::Io => "Check file paths and filesystem permissions".to_string(),
            ErrorCategory::Parsing => {
                "Re-run the extraction; model output varies between attempts. Adjusting the \
                 prompt may help"
                    .to_string()
            }
            ErrorCategory::Configuration => {
                "Fix the configuration value and run again".to_string()
            }
            ErrorCategory::Processing => "Inspect the inputs and run again".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SummaryError>;
