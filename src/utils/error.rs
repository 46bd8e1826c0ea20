use thiserror::Error;

#[derive(Error, Debug)]
pub enum SalaryError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Upstream {source_name} answered {status} for {url}")]
    UpstreamStatusError {
        source_name: String,
        status: u16,
        url: String,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Environment variable {name} is not set")]
    MissingEnvVarError { name: String },

    #[error("Invalid query parameters in {flag}: {message}")]
    InvalidParamsError { flag: String, message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
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
    Network,
    Upstream,
    Configuration,
    Io,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SalaryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SalaryError::ApiError(_) => ErrorCategory::Network,
            SalaryError::UpstreamStatusError { .. } => ErrorCategory::Upstream,
            SalaryError::IoError(_) => ErrorCategory::Io,
            SalaryError::CsvError(_) | SalaryError::SerializationError(_) => ErrorCategory::Data,
            SalaryError::MissingEnvVarError { .. }
            | SalaryError::InvalidParamsError { .. }
            | SalaryError::ConfigValidationError { .. }
            | SalaryError::InvalidConfigValueError { .. }
            | SalaryError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Upstream => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Short message meant for stderr, without the nested source chain.
    pub fn user_friendly_message(&self) -> String {
        match self {
            SalaryError::ApiError(_) => "Could not reach the vacancy API".to_string(),
            SalaryError::UpstreamStatusError {
                source_name,
                status,
                ..
            } => format!("{} rejected the request (HTTP {})", source_name, status),
            SalaryError::MissingEnvVarError { name } => {
                format!("Required environment variable {} is missing", name)
            }
            SalaryError::InvalidParamsError { flag, .. } => {
                format!("{} is not a valid JSON object of query parameters", flag)
            }
            SalaryError::IoError(_) => "Failed to write report files".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SalaryError::ApiError(_) => "Check your network connection and the API endpoint",
            SalaryError::UpstreamStatusError { .. } => {
                "Check the extra query parameters and the API credential"
            }
            SalaryError::MissingEnvVarError { .. } => {
                "Export SJ_SECRET_KEY or put it into a .env file in the working directory"
            }
            SalaryError::InvalidParamsError { .. } => {
                "Pass a JSON object, e.g. '{\"area\": \"1\", \"per_page\": 100}'"
            }
            SalaryError::ConfigValidationError { .. }
            | SalaryError::InvalidConfigValueError { .. }
            | SalaryError::MissingConfigError { .. } => {
                "Review the command line flags and the TOML config file"
            }
            SalaryError::IoError(_) => "Make sure the export directory is writable",
            SalaryError::CsvError(_) | SalaryError::SerializationError(_) => {
                "Re-run with --verbose to see the offending record"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SalaryError>;
