use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Request failed: {0}")]
    GatewayError(#[from] reqwest::Error),

    #[error("Failed to send email: {0}")]
    SmtpError(#[from] lettre::transport::smtp::Error),

    #[error("Failed to send email: {message}")]
    MailDispatchError { message: String },

    #[error("Failed to build email message: {0}")]
    EmailBuildError(#[from] lettre::error::Error),

    #[error("Invalid email address.")]
    InvalidAddress(#[from] lettre::address::AddressError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing config field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{message}")]
    ValidationError { message: String },
}

impl SiteError {
    /// Errors the caller can fix by correcting the request (HTTP 400).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SiteError::ValidationError { .. } | SiteError::InvalidAddress(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
