use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_mail_address, validate_non_empty_string, validate_recipient_list,
    validate_socket_addr, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the relay needs to dispatch mail: SMTP account, operator
/// recipients, and the company identity shown in outgoing emails.
/// Loaded from the environment or a TOML file; always validated before
/// the server starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    pub smtp_email: String,
    pub smtp_password: String,
    pub recipients: Vec<String>,
    pub company_name: String,
    pub company_email: String,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| SiteError::MissingConfigError {
        field: name.to_string(),
    })
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

impl RelayConfig {
    pub fn from_env() -> Result<Self> {
        let smtp_port = env_or("SMTP_PORT", "587");
        let smtp_port = smtp_port
            .parse::<u16>()
            .map_err(|e| SiteError::InvalidConfigValueError {
                field: "SMTP_PORT".to_string(),
                value: smtp_port.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            smtp_host: env_or("SMTP_HOST", &default_smtp_host()),
            smtp_port,
            smtp_email: require_env("SMTP_EMAIL")?,
            smtp_password: require_env("SMTP_APP_PASSWORD")?,
            recipients: require_env("RECIPIENT_EMAILS")?
                .split(',')
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty())
                .collect(),
            company_name: require_env("COMPANY_NAME")?,
            company_email: require_env("COMPANY_EMAIL")?,
            website_url: std::env::var("WEBSITE_URL").ok(),
            bind_addr: env_or("BIND_ADDR", &default_bind_addr()),
        })
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| SiteError::ConfigError {
            message: format!("{}: {}", path.display(), e),
        })
    }
}

impl Validate for RelayConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("smtp_host", &self.smtp_host)?;
        validate_mail_address("smtp_email", &self.smtp_email)?;
        validate_non_empty_string("smtp_password", &self.smtp_password)?;
        validate_recipient_list("recipients", &self.recipients)?;
        validate_non_empty_string("company_name", &self.company_name)?;
        validate_mail_address("company_email", &self.company_email)?;
        validate_socket_addr("bind_addr", &self.bind_addr)?;
        Ok(())
    }
}
