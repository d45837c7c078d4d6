use crate::utils::error::{Result, SiteError};
use lettre::Address;
use std::net::SocketAddr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_mail_address(field_name: &str, value: &str) -> Result<()> {
    match value.parse::<Address>() {
        Ok(_) => Ok(()),
        Err(e) => Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Not a valid email address: {}", e),
        }),
    }
}

pub fn validate_recipient_list(field_name: &str, recipients: &[String]) -> Result<()> {
    if recipients.is_empty() {
        return Err(SiteError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    for recipient in recipients {
        validate_mail_address(field_name, recipient)?;
    }
    Ok(())
}

pub fn validate_socket_addr(field_name: &str, value: &str) -> Result<()> {
    match value.parse::<SocketAddr>() {
        Ok(_) => Ok(()),
        Err(e) => Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Not a valid socket address: {}", e),
        }),
    }
}
