use crate::utils::error::{Result, SantaError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SantaError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Shape check only: one '@' with something on both sides. Deliverability
/// is the mail provider's problem.
pub fn validate_email_address(field_name: &str, value: &str) -> Result<()> {
    let invalid = |reason: &str| SantaError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
            if domain.contains('@') {
                Err(invalid("Address contains more than one '@'"))
            } else {
                Ok(())
            }
        }
        _ => Err(invalid("Expected an address of the form name@domain")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api_endpoint", "https://example.com").is_ok());
        assert!(validate_url("api_endpoint", "http://example.com").is_ok());
        assert!(validate_url("api_endpoint", "").is_err());
        assert!(validate_url("api_endpoint", "invalid-url").is_err());
        assert!(validate_url("api_endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("pairings", "pairings.encrypted").is_ok());
        assert!(validate_path("pairings", "").is_err());
        assert!(validate_path("pairings", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_email_address() {
        assert!(validate_email_address("from", "santa@example.com").is_ok());
        assert!(validate_email_address("from", "no-at-sign").is_err());
        assert!(validate_email_address("from", "@example.com").is_err());
        assert!(validate_email_address("from", "santa@").is_err());
        assert!(validate_email_address("from", "a@b@c").is_err());
    }
}
