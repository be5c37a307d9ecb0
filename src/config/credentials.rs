use crate::utils::error::{Result, SantaError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable checked before falling back to the credentials file.
pub const API_KEY_ENV: &str = "SANTA_MAIL_API_KEY";

#[derive(Debug, Deserialize)]
struct CredentialsFile {
    default: Option<Profile>,
}

#[derive(Debug, Deserialize)]
struct Profile {
    api_key: Option<String>,
}

/// Resolve the mail API key: environment first, then the `[default]`
/// profile of a TOML credentials file. Neither being present is fatal for
/// the email path.
pub fn resolve_api_key(credentials_path: Option<&str>) -> Result<String> {
    let env_value = std::env::var(API_KEY_ENV).ok();
    resolve_with(env_value, credentials_path)
}

fn resolve_with(env_value: Option<String>, credentials_path: Option<&str>) -> Result<String> {
    if let Some(key) = env_value {
        if !key.is_empty() {
            tracing::debug!("Using mail API key from {}", API_KEY_ENV);
            return Ok(key);
        }
    }

    let path = match credentials_path {
        Some(p) => PathBuf::from(p),
        None => default_credentials_path().ok_or(SantaError::MissingCredentials)?,
    };

    if !path.exists() {
        return Err(SantaError::MissingCredentials);
    }

    tracing::debug!("Reading mail API key from {}", path.display());
    read_credentials_file(&path)
}

fn read_credentials_file(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path)?;
    let parsed: CredentialsFile =
        toml::from_str(&raw).map_err(|e| SantaError::ConfigError {
            message: format!("Invalid credentials file {}: {}", path.display(), e),
        })?;

    parsed
        .default
        .and_then(|profile| profile.api_key)
        .ok_or(SantaError::MissingCredentials)
}

fn default_credentials_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("secret-santa").join("credentials.toml"))
}
