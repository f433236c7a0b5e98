use crate::utils::error::{CheckCorsError, Result};
use std::path::Path;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses a target URL, accepting only the `http` and `https` schemes.
pub fn parse_http_url(field_name: &str, url_str: &str) -> Result<Url> {
    if url_str.trim().is_empty() {
        return Err(CheckCorsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str.trim()) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(CheckCorsError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CheckCorsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// A file argument must name something other than a directory.
pub fn validate_file_arg(field_name: &str, path: &str) -> Result<()> {
    let reason = if path.trim().is_empty() {
        "Path cannot be empty"
    } else if Path::new(path).is_dir() {
        "Path is a directory, expected a file"
    } else {
        return Ok(());
    };

    Err(CheckCorsError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: path.to_string(),
        reason: reason.to_string(),
    })
}

pub fn validate_at_least(field_name: &str, value: usize, min: usize) -> Result<()> {
    if value >= min {
        return Ok(());
    }
    Err(CheckCorsError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Value must be at least {}", min),
    })
}
