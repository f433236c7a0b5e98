use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckCorsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    ClientError(#[from] reqwest::Error),

    #[error("Invalid request header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("load URLs: {0}")]
    LoadUrls(#[source] std::io::Error),

    #[error("unsuccessful")]
    Unsuccessful,
}

pub type Result<T> = std::result::Result<T, CheckCorsError>;

/// Failure of a single URL check. A header mismatch is not an error; it is
/// reported through the `Ok(false)` result of a check.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("create request: invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("perform request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("read body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("perform request: context canceled")]
    Cancelled,
}

impl CheckError {
    /// True when the HTTP exchange itself failed (connect, timeout, body read
    /// or cancellation), as opposed to the request never being built.
    pub fn is_transport(&self) -> bool {
        !matches!(self, CheckError::InvalidUrl { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsuccessful_message_is_opaque() {
        assert_eq!(CheckCorsError::Unsuccessful.to_string(), "unsuccessful");
    }

    #[test]
    fn test_load_urls_wraps_io_error() {
        let err = CheckCorsError::LoadUrls(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        assert_eq!(err.to_string(), "load URLs: no such file");
    }

    #[test]
    fn test_check_error_classification() {
        let invalid = CheckError::InvalidUrl {
            url: "nope".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert!(!invalid.is_transport());
        assert!(CheckError::Cancelled.is_transport());
    }
}
