use crate::utils::error::{CheckCorsError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A header value in the request-header file: a single string or a list of
/// strings, each sent as its own header line.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HeaderValues {
    One(String),
    Many(Vec<String>),
}

impl HeaderValues {
    fn into_vec(self) -> Vec<String> {
        match self {
            HeaderValues::One(value) => vec![value],
            HeaderValues::Many(values) => values,
        }
    }
}

/// Reads a JSON object of header names to values from `path`.
pub fn load_request_headers(path: impl AsRef<Path>) -> Result<HeaderMap> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading request headers");

    let buf = fs::read(path)?;
    parse_request_headers(&buf)
}

pub fn parse_request_headers(json: &[u8]) -> Result<HeaderMap> {
    let raw: BTreeMap<String, HeaderValues> = serde_json::from_slice(json)?;
    let mut headers = HeaderMap::new();

    for (name, values) in raw {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| CheckCorsError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;

        for value in values.into_vec() {
            let header_value =
                HeaderValue::from_str(&value).map_err(|e| CheckCorsError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            headers.append(header_name.clone(), header_value);
        }
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_values() {
        let headers = parse_request_headers(br#"{"X-Test": "1", "Origin": "https://app.example"}"#)
            .unwrap();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("x-test").unwrap(), "1");
        assert_eq!(headers.get("origin").unwrap(), "https://app.example");
    }

    #[test]
    fn test_parse_multi_values() {
        let headers = parse_request_headers(br#"{"Accept": ["text/html", "application/json"]}"#)
            .unwrap();

        let values: Vec<&str> = headers
            .get_all("accept")
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(values, vec!["text/html", "application/json"]);
    }

    #[test]
    fn test_empty_object_yields_empty_set() {
        let headers = parse_request_headers(b"{}").unwrap();
        assert!(headers.is_empty());
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = parse_request_headers(b"{\"X-Test\": ").unwrap_err();
        assert!(matches!(err, CheckCorsError::SerializationError(_)));

        let err = parse_request_headers(b"[\"X-Test\"]").unwrap_err();
        assert!(matches!(err, CheckCorsError::SerializationError(_)));
    }

    #[test]
    fn test_invalid_header_name_is_rejected() {
        let err = parse_request_headers(br#"{"Bad Header": "1"}"#).unwrap_err();
        assert!(matches!(err, CheckCorsError::InvalidHeader { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("headers.json");
        std::fs::write(&path, r#"{"X-Test":"1"}"#).unwrap();

        let headers = load_request_headers(&path).unwrap();
        assert_eq!(headers.get("x-test").unwrap(), "1");

        let missing = load_request_headers(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(CheckCorsError::IoError(_))));
    }
}
