use crate::core::{HeaderMismatch, UrlCheck, EXPECTED_HEADERS};
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::parse_http_url;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Request};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_USER_AGENT: &str = concat!("checkcors/", env!("CARGO_PKG_VERSION"));

/// Request headers sent when no header set is configured.
pub fn default_request_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
    headers
}

/// Performs CORS header checks against single URLs.
///
/// Cloning is cheap: the HTTP client and the request header set are shared
/// between clones, so one checker can serve every concurrent check of a run.
#[derive(Debug, Clone)]
pub struct Checker {
    client: Client,
    request_headers: Arc<HeaderMap>,
}

impl Checker {
    /// Builds a checker with its own client using the fixed request timeout.
    /// A configured header set replaces the default request headers outright.
    pub fn new(request_headers: Option<HeaderMap>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(client, request_headers))
    }

    pub fn with_client(client: Client, request_headers: Option<HeaderMap>) -> Self {
        Self {
            client,
            request_headers: Arc::new(request_headers.unwrap_or_else(default_request_headers)),
        }
    }

    /// Builds the GET request for `url` carrying exactly the checker's
    /// request header set.
    pub fn request(&self, url: &str) -> std::result::Result<Request, CheckError> {
        let target = parse_http_url("url", url).map_err(|e| CheckError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let mut request = self
            .client
            .get(target)
            .build()
            .map_err(|e| CheckError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        *request.headers_mut() = (*self.request_headers).clone();

        Ok(request)
    }

    pub async fn check(
        &self,
        token: &CancellationToken,
        url: &str,
    ) -> std::result::Result<bool, CheckError> {
        let request = self.request(url)?;

        tokio::select! {
            biased;
            _ = token.cancelled() => Err(CheckError::Cancelled),
            result = self.exchange(request, url) => result,
        }
    }

    async fn exchange(
        &self,
        request: Request,
        url: &str,
    ) -> std::result::Result<bool, CheckError> {
        let mut response = self
            .client
            .execute(request)
            .await
            .map_err(CheckError::Transport)?;

        tracing::debug!(url = %url, status = %response.status(), "received response");

        // Drain the body so the connection can go back to the pool.
        while response.chunk().await.map_err(CheckError::Body)?.is_some() {}

        let mismatches = check_headers(url, response.headers(), EXPECTED_HEADERS);
        if mismatches.is_empty() {
            tracing::debug!(url = %url, "CORS headers ok");
        }
        Ok(mismatches.is_empty())
    }
}

#[async_trait]
impl UrlCheck for Checker {
    async fn check(
        &self,
        token: &CancellationToken,
        url: &str,
    ) -> std::result::Result<bool, CheckError> {
        Checker::check(self, token, url).await
    }
}

/// Compares `headers` against every expected `(name, value)` pair.
///
/// Names are looked up case-insensitively, values must match byte for byte.
/// Each mismatch is logged once and returned.
pub fn check_headers(
    url: &str,
    headers: &HeaderMap,
    expected: &[(&str, &str)],
) -> Vec<HeaderMismatch> {
    let mut mismatches = Vec::new();

    for (name, value) in expected {
        let actual = headers.get(*name);
        if actual.map(HeaderValue::as_bytes) == Some(value.as_bytes()) {
            continue;
        }

        let got = actual
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .unwrap_or_default();
        tracing::error!(
            url = %url,
            header = %name,
            expected = %value,
            got = %got,
            "header mismatch"
        );
        mismatches.push(HeaderMismatch {
            header: name.to_string(),
            expected: value.to_string(),
            got,
        });
    }

    mismatches
}
