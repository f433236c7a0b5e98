use crate::config::request_headers::load_request_headers;
use crate::config::CliConfig;
use crate::core::checker::Checker;
use crate::core::engine::CheckEngine;
use crate::core::url_source::UrlSource;
use crate::core::RunSummary;
use crate::utils::error::{CheckCorsError, Result};
use tokio_util::sync::CancellationToken;

/// Loads the request headers and URL list named by `config`, then checks
/// every URL. Fails fast on configuration problems before any request is
/// sent.
pub async fn run(config: &CliConfig, token: &CancellationToken) -> Result<RunSummary> {
    let request_headers = match &config.reqheaders {
        Some(path) => Some(load_request_headers(path).map_err(|e| {
            CheckCorsError::ConfigError {
                message: format!("load request headers: {}", e),
            }
        })?),
        None => None,
    };

    let checker = Checker::new(request_headers)?;
    let urls = UrlSource::open(&config.urls).map_err(CheckCorsError::LoadUrls)?;

    CheckEngine::new(checker)
        .with_concurrency(config.concurrency)
        .run(urls, token)
        .await
}
