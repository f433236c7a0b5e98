use crate::utils::error::CheckError;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// A single URL check. Implementations must be safe to call from many tasks
/// at once.
#[async_trait]
pub trait UrlCheck: Send + Sync {
    /// Returns `Ok(true)` when every expected header matched, `Ok(false)` on
    /// any mismatch and `Err` when the exchange could not be completed.
    async fn check(&self, token: &CancellationToken, url: &str) -> Result<bool, CheckError>;
}
