use crate::core::url_source::UrlSource;
use crate::core::{CheckOutcome, RunSummary, UrlCheck};
use crate::utils::error::{CheckCorsError, Result};
use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

/// Fans out one concurrent check per URL and folds the outcomes into a
/// single pass/fail result.
pub struct CheckEngine<C: UrlCheck + 'static> {
    checker: Arc<C>,
    concurrency: Option<usize>,
}

impl<C: UrlCheck + 'static> CheckEngine<C> {
    pub fn new(checker: C) -> Self {
        Self {
            checker: Arc::new(checker),
            concurrency: None,
        }
    }

    /// Caps the number of checks in flight. `None` dispatches every URL at
    /// once.
    pub fn with_concurrency(mut self, limit: Option<usize>) -> Self {
        self.concurrency = limit;
        self
    }

    /// Runs a check for every URL the source yields and waits for all of
    /// them. Individual failures are logged where they happen; the returned
    /// error only says that the run as a whole did not pass.
    pub async fn run<R: BufRead>(
        &self,
        mut urls: UrlSource<R>,
        token: &CancellationToken,
    ) -> Result<RunSummary> {
        let failed = Arc::new(AtomicBool::new(false));
        let permits = self.concurrency.map(|n| Arc::new(Semaphore::new(n)));
        let mut tasks = JoinSet::new();
        let mut summary = RunSummary::default();

        for url in urls.by_ref() {
            let checker = Arc::clone(&self.checker);
            let failed = Arc::clone(&failed);
            let permits = permits.clone();
            let token = token.clone();

            summary.dispatched += 1;
            tasks.spawn(async move {
                let _permit = match permits {
                    Some(semaphore) => semaphore.acquire_owned().await.ok(),
                    None => None,
                };

                let outcome = match checker.check(&token, &url).await {
                    Ok(true) => CheckOutcome::Success,
                    Ok(false) => CheckOutcome::HeaderMismatch,
                    Err(err) => {
                        tracing::error!(url = %url, err = %err, "check URL");
                        CheckOutcome::TransportError
                    }
                };

                if outcome.is_failure() {
                    failed.fetch_or(true, Ordering::SeqCst);
                }
                outcome
            });
        }

        tracing::debug!(dispatched = summary.dispatched, "all checks dispatched");

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(outcome) => summary.record(outcome),
                Err(err) => {
                    tracing::error!(err = %err, "check task failed");
                    failed.fetch_or(true, Ordering::SeqCst);
                    summary.errored += 1;
                }
            }
        }

        tracing::info!(
            dispatched = summary.dispatched,
            passed = summary.passed,
            mismatched = summary.mismatched,
            errored = summary.errored,
            "checks finished"
        );

        urls.finish().map_err(CheckCorsError::LoadUrls)?;

        if failed.load(Ordering::SeqCst) {
            return Err(CheckCorsError::Unsuccessful);
        }
        Ok(summary)
    }
}
