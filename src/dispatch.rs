//! Concurrent dispatch of probes over the URL set.
//!
//! Every URL gets its own tokio task; a semaphore caps how many of them are
//! probing at once. Results are consumed in completion order by the caller's
//! task only, so the accumulated collections need no locking.

use std::sync::Arc;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::warn;
use tokio::task::JoinError;

use crate::error_handling::FailureStats;
use crate::initialization::init_semaphore;
use crate::probe::{probe_with_retries, ProbeResult, Prober, RetryPolicy};

/// Runs `probe_with_retries` for every URL with at most `workers` in flight.
///
/// `on_verdict` is called once per URL as results complete (completion
/// order, not input order). A task that panics still yields an inactive
/// `WorkerFault` verdict for its URL, so the returned vector always holds
/// exactly one result per input URL.
pub async fn dispatch_probes<P, F>(
    urls: &[String],
    prober: Arc<P>,
    policy: RetryPolicy,
    workers: usize,
    mut on_verdict: F,
) -> Vec<ProbeResult>
where
    P: Prober,
    F: FnMut(&ProbeResult),
{
    let semaphore = init_semaphore(workers.max(1));
    let mut tasks = FuturesUnordered::new();

    for url in urls {
        let handle = tokio::spawn({
            let url = url.clone();
            let prober = Arc::clone(&prober);
            let semaphore = Arc::clone(&semaphore);
            async move {
                // The semaphore is never closed; a failed acquire only means no limit.
                let _permit = semaphore.acquire_owned().await.ok();
                probe_with_retries(prober.as_ref(), &url, &policy).await
            }
        });

        let url = url.clone();
        tasks.push(async move {
            match handle.await {
                Ok(result) => result,
                Err(join_error) => {
                    let message = describe_join_error(join_error);
                    warn!("Probe task for {url} died: {message}");
                    ProbeResult::worker_fault(&url, message)
                }
            }
        });
    }

    let mut results = Vec::with_capacity(urls.len());
    while let Some(result) = tasks.next().await {
        on_verdict(&result);
        results.push(result);
    }
    results
}

fn describe_join_error(error: JoinError) -> String {
    if error.is_cancelled() {
        return "task cancelled".to_string();
    }
    let payload = error.into_panic();
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());
    format!("task panicked: {detail}")
}

/// Verdicts partitioned into active and inactive URLs.
///
/// URL lists follow the order of `rows`, which is completion order.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    /// URLs judged active
    pub active: Vec<String>,
    /// URLs judged inactive
    pub inactive: Vec<String>,
    /// One verdict per URL, for the report
    pub rows: Vec<ProbeResult>,
    /// Failure categories of the inactive verdicts
    pub failures: FailureStats,
}

impl Tally {
    /// Partitions `results`, keeping their order.
    pub fn from_results(results: Vec<ProbeResult>) -> Self {
        let mut tally = Tally::default();
        for result in results {
            tally.record(result);
        }
        tally
    }

    /// Adds one verdict to the matching list and, if inactive, to the failure counts.
    pub fn record(&mut self, result: ProbeResult) {
        if result.active {
            self.active.push(result.url.clone());
        } else {
            self.failures.record(&result);
            self.inactive.push(result.url.clone());
        }
        self.rows.push(result);
    }
}
