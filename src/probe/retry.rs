//! Retry orchestration around a single-attempt prober.

use std::time::Duration;

use log::debug;
use tokio_retry::Retry;

use super::http::Prober;
use super::result::ProbeResult;

/// Upper bound for a single backoff delay. Only reachable with absurd retry counts.
pub const MAX_BACKOFF_DELAY: Duration = Duration::from_secs(24 * 60 * 60);

/// How often and how patiently a URL is re-probed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Retries after the first attempt (total attempts = `max_retries + 1`)
    pub max_retries: u32,
    /// Backoff base in seconds
    pub backoff_secs: f64,
}

/// Delays slept between attempts: `backoff * 2^n` for `n` in `0..max_retries`.
///
/// There is one delay per retry, so nothing is slept after the last attempt.
/// No jitter.
pub fn backoff_schedule(policy: &RetryPolicy) -> impl Iterator<Item = Duration> {
    let base = policy.backoff_secs.max(0.0);
    (0..policy.max_retries).map(move |attempt| {
        if base == 0.0 {
            return Duration::ZERO;
        }
        let secs = base * 2f64.powi(attempt.min(i32::MAX as u32) as i32);
        Duration::try_from_secs_f64(secs)
            .unwrap_or(MAX_BACKOFF_DELAY)
            .min(MAX_BACKOFF_DELAY)
    })
}

/// Probes `url` until it is active or the policy is exhausted.
///
/// Returns the first active result, or the last failed attempt unchanged.
/// Backoff sleeps are tokio timers, so only the calling task waits.
pub async fn probe_with_retries<P>(prober: &P, url: &str, policy: &RetryPolicy) -> ProbeResult
where
    P: Prober,
{
    let mut attempt = 0u32;
    let outcome = Retry::spawn(backoff_schedule(policy), || {
        attempt += 1;
        let attempt = attempt;
        async move {
            let result = prober.probe_once(url).await;
            if result.active {
                Ok(result)
            } else {
                debug!("Attempt {attempt} for {url} failed: {}", result.status);
                Err(result)
            }
        }
    })
    .await;

    match outcome {
        Ok(result) | Err(result) => result,
    }
}
