//! Retry orchestration tests against scripted probers.
//!
//! Time is paused, so backoff sleeps complete instantly while the recorded
//! attempt instants still reflect the scheduled delays.

use std::sync::Mutex;
use std::time::Duration;

use js_status::probe::{probe_with_retries, ProbeResult, ProbeStatus, Prober, RetryPolicy};
use js_status::ErrorType;
use tokio::time::Instant;

/// Fails every attempt until `succeed_on` (1-based), recording when each attempt ran.
struct ScriptedProber {
    succeed_on: Option<usize>,
    attempts: Mutex<Vec<Instant>>,
}

impl ScriptedProber {
    fn new(succeed_on: Option<usize>) -> Self {
        ScriptedProber {
            succeed_on,
            attempts: Mutex::new(Vec::new()),
        }
    }

    fn attempt_times(&self) -> Vec<Instant> {
        self.attempts.lock().expect("attempts lock").clone()
    }
}

impl Prober for ScriptedProber {
    async fn probe_once(&self, url: &str) -> ProbeResult {
        let attempt = {
            let mut attempts = self.attempts.lock().expect("attempts lock");
            attempts.push(Instant::now());
            attempts.len()
        };

        if self.succeed_on == Some(attempt) {
            return ProbeResult {
                url: url.to_string(),
                active: true,
                status: ProbeStatus::Http(200),
                content_type: "application/javascript".to_string(),
                final_url: url.to_string(),
            };
        }
        ProbeResult::failed(
            url,
            ProbeStatus::Failed {
                kind: ErrorType::Timeout,
                message: format!("attempt {attempt} timed out"),
            },
        )
    }
}

#[tokio::test(start_paused = true)]
async fn test_exhausted_retries_return_last_failure() {
    let prober = ScriptedProber::new(None);
    let policy = RetryPolicy {
        max_retries: 2,
        backoff_secs: 0.5,
    };

    let result = probe_with_retries(&prober, "http://a/x.js", &policy).await;

    let times = prober.attempt_times();
    assert_eq!(times.len(), 3, "retries=2 means three attempts");
    assert!(!result.active);
    assert_eq!(result.url, "http://a/x.js");
    assert_eq!(
        result.status,
        ProbeStatus::Failed {
            kind: ErrorType::Timeout,
            message: "attempt 3 timed out".to_string(),
        },
        "the last attempt's result must be returned unchanged"
    );

    let first_gap = times[1] - times[0];
    let second_gap = times[2] - times[1];
    assert!(first_gap >= Duration::from_millis(500), "gap was {first_gap:?}");
    assert!(second_gap >= Duration::from_millis(1000), "gap was {second_gap:?}");
    assert!(second_gap.as_secs_f64() >= 1.9 * first_gap.as_secs_f64());
}

#[tokio::test(start_paused = true)]
async fn test_stops_at_first_success() {
    let prober = ScriptedProber::new(Some(2));
    let policy = RetryPolicy {
        max_retries: 3,
        backoff_secs: 1.0,
    };

    let result = probe_with_retries(&prober, "http://a/flaky.js", &policy).await;

    assert!(result.active);
    assert_eq!(result.status, ProbeStatus::Http(200));
    assert_eq!(prober.attempt_times().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_no_retries_means_single_attempt() {
    let prober = ScriptedProber::new(None);
    let policy = RetryPolicy {
        max_retries: 0,
        backoff_secs: 5.0,
    };

    let start = Instant::now();
    let result = probe_with_retries(&prober, "http://a/x.js", &policy).await;

    assert!(!result.active);
    assert_eq!(prober.attempt_times().len(), 1);
    assert_eq!(start.elapsed(), Duration::ZERO, "nothing is slept after the last attempt");
}

#[tokio::test(start_paused = true)]
async fn test_first_attempt_success_is_not_retried() {
    let prober = ScriptedProber::new(Some(1));
    let policy = RetryPolicy {
        max_retries: 5,
        backoff_secs: 0.5,
    };

    let result = probe_with_retries(&prober, "http://a/x.js", &policy).await;

    assert!(result.active);
    assert_eq!(prober.attempt_times().len(), 1);
}
