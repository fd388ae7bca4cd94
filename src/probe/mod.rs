//! URL verification engine.
//!
//! This module provides:
//! - `ProbeResult` / `ProbeStatus`: the verdict for a URL
//! - `HttpProber`: one HEAD-then-GET probe against a URL
//! - `probe_with_retries`: bounded retries with exponential backoff
//!
//! A URL is active when the deciding request answers with a status in
//! 200-399 and, if required, a JavaScript content type or `.js` URL.

mod http;
mod result;
mod retry;

// Re-export public API
pub use http::{is_active_status, FallbackReason, HeadOutcome, HttpProber, ProbeSettings, Prober};
pub(crate) use http::{content_type_of, standard_request};
pub use result::{ProbeResult, ProbeStatus};
pub use retry::{backoff_schedule, probe_with_retries, RetryPolicy, MAX_BACKOFF_DELAY};
