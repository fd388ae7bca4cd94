//! Single-attempt HTTP prober.
//!
//! One probe is a HEAD request with a GET fallback. The HEAD step returns a
//! tagged [`HeadOutcome`] instead of failing, so the fallback decision is
//! ordinary control flow.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};

use super::result::{ProbeResult, ProbeStatus};
use crate::classify::looks_like_js_content;
use crate::config::ACCEPT_ANY;
use crate::error_handling::{categorize_reqwest_error, root_cause_message};

/// Something that can check a URL once.
///
/// The retry orchestrator and the dispatcher only depend on this trait, which
/// keeps them testable without a network.
pub trait Prober: Send + Sync + 'static {
    /// Performs one probe. Never fails: every problem is folded into the verdict.
    fn probe_once(&self, url: &str) -> impl Future<Output = ProbeResult> + Send;
}

/// Per-attempt settings.
#[derive(Debug, Clone, Copy)]
pub struct ProbeSettings {
    /// Timeout applied to each HEAD and GET request
    pub timeout: Duration,
    /// Require a JavaScript content type (or a `.js` URL) to count as active
    pub require_js_header: bool,
}

/// Result of the HEAD step.
#[derive(Debug)]
pub enum HeadOutcome {
    /// HEAD alone proves the URL is active.
    Accepted(ProbeResult),
    /// HEAD was not conclusive; the probe continues with a GET.
    Fallback(FallbackReason),
}

/// Why the HEAD step handed over to GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// Status outside 200-399
    Status(u16),
    /// Content type and URL both rejected by the classifier
    ContentType(String),
    /// No response (timeout, connection refused, ...)
    Transport(String),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::Status(code) => write!(f, "status {code}"),
            FallbackReason::ContentType(ct) => write!(f, "content type {ct:?}"),
            FallbackReason::Transport(msg) => write!(f, "{msg}"),
        }
    }
}

/// Returns `true` for statuses that count as reachable (200-399).
pub fn is_active_status(status: u16) -> bool {
    (200..400).contains(&status)
}

/// `Content-Type` of a response, empty when missing or not valid UTF-8.
pub(crate) fn content_type_of(response: &Response) -> String {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Builds a request carrying the standard headers and timeout.
pub(crate) fn standard_request(
    client: &Client,
    method: Method,
    url: &str,
    timeout: Duration,
) -> RequestBuilder {
    client
        .request(method, url)
        .header(ACCEPT, ACCEPT_ANY)
        .timeout(timeout)
}

/// Probes URLs over HTTP with a shared `reqwest::Client`.
///
/// The client carries the User-Agent and follows redirects, so `final_url`
/// is the post-redirect URL.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: Client,
    settings: ProbeSettings,
}

impl HttpProber {
    /// Creates a prober sharing `client`; per-request timeouts come from `settings`.
    pub fn new(client: Client, settings: ProbeSettings) -> Self {
        HttpProber { client, settings }
    }

    /// HEAD step: accept the URL or say why GET is needed.
    pub async fn try_head(&self, url: &str) -> HeadOutcome {
        let response =
            match standard_request(&self.client, Method::HEAD, url, self.settings.timeout)
                .send()
                .await
            {
                Ok(response) => response,
                Err(e) => {
                    return HeadOutcome::Fallback(FallbackReason::Transport(root_cause_message(
                        &e,
                    )))
                }
            };

        let status = response.status().as_u16();
        if !is_active_status(status) {
            return HeadOutcome::Fallback(FallbackReason::Status(status));
        }

        let content_type = content_type_of(&response);
        if self.settings.require_js_header && !looks_like_js_content(&content_type, url) {
            return HeadOutcome::Fallback(FallbackReason::ContentType(content_type));
        }

        HeadOutcome::Accepted(ProbeResult {
            url: url.to_string(),
            active: true,
            status: ProbeStatus::Http(status),
            content_type,
            final_url: response.url().to_string(),
        })
    }

    /// GET step. The content-type gate is applied again whatever made HEAD fail.
    pub async fn try_get(&self, url: &str) -> ProbeResult {
        let response = match standard_request(&self.client, Method::GET, url, self.settings.timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                return ProbeResult::failed(
                    url,
                    ProbeStatus::Failed {
                        kind: categorize_reqwest_error(&e),
                        message: root_cause_message(&e),
                    },
                )
            }
        };

        let status = response.status().as_u16();
        let content_type = content_type_of(&response);
        let final_url = response.url().to_string();

        let (active, status) = if !is_active_status(status) {
            (false, ProbeStatus::Http(status))
        } else if self.settings.require_js_header && !looks_like_js_content(&content_type, url) {
            (false, ProbeStatus::NonJsContentType(status))
        } else {
            (true, ProbeStatus::Http(status))
        };

        ProbeResult {
            url: url.to_string(),
            active,
            status,
            content_type,
            final_url,
        }
    }
}

impl Prober for HttpProber {
    async fn probe_once(&self, url: &str) -> ProbeResult {
        match self.try_head(url).await {
            HeadOutcome::Accepted(result) => result,
            HeadOutcome::Fallback(reason) => {
                debug!("HEAD {url} inconclusive ({reason}), falling back to GET");
                self.try_get(url).await
            }
        }
    }
}
