//! HTTP client initialization.

use crate::config::Config;
use crate::error_handling::InitializationError;
use reqwest::ClientBuilder;

/// Initializes the HTTP client shared by the prober and the downloader.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Connect timeout equal to the per-request timeout
/// - Redirect following enabled (reqwest default, up to 10 hops)
///
/// The overall per-request timeout is applied on each request rather than
/// on the client, so HEAD and GET are bounded independently.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .connect_timeout(config.timeout_duration())
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
