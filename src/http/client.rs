use std::time::Duration;

use reqwest::Client;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::AppResult;

/// Timeouts applied to the shared client.
///
/// The per-request timeout bounds how long an unresponsive endpoint can
/// stall a batch; without it a batch would wait indefinitely on a single
/// hung request.
#[derive(Debug, Clone, Copy)]
pub struct ClientOptions {
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

/// Builds the client shared read-only by every request in a run.
///
/// # Errors
///
/// Returns an error when the underlying TLS backend or connector cannot be
/// initialized.
pub fn build_client(options: ClientOptions) -> AppResult<Client> {
    Ok(Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .timeout(options.request_timeout)
        .connect_timeout(options.connect_timeout)
        .build()?)
}
