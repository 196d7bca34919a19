use reqwest::Client;
use tokio::time::Instant;
use tracing::error;
use url::Url;

use crate::metrics::RequestOutcome;

/// Issues one timed GET and classifies the result.
///
/// Total over all inputs: transport errors, timeouts, and non-2xx/3xx
/// statuses are absorbed into a `Failure` outcome rather than propagated.
/// Latency covers the full response including the body drain.
pub async fn execute(client: &Client, url: &Url) -> RequestOutcome {
    let start = Instant::now();

    let response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(err) => return failure(&err),
    };
    let response = match response.error_for_status() {
        Ok(response) => response,
        Err(err) => return failure(&err),
    };
    if let Err(err) = drain_response_body(response).await {
        return failure(&err);
    }

    RequestOutcome::Success {
        latency: start.elapsed(),
    }
}

fn failure(err: &reqwest::Error) -> RequestOutcome {
    error!("Request failed: {}", err);
    RequestOutcome::Failure {
        reason: err.to_string(),
    }
}

async fn drain_response_body(response: reqwest::Response) -> Result<(), reqwest::Error> {
    response.bytes().await?;
    Ok(())
}
