use reqwest::Client;
use tracing::error;
use url::Url;

use crate::metrics::{BatchResult, RequestOutcome};

use super::executor::execute;

/// Fires `count` concurrent requests against `url` and collects every
/// outcome.
///
/// Fan-out/fan-in barrier: all spawned requests are awaited before
/// returning, and no single slow or failed request aborts the rest. The
/// result always holds exactly `count` outcomes; a task that fails to join
/// is recorded as a `Failure`. `count == 0` returns an empty batch.
pub async fn run_batch(client: &Client, url: &Url, count: u32) -> BatchResult {
    let capacity = usize::try_from(count).map_or(0, |value| value);
    let mut handles = Vec::with_capacity(capacity);
    for _ in 0..count {
        let client = client.clone();
        let url = url.clone();
        handles.push(tokio::spawn(async move { execute(&client, &url).await }));
    }

    let mut outcomes = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(outcome) => outcomes.push(outcome),
            Err(err) => {
                error!("Request task failed to join: {}", err);
                outcomes.push(RequestOutcome::Failure {
                    reason: format!("task join error: {}", err),
                });
            }
        }
    }
    outcomes
}
