use std::time::Duration;

use super::types::{BatchSummary, RequestOutcome};

/// Reduces one batch's outcomes into counts and latency statistics.
///
/// Pure and deterministic; min/avg/max cover success latencies only.
#[must_use]
pub fn summarize(outcomes: &[RequestOutcome]) -> BatchSummary {
    let total_requests = u64::try_from(outcomes.len()).map_or(u64::MAX, |value| value);

    let mut successful_requests: u64 = 0;
    let mut latency_sum = Duration::ZERO;
    let mut min_latency: Option<Duration> = None;
    let mut max_latency: Option<Duration> = None;

    for outcome in outcomes {
        let Some(latency) = outcome.latency() else {
            continue;
        };
        successful_requests = successful_requests.saturating_add(1);
        latency_sum = latency_sum.saturating_add(latency);
        min_latency = Some(min_latency.map_or(latency, |current| current.min(latency)));
        max_latency = Some(max_latency.map_or(latency, |current| current.max(latency)));
    }

    let avg_latency = u32::try_from(successful_requests)
        .ok()
        .and_then(|count| latency_sum.checked_div(count));

    BatchSummary {
        total_requests,
        successful_requests,
        failed_requests: total_requests.saturating_sub(successful_requests),
        avg_latency,
        max_latency,
        min_latency,
    }
}
