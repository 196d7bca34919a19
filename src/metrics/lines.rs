use std::time::Duration;

use super::types::BatchSummary;

/// Microseconds per millisecond.
const US_PER_MS: u128 = 1_000;

/// Renders one batch summary as labelled console lines.
///
/// Absent latencies (no successful request in the batch) render as `N/A`,
/// never as a zero measurement.
#[must_use]
pub fn summary_lines(summary: &BatchSummary) -> Vec<String> {
    vec![
        format!("Total Requests: {}", summary.total_requests),
        format!("Successful: {}", summary.successful_requests),
        format!("Failed: {}", summary.failed_requests),
        format!("Avg Latency: {}", format_latency(summary.avg_latency)),
        format!(
            "Min/Max Latency: {} / {}",
            format_latency(summary.min_latency),
            format_latency(summary.max_latency)
        ),
    ]
}

fn format_latency(latency: Option<Duration>) -> String {
    latency.map_or_else(|| "N/A".to_owned(), format_duration_ms)
}

fn format_duration_ms(value: Duration) -> String {
    let micros = value.as_micros();
    format!("{}.{:03}ms", micros / US_PER_MS, micros % US_PER_MS)
}
