use std::time::Duration;

/// Classified result of a single request attempt.
///
/// A failed attempt is terminal; there is no retry. The failure reason is
/// informational only and never parsed by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Success { latency: Duration },
    Failure { reason: String },
}

impl RequestOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, RequestOutcome::Success { .. })
    }

    /// Latency of a successful attempt, `None` for failures.
    #[must_use]
    pub const fn latency(&self) -> Option<Duration> {
        match self {
            RequestOutcome::Success { latency } => Some(*latency),
            RequestOutcome::Failure { .. } => None,
        }
    }
}

/// All outcomes of one batch. Completion order is not meaningful.
pub type BatchResult = Vec<RequestOutcome>;

/// Aggregate statistics for one batch.
///
/// `successful_requests + failed_requests == total_requests` always holds.
/// The latency fields are `None` exactly when no request in the batch
/// succeeded, which keeps an all-failure batch distinguishable from a batch
/// of genuine zero-duration measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub avg_latency: Option<Duration>,
    pub max_latency: Option<Duration>,
    pub min_latency: Option<Duration>,
}
