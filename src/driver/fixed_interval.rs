use reqwest::Client;
use tokio::time::{Instant, sleep};
use tracing::debug;

use crate::http::run_batch;
use crate::metrics::{BatchSummary, summarize};

use super::DriverState;
use super::config::FixedIntervalConfig;

/// Repeats fixed-size batches with a fixed pause until the deadline.
///
/// The deadline is only checked between iterations, so the final iteration
/// may overshoot `max_duration` by up to one batch plus one pause.
#[derive(Debug)]
pub struct FixedIntervalDriver {
    config: FixedIntervalConfig,
}

impl FixedIntervalDriver {
    #[must_use]
    pub const fn new(config: FixedIntervalConfig) -> Self {
        Self { config }
    }

    pub async fn run<F>(&self, client: &Client, mut on_summary: F)
    where
        F: FnMut(BatchSummary),
    {
        let started = Instant::now();
        let mut state = DriverState::Running;
        while state == DriverState::Running {
            if started.elapsed() >= self.config.max_duration {
                state = DriverState::Stopped;
                continue;
            }
            debug!(
                "Sending batch of {} requests to {}",
                self.config.requests, self.config.url
            );
            let outcomes = run_batch(client, &self.config.url, self.config.requests).await;
            on_summary(summarize(&outcomes));
            sleep(self.config.interval).await;
        }
    }
}
