use rand::Rng;
use reqwest::Client;
use tokio::time::{Instant, sleep};
use tracing::debug;

use crate::http::run_batch;
use crate::metrics::{BatchSummary, summarize};

use super::DriverState;
use super::config::RandomizedConfig;

/// Like `FixedIntervalDriver`, but batch size and pause are drawn uniformly
/// from inclusive ranges, redrawn each iteration.
///
/// The generator is injected so tests can drive the loop with a seeded
/// `StdRng` and verify range adherence deterministically.
#[derive(Debug)]
pub struct RandomizedDriver<R: Rng> {
    config: RandomizedConfig,
    rng: R,
}

impl<R: Rng> RandomizedDriver<R> {
    #[must_use]
    pub const fn new(config: RandomizedConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub async fn run<F>(&mut self, client: &Client, mut on_summary: F)
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
            let requests = self.config.draw_requests(&mut self.rng);
            let pause = self.config.draw_pause(&mut self.rng);
            debug!(
                "Sending batch of {} requests to {}, next pause {:?}",
                requests, self.config.url, pause
            );
            let outcomes = run_batch(client, &self.config.url, requests).await;
            on_summary(summarize(&outcomes));
            sleep(pause).await;
        }
    }
}
