use reqwest::Client;

use crate::http::run_batch;
use crate::metrics::{BatchSummary, summarize};

use super::config::NormalConfig;

/// Single-shot driver: one batch, one summary, then stop. No pause and no
/// deadline check.
#[derive(Debug)]
pub struct NormalDriver {
    config: NormalConfig,
}

impl NormalDriver {
    #[must_use]
    pub const fn new(config: NormalConfig) -> Self {
        Self { config }
    }

    pub async fn run<F>(&self, client: &Client, mut on_summary: F)
    where
        F: FnMut(BatchSummary),
    {
        let outcomes = run_batch(client, &self.config.url, self.config.requests).await;
        on_summary(summarize(&outcomes));
    }
}
