use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::args::LoadArgs;
use crate::driver::{
    FixedIntervalDriver, NormalDriver, RandomizedDriver, Schedule, build_schedule,
};
use crate::error::AppResult;
use crate::http::{ClientOptions, build_client};
use crate::metrics::{BatchSummary, summary_lines};

pub(crate) fn run() -> AppResult<()> {
    let args = LoadArgs::parse();
    crate::logger::init_logging(args.verbose);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args))
}

async fn run_async(args: LoadArgs) -> AppResult<()> {
    let schedule = build_schedule(&args.command)?;
    let client = build_client(ClientOptions {
        request_timeout: args.request_timeout,
        connect_timeout: args.connect_timeout,
    })?;

    match schedule {
        Schedule::Normal(config) => {
            info!(
                "Normal mode: sending {} requests at once to {}",
                config.requests, config.url
            );
            NormalDriver::new(config).run(&client, print_summary).await;
        }
        Schedule::FixedInterval(config) => {
            info!(
                "Interval mode: sending {} requests every {:?} for up to {:?} to {}",
                config.requests, config.interval, config.max_duration, config.url
            );
            FixedIntervalDriver::new(config)
                .run(&client, print_summary)
                .await;
            info!("Interval mode completed.");
        }
        Schedule::Randomized(config) => {
            info!(
                "Random mode: sending {:?} requests every {:?} for up to {:?} to {}",
                config.requests, config.interval, config.max_duration, config.url
            );
            RandomizedDriver::new(config, StdRng::from_entropy())
                .run(&client, print_summary)
                .await;
            info!("Random mode completed.");
        }
    }
    Ok(())
}

fn print_summary(summary: BatchSummary) {
    for line in summary_lines(&summary) {
        println!("{}", line);
    }
}
