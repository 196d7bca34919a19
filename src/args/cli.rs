use clap::{Args, Parser, Subcommand};
use std::time::Duration;

use super::parsers::parse_duration_arg;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Minimal async HTTP burst generator - fires concurrent GET batches on fixed or randomized schedules and reports per-batch latency stats."
)]
pub struct LoadArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(
        long = "timeout",
        value_parser = parse_duration_arg,
        default_value = "10s",
        global = true
    )]
    pub request_timeout: Duration,

    /// Connection establishment timeout (supports ms/s/m/h)
    #[arg(
        long = "connect-timeout",
        value_parser = parse_duration_arg,
        default_value = "5s",
        global = true
    )]
    pub connect_timeout: Duration,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Fire a single burst of requests and report one summary
    Normal(NormalArgs),
    /// Repeat fixed-size bursts at a fixed interval until a deadline
    Interval(IntervalArgs),
    /// Repeat randomly sized bursts at random intervals until a deadline
    Random(RandomArgs),
}

#[derive(Debug, Args, Clone)]
pub struct NormalArgs {
    /// Target URL for the burst
    #[arg(long, short)]
    pub url: String,

    /// Number of concurrent requests in the burst
    #[arg(long, short = 'n')]
    pub requests: u32,
}

#[derive(Debug, Args, Clone)]
pub struct IntervalArgs {
    /// Target URL for the bursts
    #[arg(long, short)]
    pub url: String,

    /// Number of concurrent requests per burst
    #[arg(long, short = 'n')]
    pub requests: u32,

    /// Pause between bursts (supports ms/s/m/h)
    #[arg(long, short, value_parser = parse_duration_arg)]
    pub interval: Duration,

    /// Wall-clock budget for the whole run (supports ms/s/m/h)
    #[arg(long = "max-duration", short = 'd', value_parser = parse_duration_arg)]
    pub max_duration: Duration,
}

#[derive(Debug, Args, Clone)]
pub struct RandomArgs {
    /// Target URL for the bursts
    #[arg(long, short)]
    pub url: String,

    /// Smallest burst size drawn per iteration
    #[arg(long = "min-requests")]
    pub min_requests: u32,

    /// Largest burst size drawn per iteration (inclusive)
    #[arg(long = "max-requests")]
    pub max_requests: u32,

    /// Shortest pause between bursts, in seconds (fractions allowed)
    #[arg(long = "min-interval")]
    pub min_interval: f64,

    /// Longest pause between bursts, in seconds (fractions allowed)
    #[arg(long = "max-interval")]
    pub max_interval: f64,

    /// Wall-clock budget for the whole run (supports ms/s/m/h)
    #[arg(long = "max-duration", short = 'd', value_parser = parse_duration_arg)]
    pub max_duration: Duration,
}
