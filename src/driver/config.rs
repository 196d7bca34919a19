use std::ops::RangeInclusive;
use std::time::Duration;

use rand::Rng;
use url::Url;

use crate::args::Command;
use crate::error::{AppError, AppResult, ValidationError};

/// Single burst: fire once, summarize, stop.
#[derive(Debug, Clone)]
pub struct NormalConfig {
    pub url: Url,
    pub requests: u32,
}

/// Fixed-size bursts separated by a fixed pause until the deadline.
#[derive(Debug, Clone)]
pub struct FixedIntervalConfig {
    pub url: Url,
    pub requests: u32,
    pub interval: Duration,
    pub max_duration: Duration,
}

/// Bursts of random size separated by random pauses until the deadline.
///
/// Both ranges are inclusive and redrawn independently each iteration.
/// `build_schedule` guarantees the ranges are not inverted, which the draw
/// methods rely on.
#[derive(Debug, Clone)]
pub struct RandomizedConfig {
    pub url: Url,
    pub requests: RangeInclusive<u32>,
    pub interval: RangeInclusive<Duration>,
    pub max_duration: Duration,
}

impl RandomizedConfig {
    pub fn draw_requests<R: Rng>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.requests.clone())
    }

    pub fn draw_pause<R: Rng>(&self, rng: &mut R) -> Duration {
        rng.gen_range(self.interval.clone())
    }
}

#[derive(Debug, Clone)]
pub enum Schedule {
    Normal(NormalConfig),
    FixedInterval(FixedIntervalConfig),
    Randomized(RandomizedConfig),
}

/// Turns parsed CLI arguments into a validated schedule.
///
/// This is the single rejection point for invalid configuration; once a
/// schedule is built, the drivers assume its invariants hold.
///
/// # Errors
///
/// Returns a validation error when the target URL is unusable, a range is
/// inverted, or an interval is not representable as a duration.
pub fn build_schedule(command: &Command) -> AppResult<Schedule> {
    match command {
        Command::Normal(args) => Ok(Schedule::Normal(NormalConfig {
            url: parse_target_url(&args.url)?,
            requests: args.requests,
        })),
        Command::Interval(args) => Ok(Schedule::FixedInterval(FixedIntervalConfig {
            url: parse_target_url(&args.url)?,
            requests: args.requests,
            interval: args.interval,
            max_duration: args.max_duration,
        })),
        Command::Random(args) => {
            let url = parse_target_url(&args.url)?;
            if args.min_requests > args.max_requests {
                return Err(AppError::validation(ValidationError::RequestRangeInverted {
                    min: args.min_requests,
                    max: args.max_requests,
                }));
            }
            let min_interval = parse_interval_secs(args.min_interval)?;
            let max_interval = parse_interval_secs(args.max_interval)?;
            if min_interval > max_interval {
                return Err(AppError::validation(
                    ValidationError::IntervalRangeInverted {
                        min: args.min_interval,
                        max: args.max_interval,
                    },
                ));
            }
            Ok(Schedule::Randomized(RandomizedConfig {
                url,
                requests: args.min_requests..=args.max_requests,
                interval: min_interval..=max_interval,
                max_duration: args.max_duration,
            }))
        }
    }
}

fn parse_target_url(value: &str) -> AppResult<Url> {
    let url = Url::parse(value).map_err(|source| {
        AppError::validation(ValidationError::InvalidUrl {
            url: value.to_owned(),
            source,
        })
    })?;
    if url.host_str().is_none() {
        return Err(AppError::validation(ValidationError::UrlMissingHost));
    }
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::validation(ValidationError::UnsupportedUrlScheme {
            scheme: other.to_owned(),
        })),
    }
}

fn parse_interval_secs(value: f64) -> AppResult<Duration> {
    Duration::try_from_secs_f64(value).map_err(|source| {
        AppError::validation(ValidationError::InvalidIntervalSeconds { value, source })
    })
}
