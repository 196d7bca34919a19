use std::time::Duration;

use clap::Parser;

use super::parsers::parse_duration_arg;
use super::*;
use crate::error::{AppError, ValidationError};

fn parse(argv: &[&str]) -> Result<LoadArgs, String> {
    LoadArgs::try_parse_from(argv).map_err(|err| format!("Parse failed: {}", err))
}

#[test]
fn duration_parser_accepts_suffixed_values() -> Result<(), String> {
    let cases = [
        ("500ms", Duration::from_millis(500)),
        ("2s", Duration::from_secs(2)),
        ("3", Duration::from_secs(3)),
        ("2m", Duration::from_secs(120)),
        ("1h", Duration::from_secs(3_600)),
        (" 10s ", Duration::from_secs(10)),
    ];
    for (input, expected) in cases {
        let parsed = parse_duration_arg(input).map_err(|err| format!("{}: {}", input, err))?;
        if parsed != expected {
            return Err(format!("{}: expected {:?}, got {:?}", input, expected, parsed));
        }
    }
    Ok(())
}

#[test]
fn duration_parser_rejects_empty_value() -> Result<(), String> {
    let result = parse_duration_arg("  ");
    if let Err(AppError::Validation(ValidationError::DurationEmpty)) = &result {
        return Ok(());
    }
    Err(format!("Expected empty-duration error, got {:?}", result))
}

#[test]
fn duration_parser_rejects_zero() -> Result<(), String> {
    let result = parse_duration_arg("0s");
    if let Err(AppError::Validation(ValidationError::DurationZero)) = &result {
        return Ok(());
    }
    Err(format!("Expected zero-duration error, got {:?}", result))
}

#[test]
fn duration_parser_rejects_unknown_unit() -> Result<(), String> {
    let result = parse_duration_arg("5d");
    if let Err(AppError::Validation(ValidationError::InvalidDurationUnit { unit })) = &result {
        if unit == "d" {
            return Ok(());
        }
    }
    Err(format!("Expected unknown-unit error, got {:?}", result))
}

#[test]
fn duration_parser_rejects_overflowing_hours() -> Result<(), String> {
    let result = parse_duration_arg("18446744073709551615h");
    if let Err(AppError::Validation(ValidationError::DurationOverflow)) = &result {
        return Ok(());
    }
    Err(format!("Expected overflow error, got {:?}", result))
}

#[test]
fn duration_parser_rejects_missing_digits() -> Result<(), String> {
    let result = parse_duration_arg("ms");
    if let Err(AppError::Validation(ValidationError::InvalidDurationFormat { .. })) = &result {
        return Ok(());
    }
    Err(format!("Expected format error, got {:?}", result))
}

#[test]
fn normal_subcommand_parses() -> Result<(), String> {
    let args = parse(&["volley", "normal", "--url", "http://localhost/", "-n", "25"])?;

    let Command::Normal(normal) = &args.command else {
        return Err(format!("Expected normal command, got {:?}", args.command));
    };
    if normal.requests != 25 || normal.url != "http://localhost/" {
        return Err(format!("Unexpected normal args: {:?}", normal));
    }
    if args.request_timeout != Duration::from_secs(10) {
        return Err(format!("Unexpected default timeout: {:?}", args.request_timeout));
    }
    Ok(())
}

#[test]
fn interval_subcommand_parses_durations() -> Result<(), String> {
    let args = parse(&[
        "volley",
        "interval",
        "--url",
        "http://localhost/",
        "-n",
        "10",
        "--interval",
        "2s",
        "--max-duration",
        "1m",
    ])?;

    let Command::Interval(interval) = &args.command else {
        return Err(format!("Expected interval command, got {:?}", args.command));
    };
    if interval.interval != Duration::from_secs(2) {
        return Err(format!("Unexpected interval: {:?}", interval.interval));
    }
    if interval.max_duration != Duration::from_secs(60) {
        return Err(format!("Unexpected deadline: {:?}", interval.max_duration));
    }
    Ok(())
}

#[test]
fn random_subcommand_parses_fractional_intervals() -> Result<(), String> {
    let args = parse(&[
        "volley",
        "random",
        "--url",
        "http://localhost/",
        "--min-requests",
        "2",
        "--max-requests",
        "8",
        "--min-interval",
        "0.5",
        "--max-interval",
        "2.5",
        "--max-duration",
        "30s",
        "--timeout",
        "3s",
    ])?;

    let Command::Random(random) = &args.command else {
        return Err(format!("Expected random command, got {:?}", args.command));
    };
    if random.min_requests != 2 || random.max_requests != 8 {
        return Err(format!("Unexpected request bounds: {:?}", random));
    }
    if !(0.49..=0.51).contains(&random.min_interval)
        || !(2.49..=2.51).contains(&random.max_interval)
    {
        return Err(format!("Unexpected interval bounds: {:?}", random));
    }
    if args.request_timeout != Duration::from_secs(3) {
        return Err(format!("Unexpected timeout: {:?}", args.request_timeout));
    }
    Ok(())
}

#[test]
fn missing_subcommand_is_rejected() -> Result<(), String> {
    if parse(&["volley"]).is_ok() {
        return Err("Expected missing subcommand to fail".to_owned());
    }
    Ok(())
}

#[test]
fn interval_requires_deadline_flag() -> Result<(), String> {
    let result = parse(&[
        "volley",
        "interval",
        "--url",
        "http://localhost/",
        "-n",
        "10",
        "--interval",
        "2s",
    ]);
    if result.is_ok() {
        return Err("Expected missing --max-duration to fail".to_owned());
    }
    Ok(())
}
