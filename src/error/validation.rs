use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("URL is missing host.")]
    UrlMissingHost,
    #[error("Unsupported URL scheme '{scheme}'. Use http or https.")]
    UnsupportedUrlScheme { scheme: String },
    #[error("min-requests ({min}) must be <= max-requests ({max}).")]
    RequestRangeInverted { min: u32, max: u32 },
    #[error("min-interval ({min}s) must be <= max-interval ({max}s).")]
    IntervalRangeInverted { min: f64, max: f64 },
    #[error("Invalid interval '{value}': {source}")]
    InvalidIntervalSeconds {
        value: f64,
        #[source]
        source: std::time::TryFromFloatSecsError,
    },
}
