//! Schedule drivers: control loops that repeatedly fire batches over time.
//!
//! Batches from one driver run strictly sequentially; only the requests
//! inside a batch are concurrent. A driver stops on its wall-clock deadline
//! and on nothing else — failed requests and all-failure batches never end
//! the loop.
mod config;
mod fixed_interval;
mod normal;
mod randomized;


pub use config::{
    FixedIntervalConfig, NormalConfig, RandomizedConfig, Schedule, build_schedule,
};
pub use fixed_interval::FixedIntervalDriver;
pub use normal::NormalDriver;
pub use randomized::RandomizedDriver;

/// Explicit loop state. The only Running -> Stopped transition is the
/// deadline check at the top of an iteration, so a batch already in flight
/// is never interrupted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Stopped,
}
