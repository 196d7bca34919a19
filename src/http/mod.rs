//! HTTP client construction, single-request execution, and batch fan-out.
mod batch;
mod client;
mod executor;

#[cfg(test)]
pub(crate) mod test_support;

pub use batch::run_batch;
pub use client::{ClientOptions, build_client};
pub use executor::execute;
