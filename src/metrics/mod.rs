//! Per-request outcomes and batch aggregation.
mod lines;
mod summary;
mod types;


pub use lines::summary_lines;
pub use summary::summarize;
pub use types::{BatchResult, BatchSummary, RequestOutcome};
