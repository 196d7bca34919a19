//! Core library for the `volley` CLI.
//!
//! This crate provides the internal building blocks used by the binary: CLI
//! argument types, the shared HTTP client and request executor, batch
//! fan-out, summary aggregation, and the schedule drivers. The primary
//! user-facing interface is the `volley` command-line application; library
//! APIs may evolve as the CLI grows.
pub mod args;
pub mod driver;
pub mod error;
pub mod http;
pub mod metrics;
