//! Seeded synthetic employee datasets and the descriptive statistics computed over them.
//!
//! The pipeline is [`dataset::generate`] → [`analysis::analyze`], with
//! [`dataset::export`] writing the table to CSV and reading it back.

pub mod analysis;
pub mod config;
pub mod dataset;
pub mod error;
pub mod telemetry;
