//! Workflow module
//!
//! This module contains the conversion loop, its options and outcomes, and
//! the console report.

mod context;
mod engine;
pub mod report;

pub use context::{ConversionOptions, ConversionOutcome, ConversionStats, SkipReason};
pub use engine::convert_all;
