//! File discovery module
//!
//! This module contains components for listing a directory and picking the
//! entries to convert.

mod scanner;

pub use scanner::{DirectoryEntry, filter_matching, scan_directory};
