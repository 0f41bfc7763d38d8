//! File operations module
//!
//! This module contains the filename matching and naming rules and the
//! metadata preserving copy.

mod actions;
mod naming;

pub use actions::copy_with_metadata;
pub use naming::{destination_name, has_extension};
