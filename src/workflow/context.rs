//! Workflow context
//!
//! This module defines the options a conversion run is started with and
//! the per-entry outcomes it produces.

use std::fmt;
use std::path::PathBuf;

use crate::constants::{DEFAULT_DIRECTORY, DEFAULT_SOURCE_EXTENSION, DEFAULT_TARGET_EXTENSION};
use crate::errors::{Result, invalid_extension_error};

/// Options for a conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOptions {
    /// The directory whose entries are converted
    pub directory: PathBuf,
    /// Suffix identifying the files to copy
    pub source_extension: String,
    /// Extension given to the produced copies
    pub target_extension: String,
    /// Whether to only report what would be copied
    pub dry_run: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        ConversionOptions {
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            target_extension: DEFAULT_TARGET_EXTENSION.to_string(),
            dry_run: false,
        }
    }
}

impl ConversionOptions {
    /// Creates options for `directory` with the default extensions
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        ConversionOptions {
            directory: directory.into(),
            ..Default::default()
        }
    }

    /// Sets the source and target extensions
    pub fn extensions(mut self, source: &str, target: &str) -> Self {
        self.source_extension = source.to_string();
        self.target_extension = target.to_string();
        self
    }

    /// Sets the dry-run flag
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Checks that the extensions can be used to derive sibling filenames
    ///
    /// # Errors
    /// Returns an `InvalidExtension` error if the source extension is empty
    /// or either extension contains a path separator
    pub fn validate(&self) -> Result<()> {
        if self.source_extension.is_empty() {
            return Err(invalid_extension_error(
                &self.source_extension,
                "source extension must not be empty",
            ));
        }

        for extension in [&self.source_extension, &self.target_extension] {
            if extension.chars().any(std::path::is_separator) {
                return Err(invalid_extension_error(
                    extension,
                    "must not contain a path separator",
                ));
            }
        }

        Ok(())
    }
}

/// Why a matching entry was left alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Dry-run mode, nothing is written
    DryRun,
    /// The derived destination name is the source name itself
    SameName,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::DryRun => write!(f, "dry run"),
            SkipReason::SameName => write!(f, "destination equals source"),
        }
    }
}

/// Outcome of processing a single matching entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// The file was copied to its new name
    Converted { original: String, new: String },
    /// The file matched but nothing was written
    Skipped {
        original: String,
        new: String,
        reason: SkipReason,
    },
    /// Copying the file failed
    Failed { original: String, error: String },
}

impl ConversionOutcome {
    /// The name of the source entry this outcome belongs to
    pub fn original(&self) -> &str {
        match self {
            ConversionOutcome::Converted { original, .. }
            | ConversionOutcome::Skipped { original, .. }
            | ConversionOutcome::Failed { original, .. } => original,
        }
    }

    /// Whether the file was copied
    pub fn is_converted(&self) -> bool {
        matches!(self, ConversionOutcome::Converted { .. })
    }

    /// Whether copying the file failed
    pub fn is_failed(&self) -> bool {
        matches!(self, ConversionOutcome::Failed { .. })
    }
}

/// Statistics about a conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Number of entries that matched the filter
    pub matched: usize,
    /// Number of files copied
    pub converted: usize,
    /// Number of matching files left alone
    pub skipped: usize,
    /// Number of errors
    pub failed: usize,
}

impl ConversionStats {
    /// Tallies a list of outcomes
    pub fn from_outcomes(outcomes: &[ConversionOutcome]) -> Self {
        let mut stats = ConversionStats {
            matched: outcomes.len(),
            ..Default::default()
        };
        for outcome in outcomes {
            match outcome {
                ConversionOutcome::Converted { .. } => stats.converted += 1,
                ConversionOutcome::Skipped { .. } => stats.skipped += 1,
                ConversionOutcome::Failed { .. } => stats.failed += 1,
            }
        }
        stats
    }
}
