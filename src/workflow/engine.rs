//! Workflow engine
//!
//! This module contains the loop that turns every matching entry of a
//! directory into a tagged outcome.

use log::{debug, info, warn};

use crate::discovery::{DirectoryEntry, filter_matching, scan_directory};
use crate::errors::Result;
use crate::file_ops::{copy_with_metadata, destination_name};

use super::context::{ConversionOptions, ConversionOutcome, ConversionStats, SkipReason};

/// Converts every matching file in the options' directory
///
/// This function orchestrates the steps:
/// 1. Validate the options
/// 2. List the directory once and keep regular files ending with the source extension
/// 3. Derive the sibling destination name of each kept entry
/// 4. Copy the entry with its metadata, unless this is a dry run
///
/// A failure while copying one entry is recorded as `Failed` and the loop
/// moves on, so the returned list has exactly one outcome per matching entry.
///
/// # Arguments
/// * `options` - The directory, extensions and dry-run flag
///
/// # Returns
/// * `Result<Vec<ConversionOutcome>>` - One outcome per matching entry, in listing order
///
/// # Errors
/// * Returns an error if the options are invalid or the directory cannot be listed
pub fn convert_all(options: &ConversionOptions) -> Result<Vec<ConversionOutcome>> {
    options.validate()?;

    let entries = scan_directory(&options.directory)?;
    let matching = filter_matching(entries, &options.source_extension);

    info!(
        "Converting {} {} files in {}{}...",
        matching.len(),
        options.source_extension,
        options.directory.display(),
        if options.dry_run { " (dry run)" } else { "" }
    );

    let outcomes: Vec<ConversionOutcome> = matching
        .iter()
        .map(|entry| convert_entry(entry, options))
        .collect();

    let stats = ConversionStats::from_outcomes(&outcomes);
    info!(
        "Finished: {} matched, {} converted, {} skipped, {} failed",
        stats.matched, stats.converted, stats.skipped, stats.failed
    );

    Ok(outcomes)
}

/// Processes a single matching entry
///
/// Names are compared and joined as `OsString`; the outcome carries them in
/// lossy form for the report.
fn convert_entry(entry: &DirectoryEntry, options: &ConversionOptions) -> ConversionOutcome {
    let new_name = destination_name(
        &entry.name,
        &options.source_extension,
        &options.target_extension,
    );
    let original = entry.display_name();
    let new = new_name.to_string_lossy().into_owned();
    debug!("Processing file: {original} -> {new}");

    if new_name == entry.name {
        return ConversionOutcome::Skipped {
            original,
            new,
            reason: SkipReason::SameName,
        };
    }

    if options.dry_run {
        return ConversionOutcome::Skipped {
            original,
            new,
            reason: SkipReason::DryRun,
        };
    }

    let target_path = match entry.path.parent() {
        Some(parent) => parent.join(&new_name),
        None => options.directory.join(&new_name),
    };

    match copy_with_metadata(&entry.path, &target_path) {
        Ok(bytes) => {
            debug!("Copied {bytes} bytes to {}", target_path.display());
            ConversionOutcome::Converted { original, new }
        }
        Err(e) => {
            warn!("Failed to convert {original}: {e}");
            ConversionOutcome::Failed {
                original,
                error: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{create_dir, read_to_string, write};
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn entry(path: PathBuf) -> DirectoryEntry {
        DirectoryEntry::new(path).unwrap()
    }

    #[test]
    fn test_convert_entry_copies_file() {
        let temp_dir = tempdir().unwrap();
        let source = temp_dir.path().join("main.dart");
        write(&source, "void main() {}").unwrap();
        let options = ConversionOptions::new(temp_dir.path());

        let outcome = convert_entry(&entry(source), &options);

        assert_eq!(
            outcome,
            ConversionOutcome::Converted {
                original: "main.dart".to_string(),
                new: "main.txt".to_string(),
            }
        );
        assert_eq!(
            read_to_string(temp_dir.path().join("main.txt")).unwrap(),
            "void main() {}"
        );
    }

    #[test]
    fn test_convert_entry_dry_run_writes_nothing() {
        let temp_dir = tempdir().unwrap();
        let source = temp_dir.path().join("main.dart");
        write(&source, "void main() {}").unwrap();
        let options = ConversionOptions::new(temp_dir.path()).dry_run(true);

        let outcome = convert_entry(&entry(source), &options);

        assert_eq!(
            outcome,
            ConversionOutcome::Skipped {
                original: "main.dart".to_string(),
                new: "main.txt".to_string(),
                reason: SkipReason::DryRun,
            }
        );
        assert!(!temp_dir.path().join("main.txt").exists());
    }

    #[test]
    fn test_convert_entry_same_name_keeps_source() {
        let temp_dir = tempdir().unwrap();
        let source = temp_dir.path().join("notes.txt");
        write(&source, "keep me").unwrap();
        let options = ConversionOptions::new(temp_dir.path()).extensions(".txt", ".txt");

        let outcome = convert_entry(&entry(source.clone()), &options);

        assert!(matches!(
            outcome,
            ConversionOutcome::Skipped {
                reason: SkipReason::SameName,
                ..
            }
        ));
        assert_eq!(read_to_string(&source).unwrap(), "keep me");
    }

    #[test]
    fn test_convert_entry_records_failure() {
        let temp_dir = tempdir().unwrap();
        let source = temp_dir.path().join("blocked.dart");
        write(&source, "x").unwrap();
        create_dir(temp_dir.path().join("blocked.txt")).unwrap();
        let options = ConversionOptions::new(temp_dir.path());

        let outcome = convert_entry(&entry(source), &options);

        match outcome {
            ConversionOutcome::Failed { original, error } => {
                assert_eq!(original, "blocked.dart");
                assert!(!error.is_empty());
            }
            other => panic!("expected a failure, got {other:?}"),
        }
    }

    #[test]
    fn test_convert_all_rejects_invalid_options() {
        let temp_dir = tempdir().unwrap();
        write(temp_dir.path().join("main.dart"), "x").unwrap();
        let options = ConversionOptions::new(temp_dir.path()).extensions("", ".txt");

        assert!(convert_all(&options).is_err());
        assert!(!temp_dir.path().join("main.txt").exists());
    }
}
