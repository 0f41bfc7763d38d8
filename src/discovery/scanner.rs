//! Directory scanning functionality
//!
//! This module takes a one-off snapshot of the entries directly inside a
//! directory and decides which of them are candidates for conversion.

use std::ffi::OsString;
use std::fs::read_dir;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::errors::{Result, directory_read_error, missing_filename_error};
use crate::file_ops::has_extension;

/// A single entry of the directory listing, captured at scan time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// The full path of the entry
    pub path: PathBuf,
    /// The filename of the entry, not necessarily valid Unicode
    pub name: OsString,
    /// Whether the entry is a regular file (symlinks are followed)
    pub is_file: bool,
}

impl DirectoryEntry {
    /// Creates a new DirectoryEntry from a path
    ///
    /// # Errors
    /// Returns an error if the path has no filename
    pub fn new(path: PathBuf) -> Result<Self> {
        let name = path
            .file_name()
            .ok_or_else(|| missing_filename_error(path.clone()))?
            .to_os_string();
        let is_file = path.is_file();

        Ok(DirectoryEntry {
            path,
            name,
            is_file,
        })
    }

    /// Whether the entry is a regular file whose name ends with `extension`
    pub fn matches(&self, extension: &str) -> bool {
        self.is_file && has_extension(&self.name, extension)
    }

    /// The filename for display, with invalid sequences replaced
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }
}

/// Lists the entries directly inside `directory`
///
/// Subdirectories are reported as entries but never descended into.
///
/// # Errors
/// Returns a `DirectoryRead` error if the directory or one of its entries
/// cannot be read
pub fn scan_directory(directory: &Path) -> Result<Vec<DirectoryEntry>> {
    debug!("Scanning directory: {}", directory.display());

    let listing =
        read_dir(directory).map_err(|e| directory_read_error(e, directory.to_path_buf()))?;

    let mut entries = Vec::new();
    for entry in listing {
        let entry = entry.map_err(|e| directory_read_error(e, directory.to_path_buf()))?;
        let directory_entry = DirectoryEntry::new(entry.path())?;
        trace!(
            "Found entry {} (file: {})",
            directory_entry.display_name(),
            directory_entry.is_file
        );
        entries.push(directory_entry);
    }

    debug!("Found {} entries in directory", entries.len());

    Ok(entries)
}

/// Keeps only the entries that are regular files ending with `extension`
pub fn filter_matching(entries: Vec<DirectoryEntry>, extension: &str) -> Vec<DirectoryEntry> {
    entries
        .into_iter()
        .filter(|entry| entry.matches(extension))
        .collect()
}
