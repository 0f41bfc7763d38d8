//! File copy functionality
//!
//! Copies a file onto its sibling destination and carries the source
//! timestamps over.

use std::fs;
use std::io;
use std::path::Path;

use filetime::FileTime;
use fs_extra::file::{CopyOptions, copy};
use log::debug;
use same_file::is_same_file;

use crate::errors::{Result, file_operation_error};

/// Copies `source_path` to `target_path`, preserving metadata
///
/// Content and permission bits are copied, then the access and modification
/// times of the source are applied to the copy. An existing file at
/// `target_path` is overwritten, unless it resolves to the source itself
/// through a symlink or hard link.
///
/// # Arguments
/// * `source_path` - The file to copy
/// * `target_path` - Where the copy is written
///
/// # Returns
/// * `Result<u64>` - The number of bytes copied
///
/// # Errors
/// * Returns a `FileOperation` error if reading the source metadata, copying
///   or setting the timestamps fails, or if both paths name the same file
pub fn copy_with_metadata(source_path: &Path, target_path: &Path) -> Result<u64> {
    let metadata = fs::metadata(source_path)
        .map_err(|e| file_operation_error(e, source_path.to_path_buf(), "read metadata of"))?;
    let accessed = FileTime::from_last_access_time(&metadata);
    let modified = FileTime::from_last_modification_time(&metadata);

    // Copying opens the target with truncation, which would empty a shared file
    if target_path.exists() {
        let same = is_same_file(source_path, target_path)
            .map_err(|e| file_operation_error(e, target_path.to_path_buf(), "inspect"))?;
        if same {
            return Err(file_operation_error(
                io::Error::other(format!(
                    "{} is the same file as the source",
                    target_path.display()
                )),
                source_path.to_path_buf(),
                "copy",
            ));
        }
    }

    debug!(
        "Copying file: {} -> {}",
        source_path.display(),
        target_path.display()
    );
    let options = CopyOptions::new().overwrite(true);
    let bytes = copy(source_path, target_path, &options).map_err(|e| {
        file_operation_error(io::Error::other(e), source_path.to_path_buf(), "copy")
    })?;

    filetime::set_file_times(target_path, accessed, modified).map_err(|e| {
        file_operation_error(e, target_path.to_path_buf(), "set timestamps on")
    })?;

    Ok(bytes)
}
