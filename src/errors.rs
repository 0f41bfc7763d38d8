use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the extension converter
#[derive(Debug)]
pub enum Error {
    /// Error related to copying a single file or its metadata
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error when the directory listing cannot be read
    DirectoryRead { source: io::Error, path: PathBuf },
    /// Error when a configured extension cannot be used
    InvalidExtension { extension: String, detail: String },
    /// Error when a listed path has no final component
    MissingFilename { path: PathBuf },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileOperation {
                source,
                path,
                operation,
            } => {
                write!(
                    f,
                    "Failed to {} file {}: {}",
                    operation,
                    path.display(),
                    source
                )
            }
            Error::DirectoryRead { source, path } => {
                write!(f, "Failed to read directory {}: {}", path.display(), source)
            }
            Error::InvalidExtension { extension, detail } => {
                write!(f, "Invalid extension '{extension}': {detail}")
            }
            Error::MissingFilename { path } => {
                write!(f, "Path has no filename: {}", path.display())
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::DirectoryRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Custom Result type for the extension converter
///
/// # Examples
/// ```
/// use ext_convert::prelude::{Result, generic_error};
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
///
///     // Or return an error
///     // Err(generic_error("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a directory read error
pub fn directory_read_error(err: io::Error, path: PathBuf) -> Error {
    Error::DirectoryRead { source: err, path }
}

/// Helper function to create an invalid extension error
pub fn invalid_extension_error(extension: &str, detail: &str) -> Error {
    Error::InvalidExtension {
        extension: extension.to_string(),
        detail: detail.to_string(),
    }
}

/// Helper function to create a missing filename error
pub fn missing_filename_error(path: PathBuf) -> Error {
    Error::MissingFilename { path }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
