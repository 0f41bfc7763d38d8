//! Copies every file with one extension in a directory to a sibling file
//! with another extension, keeping the content and timestamps.

pub mod cli;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod workflow;

pub mod prelude {
    pub use crate::cli::{get_conversion_options, get_log_file, get_matches, get_verbosity};
    pub use crate::errors::{
        directory_read_error, file_operation_error, generic_error, invalid_extension_error,
        missing_filename_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::workflow::{
        ConversionOptions, ConversionOutcome, ConversionStats, SkipReason, convert_all,
    };
}
