/// Constants used throughout the application
///
/// This module centralises defaults, banner texts and help strings.

/// Extension of the files that get copied
pub const DEFAULT_SOURCE_EXTENSION: &str = ".dart";

/// Extension given to the produced copies
pub const DEFAULT_TARGET_EXTENSION: &str = ".txt";

/// Directory scanned when none is given on the command line
pub const DEFAULT_DIRECTORY: &str = ".";

/// Banner printed once the batch has finished
pub const COMPLETION_BANNER: &str = "Conversion complete!";

/// Help text for the directory command-line option
pub const DIRECTORY_HELP: &str = "Directory whose files are converted";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Report what would be copied without writing any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log records to this file";
