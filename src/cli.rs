use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command, command};

use crate::constants::{
    DEFAULT_DIRECTORY, DIRECTORY_HELP, DRY_RUN_HELP, LOG_FILE_HELP, VERBOSE_HELP,
};
use crate::errors::{Result, generic_error};
use crate::logging::LogLevel;
use crate::workflow::ConversionOptions;

/// Builds the command-line interface definition
///
/// Defines the following arguments:
/// - `directory`: Directory whose files are converted
/// - `dry`: Report without copying any files
/// - `verbose`: Increase verbosity level
/// - `log_file`: Also write log records to a file
pub fn build_command() -> Command {
    // define arg for the directory to convert
    let arg_directory = Arg::new("directory")
        .short('d')
        .long("directory")
        .help(DIRECTORY_HELP)
        .default_value(DEFAULT_DIRECTORY);

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(clap::ArgAction::SetTrue);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP);

    command!()
        .name("extconv")
        .arg(arg_directory)
        .arg(arg_dry)
        .arg(log_file)
        .arg(arg_verbose)
}

/// Parses the process arguments
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Parses the given arguments
///
/// # Errors
/// Returns an error if the arguments do not match the interface
pub fn get_matches_from<I, T>(args: I) -> Result<ArgMatches>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    build_command()
        .try_get_matches_from(args)
        .map_err(|e| generic_error(&e.to_string()))
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Gets the log file path, empty when no log file was requested
pub fn get_log_file(matches: &ArgMatches) -> String {
    matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_default()
}

/// Gets the directory to convert with `~` and environment variables expanded
///
/// # Errors
/// Returns an error if a referenced environment variable is not set
pub fn get_directory(matches: &ArgMatches) -> Result<PathBuf> {
    let raw = matches
        .get_one::<String>("directory")
        .map(String::as_str)
        .unwrap_or(DEFAULT_DIRECTORY);
    let expanded = shellexpand::full(raw)
        .map_err(|e| generic_error(&format!("Failed to expand directory '{raw}': {e}")))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Builds the conversion options from the command-line arguments
///
/// The extensions always keep their defaults; only the directory and the
/// dry-run flag come from the command line.
pub fn get_conversion_options(matches: &ArgMatches) -> Result<ConversionOptions> {
    let directory = get_directory(matches)?;
    Ok(ConversionOptions::new(directory).dry_run(matches.get_flag("dry")))
}
