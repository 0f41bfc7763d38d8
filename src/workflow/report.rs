//! Console report
//!
//! One banner line before the batch, one line per outcome and one banner
//! line after it, all on stdout.

use colored::Colorize;

use crate::constants::COMPLETION_BANNER;
use crate::logging::format_message;

use super::context::{ConversionOptions, ConversionOutcome};

/// The line printed before the batch starts
pub fn start_banner(options: &ConversionOptions) -> String {
    format!(
        "Converting {} files to {} files...",
        options.source_extension, options.target_extension
    )
}

/// The line printed once the batch has finished
pub fn completion_banner() -> String {
    COMPLETION_BANNER.to_string()
}

/// Renders an outcome as a plain report line
pub fn format_outcome(outcome: &ConversionOutcome) -> String {
    match outcome {
        ConversionOutcome::Converted { original, new } => {
            format!("success: {original} -> {new}")
        }
        ConversionOutcome::Skipped {
            original,
            new,
            reason,
        } => format!("skipped: {original} -> {new} ({reason})"),
        ConversionOutcome::Failed { original, error } => {
            format!("error processing {original}: {error}")
        }
    }
}

/// Renders an outcome, coloured when stdout is a terminal
fn render_outcome(outcome: &ConversionOutcome) -> String {
    let plain = format_outcome(outcome);
    let colored = match outcome {
        ConversionOutcome::Converted { .. } => plain.green().to_string(),
        ConversionOutcome::Skipped { .. } => plain.yellow().to_string(),
        ConversionOutcome::Failed { .. } => plain.red().to_string(),
    };
    format_message(&plain, &colored)
}

/// Prints the start banner
pub fn print_start(options: &ConversionOptions) {
    println!("{}", start_banner(options));
}

/// Prints one line per outcome followed by the completion banner
pub fn print_outcomes(outcomes: &[ConversionOutcome]) {
    for outcome in outcomes {
        println!("{}", render_outcome(outcome));
    }
    println!("{}", completion_banner());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::context::SkipReason;

    #[test]
    fn test_start_banner_uses_extensions() {
        let options = ConversionOptions::default();
        assert_eq!(
            start_banner(&options),
            "Converting .dart files to .txt files..."
        );

        let options = ConversionOptions::new(".").extensions(".rs", ".md");
        assert_eq!(start_banner(&options), "Converting .rs files to .md files...");
    }

    #[test]
    fn test_format_outcome_lines() {
        let converted = ConversionOutcome::Converted {
            original: "main.dart".to_string(),
            new: "main.txt".to_string(),
        };
        assert_eq!(format_outcome(&converted), "success: main.dart -> main.txt");

        let failed = ConversionOutcome::Failed {
            original: "locked.dart".to_string(),
            error: "Permission denied".to_string(),
        };
        assert_eq!(
            format_outcome(&failed),
            "error processing locked.dart: Permission denied"
        );

        let skipped = ConversionOutcome::Skipped {
            original: "main.dart".to_string(),
            new: "main.txt".to_string(),
            reason: SkipReason::DryRun,
        };
        assert_eq!(
            format_outcome(&skipped),
            "skipped: main.dart -> main.txt (dry run)"
        );
    }

    #[test]
    fn test_render_outcome_contains_plain_text() {
        let converted = ConversionOutcome::Converted {
            original: "main.dart".to_string(),
            new: "main.txt".to_string(),
        };
        assert!(render_outcome(&converted).contains("success: main.dart -> main.txt"));
    }
}
