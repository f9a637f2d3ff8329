//! Console summary printing.
//!
//! Separate from core logic to allow gopot to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use crate::config::CONFIG_FILE_NAME;
use crate::core::{GenerateReport, TranslationIndex};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the run summary to stdout.
pub fn print_summary(report: &GenerateReport, verbose: bool) {
    print_summary_to(report, verbose, &mut io::stdout().lock());
}

/// Print the run summary to a custom writer.
///
/// Verbose mode lists every file block with its extracted values first.
pub fn print_summary_to<W: Write>(report: &GenerateReport, verbose: bool, writer: &mut W) {
    if verbose {
        print_entries(&report.index, writer);
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        "POT file generated successfully".green()
    );
    let _ = writeln!(
        writer,
        "Generated {} {}",
        report.entry_count,
        pluralize(report.entry_count, "entry", "entries")
    );
}

/// Print a note when no configuration file was found.
pub fn print_default_config_note(from_file: bool, verbose: bool) {
    if verbose && !from_file {
        eprintln!(
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }
}

/// Print confirmation for `gopot init`.
pub fn print_init_success_to<W: Write>(path: &std::path::Path, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} Created {}",
        SUCCESS_MARK.green(),
        path.display()
    );
}

fn print_entries<W: Write>(index: &TranslationIndex, writer: &mut W) {
    for file in index.files() {
        let count = file.values.len();
        let _ = writeln!(
            writer,
            "{}: {} {}",
            file.relative_key.bold(),
            count,
            pluralize(count, "entry", "entries")
        );
        for value in &file.values {
            let _ = writeln!(writer, "- {}", value);
        }
    }
}

fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
