//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.
//! `format_*` functions build strings and are unit tested; `display_*` functions print them.

use std::path::Path;

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::SemanticVersion;
use crate::history::VersionHistoryEntry;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Banner printed at the start of a run.
pub fn format_run_banner(repository: &Path, from: &str, to: &str, output: &Path) -> String {
    format!(
        "Aggregating commits in repository {}, from {} to {} into output file: {}",
        repository.display(),
        if from.is_empty() { "<start>" } else { from },
        to,
        output.display()
    )
}

/// List of discovered release tags, oldest first.
pub fn format_version_tags(versions: &[SemanticVersion]) -> String {
    let mut out = String::from("The following version tags were found:");
    for version in versions {
        out.push_str(&format!("\n  - {} ({})", version.tag, version));
    }
    out
}

pub fn display_version_tags(versions: &[SemanticVersion]) {
    println!("\n{}", style(format_version_tags(versions)).bold());
}

/// One line per processed release range.
pub fn format_history_entry(entry: &VersionHistoryEntry) -> String {
    let count = entry.notes.len();
    format!(
        "Release notes from {} until {}: {} {}",
        entry.previous.tag,
        entry.version.tag,
        count,
        if count == 1 { "note" } else { "notes" }
    )
}

pub fn display_history(history: &[VersionHistoryEntry]) {
    for entry in history {
        display_status(&format_history_entry(entry));
    }
}
