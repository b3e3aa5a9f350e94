//! Terminal output and the overwrite prompt.
//!
//! Message building lives in `formatter`; this module only talks to stdin.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use anyhow::Result;

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, display_history, display_status, display_success,
    display_version_tags,
};

/// Ask a yes/no question on stdout and read the answer from stdin.
///
/// Only "y" and "yes" (any case) count as yes; an empty answer is no.
pub fn confirm_action(question: &str) -> Result<bool> {
    print!("\n{} (y/N): ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    Ok(is_confirmation(&answer))
}

fn is_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Asks before overwriting an existing output file.
///
/// Returns `true` without prompting when the file does not exist, when `force`
/// is set, or when stdin is not an interactive terminal.
pub fn confirm_overwrite(path: &Path, force: bool) -> Result<bool> {
    if force || !path.exists() || !io::stdin().is_terminal() {
        return Ok(true);
    }

    confirm_action(&format!("{} already exists. Overwrite?", path.display()))
}
