//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn fallback_source(name: &str) {
    warn(&format!(
        "Warning: OS random source unavailable, using {name}. Passwords are NOT cryptographically secure."
    ));
    warn("Run with --strict to refuse this fallback.");
}

pub fn usage_hint() {
    error("Run with --help for usage.");
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        println!("*** {count} PASSWORD(S) COPIED TO CLIPBOARD ***");
    }
}

/// Print clipboard error - NOT suppressed
pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Prompt user when clipboard is unavailable. Returns true to fallback to terminal, false to abort.
/// In quiet/non-interactive mode, silently falls back to terminal.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

pub fn defaults_saved(path: &str) {
    if !quiet::enabled() {
        println!("Defaults saved \u{2192} {path}");
    }
}
