use super::MAX_PASSWORDS;
use crate::pass::{MAX_LENGTH, MIN_LENGTH};
use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn print_help() {
    box_top("Passforge");
    box_line_center("Random password generator with a strength score");
    box_line("");
    box_line("USAGE:");
    box_line("  passforge [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt(
        "  -l, --length <N>",
        &format!("Characters per password, {MIN_LENGTH}-{MAX_LENGTH} (default: 16)"),
    );
    box_opt(
        "  -n, --number <N>",
        &format!("How many passwords to generate, 1-{MAX_PASSWORDS} (default: 1)"),
    );
    box_opt("      --no-upper", "Exclude uppercase letters A-Z");
    box_opt("      --no-lower", "Exclude lowercase letters a-z");
    box_opt("      --no-digits", "Exclude digits 0-9");
    box_opt("      --no-symbols", "Exclude symbols !@#$%^&*()_+-=[]{}|;:,.<>?");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy passwords to the clipboard instead of printing");
    box_opt("  -q, --quiet", "Print passwords only: no report, no warnings");
    box_line("");
    box_line(" Randomness:");
    box_opt(
        "      --strict",
        "Fail instead of falling back to the non-cryptographic source",
    );
    box_line("");
    box_line(" Defaults:");
    box_opt("  -s, --save", "Save length and classes as defaults for later runs");
    box_opt("  -d, --default", "Ignore saved defaults for this run");
    box_line("");
    box_opt("  -h, --help", "Show this help");
    box_opt("  -v, --version", "Show version");
    box_line("");
    box_line("Logging goes to stderr; set RUST_LOG=debug for details.");
    box_bottom();
}
