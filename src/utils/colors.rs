//! ANSI color helper utilities for terminal output.

use crate::models::outcome::Outcome;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Remove ANSI escapes, for width math on colored cells.
pub fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Win rows are green, loss rows red, as in the score line.
pub fn color_for_outcome(outcome: Outcome) -> &'static str {
    if outcome.is_win() { GREEN } else { RED }
}

pub fn colorize_outcome(outcome: Outcome) -> String {
    format!("{}{}{}", color_for_outcome(outcome), outcome.label(), RESET)
}
