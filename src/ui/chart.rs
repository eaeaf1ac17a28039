//! Horizontal bar charts for the per-reason summaries.

use crate::models::outcome::Outcome;
use crate::utils::colors::{GREY, RESET, color_for_outcome};
use unicode_width::UnicodeWidthStr;

/// Render one outcome's histogram as aligned bar rows. Every category
/// is present, zero counts included, so consecutive charts keep the
/// same shape while the match runs.
pub fn render(outcome: Outcome, counts: &[(&'static str, usize)]) -> String {
    let label_w = counts
        .iter()
        .map(|(reason, _)| UnicodeWidthStr::width(*reason))
        .max()
        .unwrap_or(0);

    let color = color_for_outcome(outcome);
    let mut out = String::new();

    for (reason, count) in counts {
        let pad = " ".repeat(label_w - UnicodeWidthStr::width(*reason));
        if *count == 0 {
            out.push_str(&format!("  {reason}{pad}  {GREY}0{RESET}\n"));
        } else {
            let bar = "█".repeat(*count);
            out.push_str(&format!("  {reason}{pad}  {color}{bar}{RESET} {count}\n"));
        }
    }

    out
}
