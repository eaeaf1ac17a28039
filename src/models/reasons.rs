//! The two fixed reason vocabularies. Reasons are always picked by menu
//! number; free text never enters the log.

use crate::models::outcome::Outcome;

/// Why a rally was lost, in menu order.
pub const LOSS_REASONS: [&str; 7] = [
    "接发失误",
    "步伐问题",
    "危险区球",
    "被调动",
    "击球出界",
    "判断失误",
    "网前丢球",
];

/// How a rally was won, in menu order.
pub const WIN_REASONS: [&str; 4] = [
    "杀球",
    "调动对手",
    "对手失误",
    "网前得分",
];

/// The category list matching an outcome.
pub fn reasons_for(outcome: Outcome) -> &'static [&'static str] {
    match outcome {
        Outcome::Win => &WIN_REASONS,
        Outcome::Loss => &LOSS_REASONS,
    }
}

/// Resolve a 1-based menu number against the list for `outcome`.
pub fn reason_by_number(outcome: Outcome, number: usize) -> Option<&'static str> {
    if number == 0 {
        return None;
    }
    reasons_for(outcome).get(number - 1).copied()
}
