//! Per-reason counts, derived from the full log on every call.

use crate::models::outcome::Outcome;
use crate::models::reasons::reasons_for;
use crate::models::Entry;

/// Count how often each reason of `outcome`'s fixed list occurs in the
/// log. Every category appears, in list order, zero included, so the
/// chart axes stay stable. The log is tens of entries at most; a fresh
/// O(n) pass per call is fine.
pub fn reason_counts(entries: &[Entry], outcome: Outcome) -> Vec<(&'static str, usize)> {
    reasons_for(outcome)
        .iter()
        .map(|reason| {
            let n = entries
                .iter()
                .filter(|e| e.outcome == outcome && e.reason == *reason)
                .count();
            (*reason, n)
        })
        .collect()
}
