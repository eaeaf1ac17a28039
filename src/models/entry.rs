use super::outcome::Outcome;
use chrono::{Local, NaiveTime};

/// One recorded rally. Immutable once created; the log only ever
/// appends or removes whole entries.
#[derive(Debug, Clone)]
pub struct Entry {
    pub outcome: Outcome,
    pub reason: &'static str,
    pub time: NaiveTime,
}

impl Entry {
    /// Stamp a new entry with the current local time.
    pub fn new(outcome: Outcome, reason: &'static str) -> Self {
        Self {
            outcome,
            reason,
            time: Local::now().time(),
        }
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }
}
