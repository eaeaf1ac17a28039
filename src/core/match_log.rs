//! The match log and its score, kept in lockstep.

use crate::errors::{AppError, AppResult};
use crate::models::{Entry, Outcome};
use serde::Serialize;

/// Running score. `own` counts recorded wins, `opponent` recorded
/// losses; both move only together with the log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub own: u32,
    pub opponent: u32,
}

/// All state of one match: the chronological rally log, the score
/// derived from it, and the opponent's name. The log and score are
/// private so every mutation goes through `record`/`remove` and the
/// lockstep invariant cannot be broken from outside.
#[derive(Debug, Default)]
pub struct MatchState {
    pub opponent: String,
    log: Vec<Entry>,
    score: Score,
}

impl MatchState {
    pub fn new(opponent: String) -> Self {
        Self {
            opponent,
            log: Vec::new(),
            score: Score::default(),
        }
    }

    /// Append a rally stamped with the current time and bump the
    /// matching counter. Total: the reason was already resolved against
    /// the fixed vocabulary by the caller.
    pub fn record(&mut self, outcome: Outcome, reason: &'static str) -> Entry {
        let entry = Entry::new(outcome, reason);
        self.log.push(entry.clone());
        match outcome {
            Outcome::Win => self.score.own += 1,
            Outcome::Loss => self.score.opponent += 1,
        }
        entry
    }

    /// Remove the rally at `index` (0-based) and take back its point.
    /// The session prompt accepts any number, so the index is checked
    /// here rather than trusted.
    pub fn remove(&mut self, index: usize) -> AppResult<Entry> {
        if index >= self.log.len() {
            return Err(AppError::InvalidEntry(index + 1));
        }
        let entry = self.log.remove(index);
        match entry.outcome {
            Outcome::Win => self.score.own -= 1,
            Outcome::Loss => self.score.opponent -= 1,
        }
        Ok(entry)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.log
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }
}
