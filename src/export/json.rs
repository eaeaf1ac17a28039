use crate::core::match_log::{MatchState, Score};
use crate::errors::AppResult;
use crate::export::EntryExport;
use serde::Serialize;
use std::fs::File;
use std::io::Write as _;
use std::path::Path;

#[derive(Serialize)]
struct MatchExport<'a> {
    opponent: &'a str,
    score: Score,
    entries: Vec<EntryExport>,
}

/// Export the whole match as a pretty-printed JSON document.
pub fn write_json(path: &Path, state: &MatchState) -> AppResult<()> {
    let doc = MatchExport {
        opponent: &state.opponent,
        score: state.score(),
        entries: state.entries().iter().map(EntryExport::from).collect(),
    };

    let json_data = serde_json::to_string_pretty(&doc)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    Ok(())
}
