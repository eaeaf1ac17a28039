use crate::errors::AppResult;
use crate::export::EntryExport;
use crate::models::Entry;
use csv::Writer;
use std::fs::File;
use std::io::Write as _;
use std::path::Path;

/// Write the match document: UTF-8 BOM (Excel needs it to pick up the
/// Chinese labels), a title line naming the opponent, the column
/// header, then one row per rally in log order.
///
/// The opponent name goes out verbatim. Reasons come from the fixed
/// vocabularies and contain no commas, so nothing needs quoting.
pub fn write_csv(path: &Path, opponent: &str, entries: &[Entry]) -> AppResult<()> {
    let mut file = File::create(path)?;
    file.write_all("\u{FEFF}".as_bytes())?;
    writeln!(file, "对手名称：{}", opponent)?;

    let mut wtr = Writer::from_writer(file);
    wtr.write_record(["时间", "类型", "原因"])?;

    for entry in entries {
        let row = EntryExport::from(entry);
        wtr.write_record([row.time.as_str(), row.kind.as_str(), row.reason.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}
