use std::fs;
use std::path::Path;

use crate::breakdown::consolidator::error::Result;
use crate::breakdown::consolidator::format::{CurrencyFormat, render_csv};
use crate::breakdown::consolidator::model::SummaryTable;

/// Writes the summary as the three-row comma-delimited table.
pub fn write_csv(path: &Path, summary: &SummaryTable, currency: &CurrencyFormat) -> Result<()> {
    fs::write(path, render_csv(summary, currency))?;
    Ok(())
}

/// Writes the summary as pretty-printed JSON.
pub fn write_json(path: &Path, summary: &SummaryTable) -> Result<()> {
    let json_string = serde_json::to_string_pretty(summary)?;
    fs::write(path, json_string)?;
    Ok(())
}
